//! Fuzz target for the column operations.
//!
//! Runs every layout operation on arbitrary text and engine settings.
//! Nothing may panic, and the width bounds that hold for text without
//! overrides or escape runs are checked.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termtext::{Alignment, ColumnEngine, EngineOptions, WidthMethod, WidthOverrides};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    prefix: &'a str,
    tab_width: u8,
    unicode_widths: bool,
    escape_aware_wrap: bool,
    overrides: Vec<(char, u8)>,
    start: u8,
    stop: u8,
    width: u8,
}

fuzz_target!(|input: Input<'_>| {
    let method = if input.unicode_widths {
        WidthMethod::Unicode
    } else {
        WidthMethod::WcWidth
    };
    let overrides: WidthOverrides = input
        .overrides
        .iter()
        .take(8)
        .map(|&(c, w)| (c, usize::from(w % 4)))
        .collect();
    let engine = ColumnEngine::new(
        EngineOptions::default()
            .with_tab_width(usize::from(input.tab_width % 17))
            .with_width_method(method)
            .with_overrides(overrides)
            .with_escape_aware_wrap(input.escape_aware_wrap),
    );

    let text = input.text;
    let width = engine.width(text);
    assert!(!engine.expand(text).contains('\t'));
    let plain = engine.options().overrides().is_empty() && !text.contains('\x1b');

    let target = usize::from(input.width);
    for alignment in [Alignment::Left, Alignment::Right, Alignment::Center] {
        let _ = engine.align(text, target, alignment);
    }
    if plain {
        assert_eq!(engine.width(&engine.align_left(text, target)), width.max(target));
    }

    let (start, stop) = (usize::from(input.start), usize::from(input.stop));
    let sliced = engine.slice(text, start, stop);
    if plain && stop > start {
        assert!(engine.width(&sliced) <= stop - start);
    }
    let _ = engine.slice_range(text, start..);

    let _ = engine.wrap(text, target, input.prefix);
    let _ = engine.word_wrap(text, target, input.prefix);
});
