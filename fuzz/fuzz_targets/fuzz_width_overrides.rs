//! Fuzz target for width-override parsing.
//!
//! Tests that `WidthOverrides::from_str` rejects malformed lists without
//! panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termtext::WidthOverrides;

fuzz_target!(|data: &str| {
    if let Ok(overrides) = data.parse::<WidthOverrides>() {
        assert!(overrides.len() <= data.split(',').count());
    }
});
