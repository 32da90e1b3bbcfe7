//! The column engine: display-width measurement and the operations built on it.
//!
//! [`ColumnEngine`] measures text the way a monospace terminal renders it.
//! Grapheme clusters count once, tabs advance to the next tab stop, and
//! `ESC ... m` escape runs take no columns while still being copied into
//! every output.
//!
//! # Examples
//!
//! ```
//! use termtext::ColumnEngine;
//!
//! let engine = ColumnEngine::default();
//! assert_eq!(engine.width("\x1b[1mbold\x1b[0m"), 4);
//! assert_eq!(engine.width("漢字"), 4);
//! assert_eq!(engine.align_right("漢", 4), "  漢");
//! assert_eq!(engine.wrap("Hello, world!", 10, ""), "Hello, wor\nld!");
//! ```

mod align;
mod scan;
mod slice;
mod wrap;

pub use align::Alignment;

use crate::config::EngineOptions;
use crate::unicode::{Cluster, clusters, cluster_width};
use scan::{Advance, ColumnScanner};
use std::borrow::Cow;

/// Column-aware text operations under one configuration.
///
/// An engine is immutable once built, so it can be shared between threads
/// and several engines with different settings can coexist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnEngine {
    options: EngineOptions,
}

impl ColumnEngine {
    /// Create an engine with the given options.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// The options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Columns between tab stops.
    #[must_use]
    pub fn tab_width(&self) -> usize {
        self.options.tab_width
    }

    /// Get the display width of a string in terminal columns.
    ///
    /// ```
    /// # use termtext::ColumnEngine;
    /// let engine = ColumnEngine::default();
    /// assert_eq!(engine.width(""), 0);
    /// assert_eq!(engine.width("aaaa\t"), 8);
    /// assert_eq!(engine.width("\x1b[1mX\x1b[0m"), 1);
    /// ```
    #[must_use]
    pub fn width(&self, s: &str) -> usize {
        let mut scanner = self.scanner();
        for cluster in clusters(s) {
            scanner.advance(&cluster);
        }
        scanner.column()
    }

    /// Expand tabs to spaces.
    ///
    /// Each tab becomes as many spaces as it takes to reach the next tab
    /// stop. Everything else, escape runs included, is copied unchanged.
    /// Width overrides play no part in placing tab stops, so with overrides
    /// set the result can measure differently from `s`.
    #[must_use]
    pub fn expand(&self, s: &str) -> String {
        self.expanded(s).into_owned()
    }

    /// [`expand`](Self::expand) that borrows when there is nothing to do.
    pub(crate) fn expanded<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if !s.contains('\t') {
            return Cow::Borrowed(s);
        }

        let mut out = String::with_capacity(s.len() + self.options.tab_width);
        let mut scanner = ColumnScanner::for_expansion(&self.options);
        for cluster in clusters(s) {
            match scanner.advance(&cluster) {
                Advance::Tab(n) => out.extend(std::iter::repeat_n(' ', n)),
                Advance::Text(_) | Advance::Escape => out.push_str(cluster.text),
            }
        }
        Cow::Owned(out)
    }

    pub(crate) fn scanner(&self) -> ColumnScanner<'_> {
        ColumnScanner::new(&self.options)
    }

    /// Width of a cluster on its own: overrides, then the default table.
    ///
    /// No tab stops and no escape runs; this is how the wrap operations
    /// measure unless escape-aware wrapping is enabled.
    pub(crate) fn cluster_columns(&self, cluster: &Cluster<'_>) -> usize {
        if let Some(width) = cluster
            .single_char()
            .and_then(|c| self.options.overrides.get(c))
        {
            return width;
        }
        cluster_width(cluster.text, self.options.width_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidthOverrides;

    fn engine() -> ColumnEngine {
        ColumnEngine::default()
    }

    #[test]
    fn test_width_basic() {
        let e = engine();
        assert_eq!(e.width(""), 0);
        assert_eq!(e.width("a"), 1);
        assert_eq!(e.width("a\x05"), 1);
        assert_eq!(e.width("\u{200B}\u{feff}"), 0);
    }

    #[test]
    fn test_width_tabs() {
        let e = engine();
        let cases = [
            ("\t", 8),
            ("\ta", 9),
            ("a\t", 8),
            ("aaaa\tx", 9),
            ("aaaaaaa\tx", 9),
            ("\t\t", 16),
            ("a\ta\t", 16),
            ("a\ta\ta", 17),
            ("\tሧ", 9),
            ("ሧ\t", 8),
            ("ሧሧሧሧ\tx", 9),
            ("ሧሧሧሧሧሧሧ\tx", 9),
            ("ሧ\tሧ\t", 16),
            ("ሧ\tሧ\tሧ", 17),
            ("🧑\t🧑", 10),
        ];
        for (input, want) in cases {
            assert_eq!(e.width(input), want, "{input:?}");
        }
    }

    #[test]
    fn test_width_escapes() {
        let e = engine();
        assert_eq!(e.width("\x1b[1m"), 0);
        assert_eq!(e.width("\x1b[1mX\x1b[0m"), 1);
        assert_eq!(e.width("\x1b123]m asd\x1b0m"), 4);
        assert_eq!(e.width("\x1b[31"), 0);
    }

    #[test]
    fn test_width_clusters() {
        let e = engine();
        assert_eq!(e.width("Mo\u{0308}\u{0308}hr"), 4);
        assert_eq!(e.width("🧑\u{200d}🚒"), 2);
        assert_eq!(e.width("🧑🏽\u{200d}🚒"), 2);
    }

    #[test]
    fn test_width_tab_stop_setting() {
        let e = ColumnEngine::new(EngineOptions::default().with_tab_width(4));
        assert_eq!(e.tab_width(), 4);
        assert_eq!(e.width("\t"), 4);
        assert_eq!(e.width("abcde\t"), 8);
    }

    #[test]
    fn test_width_overrides() {
        let e = ColumnEngine::new(
            EngineOptions::default().with_overrides(WidthOverrides::json_escapes()),
        );
        assert_eq!(e.width("a\tb"), 4);
        assert_eq!(e.width("line\n"), 6);
        // CRLF is a single two-codepoint cluster and bypasses the table
        assert_eq!(e.width("\r\n"), 0);
    }

    #[test]
    fn test_expand() {
        let e = engine();
        let cases = [
            ("", String::new()),
            ("\t", " ".repeat(8)),
            ("xx\t", format!("xx{}", " ".repeat(6))),
            ("🧑\t", format!("🧑{}", " ".repeat(6))),
            (
                "\x1b123]mMo\u{0308}\u{0308}h🧑\x1b0m\t",
                "\x1b123]mMo\u{0308}\u{0308}h🧑\x1b0m   ".to_string(),
            ),
        ];
        for (input, want) in cases {
            assert_eq!(e.expand(input), want, "{input:?}");
        }
    }

    #[test]
    fn test_expand_borrows_without_tabs() {
        let e = engine();
        assert!(matches!(e.expanded("no tabs here"), Cow::Borrowed(_)));
        assert!(matches!(e.expanded("tab\there"), Cow::Owned(_)));
    }

    #[test]
    fn test_expand_ignores_overrides() {
        let overrides = WidthOverrides::new().with('\t', 2).with('x', 3);
        let e = ColumnEngine::new(EngineOptions::default().with_overrides(overrides));
        assert_eq!(e.expand("\t|"), format!("{}|", " ".repeat(8)));
        assert_eq!(e.expand("x\t|"), format!("x{}|", " ".repeat(7)));
        // Width still counts the override
        assert_eq!(e.width("x\t|"), 6);

        let json = ColumnEngine::new(
            EngineOptions::default().with_overrides(WidthOverrides::json_escapes()),
        );
        assert_eq!(json.expand("a\tb"), format!("a{}b", " ".repeat(7)));
        assert_eq!(json.align_left("a\tb", 10), format!("a{}b ", " ".repeat(7)));
    }

    #[test]
    fn test_cluster_columns_ignores_escape_state() {
        let e = engine();
        let widths: Vec<_> = clusters("\x1b[1m").map(|c| e.cluster_columns(&c)).collect();
        assert_eq!(widths, vec![0, 1, 1, 1]);
    }
}
