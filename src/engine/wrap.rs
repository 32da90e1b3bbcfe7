//! Hard and word-preserving line wrapping.

use super::ColumnEngine;
use super::scan::ColumnScanner;
use crate::unicode::{Cluster, clusters};

/// Output buffer that knows where the current line starts.
struct LineWriter<'p> {
    out: String,
    prefix: &'p str,
    line_start: usize,
}

impl<'p> LineWriter<'p> {
    fn new(capacity: usize, prefix: &'p str) -> Self {
        Self {
            out: String::with_capacity(capacity),
            prefix,
            line_start: 0,
        }
    }

    fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Emit a line feed followed by the continuation prefix.
    fn newline(&mut self) {
        self.out.push('\n');
        self.out.push_str(self.prefix);
        self.line_start = self.out.len();
    }

    /// Break before an overlong word: drop one trailing whitespace codepoint
    /// and start a new line. Does nothing while the current line is empty.
    fn break_before_word(&mut self) {
        if self.out.len() == self.line_start {
            return;
        }
        let last = self.out[self.line_start..].chars().next_back();
        if let Some(last) = last.filter(|c| c.is_whitespace()) {
            self.out.truncate(self.out.len() - last.len_utf8());
        }
        self.newline();
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Cluster widths as the wrap operations see them.
///
/// Plain mode measures each cluster alone; escape-aware mode runs the same
/// scanner as `width`, so escape runs take no room on the line.
enum WrapMeasure<'e> {
    Plain(&'e ColumnEngine),
    EscapeAware(ColumnScanner<'e>),
}

impl<'e> WrapMeasure<'e> {
    fn new(engine: &'e ColumnEngine) -> Self {
        if engine.options.escape_aware_wrap {
            Self::EscapeAware(engine.scanner())
        } else {
            Self::Plain(engine)
        }
    }

    fn width(&mut self, cluster: &Cluster<'_>) -> usize {
        match self {
            Self::Plain(engine) => engine.cluster_columns(cluster),
            Self::EscapeAware(scanner) => scanner.advance(cluster).width(),
        }
    }
}

impl ColumnEngine {
    /// Wrap lines to be at most `width` columns wide.
    ///
    /// Breaks anywhere, including mid-word; use [`word_wrap`](Self::word_wrap)
    /// to keep words whole. Every line after a break starts with `prefix`,
    /// which doesn't count toward `width`. Whitespace is never emitted at
    /// the start of a line. A cluster that overflows the line always starts a
    /// new one, even when the current line is still empty.
    ///
    /// Tabs are expanded.
    #[must_use]
    pub fn wrap(&self, s: &str, width: usize, prefix: &str) -> String {
        let text = self.expanded(s);
        let mut out = LineWriter::new(text.len(), prefix);
        let mut measure = WrapMeasure::new(self);
        let mut line_len = 0;

        for cluster in clusters(&text) {
            if cluster.is_newline() {
                out.newline();
                line_len = 0;
                continue;
            }

            let cw = measure.width(&cluster);
            if line_len + cw > width {
                out.newline();
                if cluster.is_whitespace() {
                    line_len = 0;
                } else {
                    out.push_str(cluster.text);
                    line_len = cw;
                }
                continue;
            }

            if line_len == 0 && cluster.is_whitespace() {
                continue;
            }
            out.push_str(cluster.text);
            line_len += cw;
        }

        out.finish()
    }

    /// Wrap lines to be at most `width` columns wide without splitting words.
    ///
    /// Words break on whitespace only; a word wider than `width` sits on a
    /// line of its own. Every line after a break starts with `prefix`, which
    /// doesn't count toward `width`. At an input newline, a line that has
    /// grown past `width` is broken before the pending word without trimming.
    ///
    /// Tabs are expanded.
    ///
    /// ```
    /// # use termtext::ColumnEngine;
    /// let engine = ColumnEngine::default();
    /// assert_eq!(engine.word_wrap("Hello, world!", 10, ""), "Hello,\nworld!");
    /// assert_eq!(engine.word_wrap("one two three", 8, "> "), "one two\n> three");
    /// ```
    #[must_use]
    pub fn word_wrap(&self, s: &str, width: usize, prefix: &str) -> String {
        let text = self.expanded(s);
        let mut out = LineWriter::new(text.len(), prefix);
        let mut measure = WrapMeasure::new(self);
        let mut word = String::new();
        let mut word_len = 0;
        // Columns on the current line, including the buffered word
        let mut line_len = 0;

        for cluster in clusters(&text) {
            if cluster.is_newline() {
                if line_len + word_len > width {
                    out.newline();
                }
                out.push_str(&word);
                out.newline();
                word.clear();
                word_len = 0;
                line_len = 0;
                continue;
            }

            let cw = measure.width(&cluster);
            if cluster.is_break() {
                if line_len > width {
                    out.break_before_word();
                    line_len = word_len + cw;
                } else {
                    line_len += cw;
                }
                out.push_str(&word);
                out.push_str(cluster.text);
                word.clear();
                word_len = 0;
                continue;
            }

            line_len += cw;
            word_len += cw;
            word.push_str(cluster.text);
        }

        if !word.is_empty() {
            if line_len > width {
                out.break_before_word();
            }
            out.push_str(&word);
        }

        out.finish()
    }
}
