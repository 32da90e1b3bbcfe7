//! Padding text to a column width.

use super::ColumnEngine;

/// Where text sits inside a padded field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

fn fill(n: usize) -> String {
    " ".repeat(n)
}

impl ColumnEngine {
    /// Pad `s` to `width` columns using the given alignment.
    #[must_use]
    pub fn align(&self, s: &str, width: usize, alignment: Alignment) -> String {
        match alignment {
            Alignment::Left => self.align_left(s, width),
            Alignment::Right => self.align_right(s, width),
            Alignment::Center => self.align_center(s, width),
        }
    }

    /// Left-align a string, filling up any remaining width with spaces.
    ///
    /// Tabs are expanded. Text already `width` columns or wider is returned
    /// unchanged; nothing is ever truncated.
    #[must_use]
    pub fn align_left(&self, s: &str, width: usize) -> String {
        let s = self.expanded(s);
        let count = width.saturating_sub(self.width(&s));
        let mut out = s.into_owned();
        out.push_str(&fill(count));
        out
    }

    /// Right-align a string, filling up any remaining width with spaces.
    ///
    /// Tabs are expanded.
    #[must_use]
    pub fn align_right(&self, s: &str, width: usize) -> String {
        let s = self.expanded(s);
        let count = width.saturating_sub(self.width(&s));
        let mut out = fill(count);
        out.push_str(&s);
        out
    }

    /// Centre-align a string, filling up any remaining width with spaces.
    ///
    /// Both sides get half the padding. When `width` is even one more space
    /// goes on the right, whether or not the padding divides evenly. An empty
    /// string becomes `width` spaces.
    ///
    /// ```
    /// # use termtext::ColumnEngine;
    /// let engine = ColumnEngine::default();
    /// assert_eq!(engine.align_center("Hello", 6), "Hello ");
    /// assert_eq!(engine.align_center("Hello", 7), " Hello ");
    /// assert_eq!(engine.align_center("Hello", 8), " Hello  ");
    /// ```
    #[must_use]
    pub fn align_center(&self, s: &str, width: usize) -> String {
        if s.is_empty() {
            return fill(width);
        }

        let s = self.expanded(s);
        let count = width.saturating_sub(self.width(&s));
        if count == 0 {
            return s.into_owned();
        }

        let pad = fill(count / 2);
        let mut out = String::with_capacity(s.len() + count);
        out.push_str(&pad);
        out.push_str(&s);
        out.push_str(&pad);
        if width % 2 == 0 {
            out.push(' ');
        }
        out
    }
}
