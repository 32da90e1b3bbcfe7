//! Column-indexed substring extraction.

use super::ColumnEngine;
use crate::unicode::clusters;
use std::ops::{Bound, RangeBounds};

impl ColumnEngine {
    /// Slice a string by display column, like `s[start..stop]` over columns.
    ///
    /// `stop == 0` means "to the end of the string"; `start == stop` is always
    /// empty. Tabs are expanded first. A wide character cut by either boundary
    /// is left out, and a `stop` past the end of the text saturates. Escape
    /// runs between the boundaries are kept verbatim.
    ///
    /// A `stop` that falls inside a wide character ends the slice before
    /// that character. It does not run on to the end of the string, so the
    /// result is never wider than `stop - start` columns: `slice("漢字", 0, 3)`
    /// is `"漢"`, not `"漢字"`.
    ///
    /// ```
    /// # use termtext::ColumnEngine;
    /// let engine = ColumnEngine::default();
    /// assert_eq!(engine.slice("Hello, world!", 7, 12), "world");
    /// assert_eq!(engine.slice("Hello, world!", 7, 0), "world!");
    /// assert_eq!(engine.slice("a\x1b[1mbc", 1, 2), "\x1b[1mb");
    /// assert_eq!(engine.slice("漢字", 0, 3), "漢");
    /// ```
    #[must_use]
    pub fn slice(&self, s: &str, start: usize, stop: usize) -> String {
        if start == stop {
            return String::new();
        }
        let to_end = stop == 0;

        let text = self.expanded(s);
        let mut scanner = self.scanner();
        let mut start_off = None;
        let mut stop_off = text.len();

        for cluster in clusters(&text) {
            let pos = scanner.column();
            if start_off.is_none() && pos >= start {
                start_off = Some(cluster.offset);
                if to_end {
                    break;
                }
            }
            if !to_end && pos >= stop {
                stop_off = cluster.offset;
                break;
            }
            let end = pos + scanner.advance(&cluster).width();
            // A cluster straddling the stop column stays outside.
            if !to_end && end > stop {
                stop_off = cluster.offset;
                break;
            }
        }
        if start_off.is_none() && stop_off == text.len() && scanner.column() >= start {
            start_off = Some(text.len());
        }

        match start_off {
            Some(start_off) if start_off <= stop_off => text[start_off..stop_off].to_string(),
            _ => String::new(),
        }
    }

    /// [`slice`](Self::slice) taking a column range.
    ///
    /// `a..` reads to the end, `..=b` stops after column `b`.
    #[must_use]
    pub fn slice_range<R: RangeBounds<usize>>(&self, s: &str, range: R) -> String {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        match range.end_bound() {
            Bound::Included(&n) => self.slice(s, start, n.saturating_add(1)),
            Bound::Excluded(&n) => self.slice(s, start, n),
            // An unbounded end can't collide with the empty-range shortcut
            Bound::Unbounded if start == 0 => self.expand(s),
            Bound::Unbounded => self.slice(s, start, 0),
        }
    }
}
