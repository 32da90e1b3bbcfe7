//! The cluster-width rule shared by every column operation.

use crate::config::EngineOptions;
use crate::unicode::{Cluster, char_width, cluster_width};

const ESC: char = '\x1b';
const ESCAPE_END: char = 'm';

/// How one cluster moved the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Advance {
    /// Ordinary content of the given width.
    Text(usize),
    /// A horizontal tab covering the given number of columns.
    Tab(usize),
    /// Part of an escape run; never occupies a column.
    Escape,
}

impl Advance {
    #[inline]
    pub(crate) fn width(self) -> usize {
        match self {
            Self::Text(w) | Self::Tab(w) => w,
            Self::Escape => 0,
        }
    }
}

/// Left-to-right column tracker.
///
/// Keeps the running column, needed for tab stops, and whether an escape
/// run is open. An escape run starts at `ESC` and closes at the first `m`.
#[derive(Clone, Debug)]
pub(crate) struct ColumnScanner<'e> {
    options: &'e EngineOptions,
    use_overrides: bool,
    column: usize,
    in_escape: bool,
}

impl<'e> ColumnScanner<'e> {
    pub(crate) fn new(options: &'e EngineOptions) -> Self {
        Self {
            options,
            use_overrides: true,
            column: 0,
            in_escape: false,
        }
    }

    /// Scanner for tab expansion. Overrides describe how text is counted,
    /// not where tab stops fall, so they are skipped here.
    pub(crate) fn for_expansion(options: &'e EngineOptions) -> Self {
        Self {
            use_overrides: false,
            ..Self::new(options)
        }
    }

    /// Columns consumed so far.
    #[inline]
    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Measure `cluster` at the current column and move past it.
    pub(crate) fn advance(&mut self, cluster: &Cluster<'_>) -> Advance {
        let step = self.classify(cluster);
        self.column += step.width();
        step
    }

    fn classify(&mut self, cluster: &Cluster<'_>) -> Advance {
        let method = self.options.width_method;

        // Multi-codepoint clusters are measured even inside an escape run.
        let Some(c) = cluster.single_char() else {
            return Advance::Text(cluster_width(cluster.text, method));
        };

        let overridden = if self.use_overrides {
            self.options.overrides.get(c)
        } else {
            None
        };
        if let Some(width) = overridden {
            return if c == '\t' {
                Advance::Tab(width)
            } else {
                Advance::Text(width)
            };
        }

        match c {
            '\t' => {
                let tab_width = self.options.tab_width;
                Advance::Tab(tab_width - self.column % tab_width)
            }
            ESC => {
                self.in_escape = true;
                Advance::Escape
            }
            _ if self.in_escape => {
                if c == ESCAPE_END {
                    self.in_escape = false;
                }
                Advance::Escape
            }
            _ => Advance::Text(char_width(c, method)),
        }
    }
}
