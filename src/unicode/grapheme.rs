//! Grapheme cluster iteration.

use unicode_segmentation::UnicodeSegmentation;

/// A user-perceived character and where it starts in its source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cluster<'a> {
    /// Byte offset of the cluster in the source text.
    pub offset: usize,
    /// The cluster's text. Never empty.
    pub text: &'a str,
}

impl<'a> Cluster<'a> {
    /// The codepoint if this cluster consists of exactly one.
    #[inline]
    #[must_use]
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Byte offset one past the end of the cluster.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// A literal line feed.
    #[must_use]
    pub fn is_newline(&self) -> bool {
        self.text == "\n"
    }

    /// A single whitespace codepoint.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.single_char().is_some_and(char::is_whitespace)
    }

    /// A single whitespace codepoint other than a line feed; words break here.
    #[must_use]
    pub fn is_break(&self) -> bool {
        self.single_char()
            .is_some_and(|c| c.is_whitespace() && c != '\n')
    }
}

/// Iterator over grapheme clusters in a string.
pub struct Clusters<'a> {
    inner: unicode_segmentation::GraphemeIndices<'a>,
}

impl<'a> Iterator for Clusters<'a> {
    type Item = Cluster<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(offset, text)| Cluster { offset, text })
    }
}

/// Iterate over the extended grapheme clusters of `s`.
#[must_use]
pub fn clusters(s: &str) -> Clusters<'_> {
    Clusters {
        inner: s.grapheme_indices(true),
    }
}
