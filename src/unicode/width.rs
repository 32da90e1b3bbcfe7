//! Per-codepoint and per-cluster display width.

use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Multi-byte legacy charsets used by East Asian locales.
const EAST_ASIAN_CHARSETS: &[&str] = &[
    "eucjp", "euc-jp", "euckr", "euc-kr", "euccn", "euc-cn", "euctw", "euc-tw", "gbk", "gb2312",
    "gb18030", "big5", "big5hkscs", "sjis", "shift_jis", "shift-jis", "cp932", "cp936", "cp949",
    "cp950",
];

impl WidthMethod {
    /// Pick the width method a terminal running under `locale` would use.
    ///
    /// `locale` has the POSIX shape `language[_territory][.charset][@modifier]`.
    /// Chinese, Japanese and Korean locales, and legacy CJK charsets, render
    /// ambiguous characters double-width. The `@cjk_narrow` modifier opts out.
    #[must_use]
    pub fn from_locale(locale: &str) -> Self {
        let locale = locale.trim().to_ascii_lowercase();
        if locale.is_empty() || locale == "c" || locale == "posix" {
            return Self::WcWidth;
        }

        let (base, modifier) = match locale.split_once('@') {
            Some((base, modifier)) => (base, Some(modifier)),
            None => (locale.as_str(), None),
        };
        if modifier == Some("cjk_narrow") {
            return Self::WcWidth;
        }

        let (language, charset) = match base.split_once('.') {
            Some((language, charset)) => (language, Some(charset)),
            None => (base, None),
        };
        if let Some(charset) = charset {
            if EAST_ASIAN_CHARSETS.contains(&charset) {
                return Self::Unicode;
            }
        }

        let language = language.split('_').next().unwrap_or_default();
        if matches!(language, "ja" | "ko" | "zh") {
            Self::Unicode
        } else {
            Self::WcWidth
        }
    }
}

/// Display width of a single codepoint in terminal columns.
///
/// Codepoints the width table has no entry for (control characters) count 0.
#[inline]
#[must_use]
pub fn char_width(c: char, method: WidthMethod) -> usize {
    // Fast path: printable ASCII is always one column
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Display width of a grapheme cluster.
///
/// A cluster is as wide as its first codepoint with a non-zero width, or 0
/// when every codepoint is zero-width (stray joiners, lone combining marks).
#[must_use]
pub fn cluster_width(cluster: &str, method: WidthMethod) -> usize {
    cluster
        .chars()
        .map(|c| char_width(c, method))
        .find(|&w| w > 0)
        .unwrap_or(0)
}
