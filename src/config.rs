//! Engine configuration: tab stops, width overrides and width method.

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::unicode::WidthMethod;
use std::collections::HashMap;
use std::collections::hash_map;
use std::env;
use std::str::FromStr;

/// Default distance between tab stops.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Environment variable holding the tab width.
pub const ENV_TAB_WIDTH: &str = "TERMTEXT_TAB_WIDTH";
/// Environment variable holding a width-override list.
pub const ENV_WIDTHS: &str = "TERMTEXT_WIDTHS";
/// Environment variable forcing East Asian ambiguous widths on or off.
pub const ENV_EAST_ASIAN: &str = "TERMTEXT_EAST_ASIAN";

/// Explicit per-codepoint widths, consulted before any other width rule.
///
/// Only clusters made of a single codepoint are looked up here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidthOverrides {
    widths: HashMap<char, usize>,
}

impl WidthOverrides {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Widths for text that will be written JSON-escaped.
    ///
    /// Encoders write these control characters as two-byte `\`-escapes, so
    /// each one occupies two columns once printed.
    #[must_use]
    pub fn json_escapes() -> Self {
        [('\u{8}', 2), ('\u{c}', 2), ('\n', 2), ('\r', 2), ('\t', 2)]
            .into_iter()
            .collect()
    }

    /// Add an override with builder syntax.
    #[must_use]
    pub fn with(mut self, c: char, width: usize) -> Self {
        self.insert(c, width);
        self
    }

    /// Set the width for `c`, returning the previous override.
    pub fn insert(&mut self, c: char, width: usize) -> Option<usize> {
        self.widths.insert(c, width)
    }

    /// Drop the override for `c`.
    pub fn remove(&mut self, c: char) -> Option<usize> {
        self.widths.remove(&c)
    }

    /// Override width for `c`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, c: char) -> Option<usize> {
        if self.widths.is_empty() {
            return None;
        }
        self.widths.get(&c).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Iterate over `(codepoint, width)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.widths.iter().map(|(&c, &w)| (c, w))
    }
}

impl FromIterator<(char, usize)> for WidthOverrides {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        Self {
            widths: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, usize)> for WidthOverrides {
    fn extend<I: IntoIterator<Item = (char, usize)>>(&mut self, iter: I) {
        self.widths.extend(iter);
    }
}

impl IntoIterator for WidthOverrides {
    type Item = (char, usize);
    type IntoIter = hash_map::IntoIter<char, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.widths.into_iter()
    }
}

/// Parses `KEY=WIDTH[,KEY=WIDTH...]` where `KEY` is one character or
/// `U+XXXX`. Surrounding whitespace is trimmed, so spell a space `U+0020`.
impl FromStr for WidthOverrides {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut overrides = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let invalid = || Error::InvalidOverride(entry.to_string());
            let (key, width) = entry.rsplit_once('=').ok_or_else(invalid)?;
            let c = parse_codepoint(key.trim()).ok_or_else(invalid)?;
            let width = width.trim().parse::<usize>().map_err(|_| invalid())?;
            overrides.insert(c, width);
        }
        Ok(overrides)
    }
}

fn parse_codepoint(key: &str) -> Option<char> {
    if let Some(hex) = key.strip_prefix("U+").or_else(|| key.strip_prefix("u+")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Settings for a [`ColumnEngine`](crate::ColumnEngine).
///
/// ```
/// use termtext::{ColumnEngine, EngineOptions, WidthOverrides};
///
/// let engine = ColumnEngine::new(EngineOptions::default().with_tab_width(4));
/// assert_eq!(engine.width("a\tb"), 5);
///
/// let json = ColumnEngine::new(
///     EngineOptions::default().with_overrides(WidthOverrides::json_escapes()),
/// );
/// assert_eq!(json.width("a\nb"), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Columns between tab stops. Always at least 1.
    pub(crate) tab_width: usize,
    /// Per-codepoint width overrides.
    pub(crate) overrides: WidthOverrides,
    /// Default per-codepoint width table.
    pub(crate) width_method: WidthMethod,
    /// Treat escape runs as zero-width while wrapping.
    pub(crate) escape_aware_wrap: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            overrides: WidthOverrides::default(),
            width_method: WidthMethod::default(),
            escape_aware_wrap: false,
        }
    }
}

impl EngineOptions {
    /// Create default options: 8-column tabs, no overrides, wcwidth widths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tab width. Zero is clamped to 1.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        if tab_width == 0 {
            emit_log(LogLevel::Warn, "tab width 0 is invalid; using 1");
        }
        self.tab_width = tab_width.max(1);
        self
    }

    /// Replace the width-override table.
    #[must_use]
    pub fn with_overrides(mut self, overrides: WidthOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set the ambiguous-width method.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Make [`wrap`](crate::ColumnEngine::wrap) and
    /// [`word_wrap`](crate::ColumnEngine::word_wrap) skip escape runs the way
    /// [`width`](crate::ColumnEngine::width) does.
    #[must_use]
    pub fn with_escape_aware_wrap(mut self, enabled: bool) -> Self {
        self.escape_aware_wrap = enabled;
        self
    }

    #[must_use]
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    #[must_use]
    pub fn overrides(&self) -> &WidthOverrides {
        &self.overrides
    }

    #[must_use]
    pub fn width_method(&self) -> WidthMethod {
        self.width_method
    }

    #[must_use]
    pub fn escape_aware_wrap(&self) -> bool {
        self.escape_aware_wrap
    }

    /// Build options from the process environment.
    ///
    /// Reads [`ENV_TAB_WIDTH`], [`ENV_WIDTHS`] and [`ENV_EAST_ASIAN`]; without
    /// the latter, the width method follows `LC_ALL`, `LC_CTYPE` or `LANG`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Build options from an arbitrary variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(raw) = lookup(ENV_TAB_WIDTH) {
            options.tab_width = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(Error::InvalidTabWidth(raw)),
            };
        }

        if let Some(raw) = lookup(ENV_WIDTHS) {
            options.overrides = raw.parse()?;
        }

        options.width_method = match lookup(ENV_EAST_ASIAN).as_deref().map(str::trim) {
            Some("1" | "true" | "yes") => WidthMethod::Unicode,
            Some("0" | "false" | "no") => WidthMethod::WcWidth,
            _ => ["LC_ALL", "LC_CTYPE", "LANG"]
                .iter()
                .filter_map(|&key| lookup(key))
                .find(|value| !value.is_empty())
                .map_or(WidthMethod::WcWidth, |locale| {
                    WidthMethod::from_locale(&locale)
                }),
        };

        emit_log(
            LogLevel::Debug,
            &format!(
                "options from environment: tab width {}, {} overrides, {:?}",
                options.tab_width,
                options.overrides.len(),
                options.width_method
            ),
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let options = EngineOptions::default();
        assert_eq!(options.tab_width(), 8);
        assert!(options.overrides().is_empty());
        assert_eq!(options.width_method(), WidthMethod::WcWidth);
        assert!(!options.escape_aware_wrap());
    }

    #[test]
    fn test_zero_tab_width_clamped() {
        assert_eq!(EngineOptions::new().with_tab_width(0).tab_width(), 1);
        assert_eq!(EngineOptions::new().with_tab_width(4).tab_width(), 4);
    }

    #[test]
    fn test_overrides_builder() {
        let mut overrides = WidthOverrides::new().with('x', 3);
        assert_eq!(overrides.get('x'), Some(3));
        assert_eq!(overrides.get('y'), None);
        assert_eq!(overrides.insert('x', 0), Some(3));
        assert_eq!(overrides.remove('x'), Some(0));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_json_escapes() {
        let overrides = WidthOverrides::json_escapes();
        assert_eq!(overrides.len(), 5);
        assert_eq!(overrides.get('\n'), Some(2));
        assert_eq!(overrides.get('\u{8}'), Some(2));
        assert_eq!(overrides.get('a'), None);
    }

    #[test]
    fn test_parse_overrides() {
        let overrides: WidthOverrides = "x=2, U+0009=4,u+1F600=1,,".parse().unwrap();
        assert_eq!(overrides.get('x'), Some(2));
        assert_eq!(overrides.get('\t'), Some(4));
        assert_eq!(overrides.get('😀'), Some(1));
        assert_eq!(overrides.len(), 3);

        // '=' itself can be a key
        let overrides: WidthOverrides = "==0".parse().unwrap();
        assert_eq!(overrides.get('='), Some(0));
    }

    #[test]
    fn test_parse_overrides_errors() {
        for bad in ["x", "xy=1", "x=-1", "U+ZZZZ=1", "U+D800=1", "=1"] {
            let err = bad.parse::<WidthOverrides>().unwrap_err();
            assert!(matches!(err, Error::InvalidOverride(_)), "{bad}");
        }
    }

    #[test]
    fn test_from_env_with_empty() {
        let options = EngineOptions::from_env_with(|_| None).unwrap();
        assert_eq!(options, EngineOptions::default());
    }

    #[test]
    fn test_from_env_with_values() {
        let vars = [
            (ENV_TAB_WIDTH, "4"),
            (ENV_WIDTHS, "U+000A=2"),
            ("LANG", "ja_JP.UTF-8"),
        ];
        let options = EngineOptions::from_env_with(lookup(&vars)).unwrap();
        assert_eq!(options.tab_width(), 4);
        assert_eq!(options.overrides().get('\n'), Some(2));
        assert_eq!(options.width_method(), WidthMethod::Unicode);
    }

    #[test]
    fn test_from_env_locale_precedence() {
        let vars = [("LC_ALL", ""), ("LC_CTYPE", "en_US.UTF-8"), ("LANG", "zh_CN")];
        let options = EngineOptions::from_env_with(lookup(&vars)).unwrap();
        assert_eq!(options.width_method(), WidthMethod::WcWidth);

        let vars = [(ENV_EAST_ASIAN, "1"), ("LANG", "en_US.UTF-8")];
        let options = EngineOptions::from_env_with(lookup(&vars)).unwrap();
        assert_eq!(options.width_method(), WidthMethod::Unicode);

        let vars = [(ENV_EAST_ASIAN, "0"), ("LANG", "ko_KR.UTF-8")];
        let options = EngineOptions::from_env_with(lookup(&vars)).unwrap();
        assert_eq!(options.width_method(), WidthMethod::WcWidth);
    }

    #[test]
    fn test_from_env_invalid() {
        let vars = [(ENV_TAB_WIDTH, "0")];
        assert_eq!(
            EngineOptions::from_env_with(lookup(&vars)),
            Err(Error::InvalidTabWidth("0".to_string()))
        );

        let vars = [(ENV_TAB_WIDTH, "wide")];
        assert!(EngineOptions::from_env_with(lookup(&vars)).is_err());

        let vars = [(ENV_WIDTHS, "nope")];
        assert!(matches!(
            EngineOptions::from_env_with(lookup(&vars)),
            Err(Error::InvalidOverride(_))
        ));
    }
}
