//! Configuration options for paragraph extraction and batch collection.
//!
//! All option structs have public fields and `Default` impls; override the
//! fields you need with struct update syntax.

use std::borrow::Cow;

use regex::Regex;

use crate::error::Result;

/// Default minimum number of spaces an excerpt must contain.
pub const DEFAULT_MIN_SPACES: usize = 8;

/// Character budget applied by [`Truncate::Line`].
pub const LINE_CHARS: usize = 400;

/// A prefix removed from the front of each rendered candidate.
///
/// Removal happens before the candidate is measured, so the prefix never
/// counts toward `min_spaces` and never appears in the excerpt.
#[derive(Debug, Clone)]
pub enum Strip {
    /// Exact text, matched after leading whitespace.
    Literal(String),
    /// Regex; only a match starting at the first character is removed.
    Pattern(Regex),
}

impl Strip {
    /// Strips an exact literal prefix.
    #[must_use]
    pub fn literal(prefix: impl Into<String>) -> Self {
        Self::Literal(prefix.into())
    }

    /// Strips whatever `pattern` matches at the start of the text.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Returns `text` with the prefix removed and leading whitespace trimmed.
    ///
    /// ```
    /// use rs_lede::Strip;
    ///
    /// let strip = Strip::literal("Posted by admin:");
    /// assert_eq!(strip.apply("Posted by admin: Hello there"), "Hello there");
    /// assert_eq!(strip.apply("Hello there"), "Hello there");
    /// ```
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> &'t str {
        let text = text.trim_start();
        let rest = match self {
            Self::Literal(prefix) => text.strip_prefix(prefix.as_str()),
            Self::Pattern(re) => re
                .find(text)
                .filter(|m| m.start() == 0)
                .map(|m| &text[m.end()..]),
        };
        rest.unwrap_or(text).trim_start()
    }
}

impl From<&str> for Strip {
    fn from(prefix: &str) -> Self {
        Self::literal(prefix)
    }
}

/// Options for [`first_paragraph`](crate::first_paragraph).
///
/// # Example
///
/// ```rust
/// use rs_lede::{ExtractOptions, Strip};
///
/// let options = ExtractOptions {
///     strip: Some(Strip::literal("Breaking:")),
///     ..ExtractOptions::default()
/// };
/// assert_eq!(options.min_spaces, 8);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Prefix removed from each rendered candidate before measurement.
    ///
    /// Default: `None`
    pub strip: Option<Strip>,

    /// Minimum number of whitespace gaps a candidate needs to be accepted.
    ///
    /// Halved after every full pass without an acceptance, down to zero.
    ///
    /// Default: `8`
    pub min_spaces: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strip: None,
            min_spaces: DEFAULT_MIN_SPACES,
        }
    }
}

/// How a reply sink should shorten an excerpt before sending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truncate {
    /// Send the excerpt as is.
    #[default]
    None,
    /// Fit a single chat line of [`LINE_CHARS`] characters.
    Line,
    /// At most this many characters, including the trailing ellipsis.
    Chars(usize),
}

impl Truncate {
    /// Applies the truncation to `text`.
    ///
    /// ```
    /// use rs_lede::Truncate;
    ///
    /// assert_eq!(Truncate::Chars(6).apply("abcdefghij"), "abcde\u{2026}");
    /// assert_eq!(Truncate::Chars(20).apply("short"), "short");
    /// assert_eq!(Truncate::None.apply("abcdefghij"), "abcdefghij");
    /// ```
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        let limit = match self {
            Self::None => return Cow::Borrowed(text),
            Self::Line => LINE_CHARS,
            Self::Chars(limit) => limit,
        };

        if text.chars().count() <= limit {
            return Cow::Borrowed(text);
        }
        if limit == 0 {
            return Cow::Borrowed("");
        }

        let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
        cut.truncate(cut.trim_end().len());
        cut.push('\u{2026}');
        Cow::Owned(cut)
    }
}

/// Options for [`collect_excerpts`](crate::collect_excerpts).
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Extraction options applied to every fetched document.
    pub extract: ExtractOptions,

    /// Truncation requested from the reply sink.
    ///
    /// Default: `Truncate::None`
    pub truncate: Truncate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ExtractOptions::default();
        assert!(opts.strip.is_none());
        assert_eq!(opts.min_spaces, DEFAULT_MIN_SPACES);

        let batch = BatchOptions::default();
        assert_eq!(batch.truncate, Truncate::None);
        assert_eq!(batch.extract.min_spaces, 8);
    }

    #[test]
    fn test_strip_pattern_only_at_start() {
        let strip = Strip::pattern(r"(?i)posted by \w+:").expect("valid pattern");
        assert_eq!(strip.apply("  Posted by bob: news here"), "news here");
        assert_eq!(strip.apply("news posted by bob: here"), "news posted by bob: here");
    }

    #[test]
    fn test_strip_invalid_pattern_is_error() {
        assert!(Strip::pattern("(unclosed").is_err());
    }

    #[test]
    fn test_strip_from_str_is_literal() {
        let strip = Strip::from("a.b");
        assert_eq!(strip.apply("axb rest"), "axb rest");
        assert_eq!(strip.apply("a.b rest"), "rest");
    }

    #[test]
    fn test_truncate_line_budget() {
        let long = "word ".repeat(200);
        let cut = Truncate::Line.apply(&long);
        assert_eq!(cut.chars().count(), LINE_CHARS);
        assert!(cut.ends_with('\u{2026}'));
    }

    #[test]
    fn test_truncate_trims_before_ellipsis() {
        assert_eq!(Truncate::Chars(4).apply("ab cd ef"), "ab\u{2026}");
    }

    #[test]
    fn test_truncate_to_nothing() {
        assert_eq!(Truncate::Chars(0).apply("abc"), "");
        assert_eq!(Truncate::Chars(1).apply("abc"), "\u{2026}");
    }
}
