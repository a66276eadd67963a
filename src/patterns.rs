//! Compiled regex patterns for paragraph extraction and text rendering.
//!
//! All patterns are compiled once at first use via `LazyLock`. The extractor
//! deliberately pseudo-parses with regexes instead of building a DOM: real
//! pages leave `<p>` unclosed or close it through a container tag, and a
//! structural parser would hide exactly the loose boundaries we match on.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Closing tags that terminate a loosely-delimited paragraph block.
///
/// `<p>` is frequently left unclosed, so the nearest container close also
/// ends the block.
const LOOSE_CLOSER: &str = r"</(?:p|div|html|body|table|td|tr)\s*>";

// =============================================================================
// Preprocessing
// =============================================================================

/// Matches markup that never contributes visible text: comments, scripts, styles.
pub static INVISIBLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("INVISIBLE_BLOCK regex")
});

// =============================================================================
// Candidate Tiers
// =============================================================================

/// Matches the opening tag of any `<h1>`..`<h6>` heading; attributes ignored.
pub static HEADING_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h(?P<level>[1-6])(?:\s[^>]*)?>").expect("HEADING_OPEN regex")
});

/// Matches a heading close tag; `level` must be compared with the opener's.
pub static HEADING_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</h(?P<level>[1-6])\s*>").expect("HEADING_CLOSE regex")
});

/// `<p ...>` up to the nearest loose closer.
pub static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)<p(?:\s[^>]*)?>(?P<content>.*?){LOOSE_CLOSER}"))
        .expect("PARAGRAPH regex")
});

/// Opening tag of any element whose attributes mention `body`, `message` or
/// `text`. Blogs and forums wrap posts in such containers.
///
/// Only the tag is matched: the block runs to the next [`LOOSE_CLOSE`], which
/// is searched separately so void tags can be skipped without scanning ahead.
pub static CLASS_HINTED_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?P<tag>[a-z][a-z0-9]*)\s[^>]*?(?:body|message|text)[^>]*>")
        .expect("CLASS_HINTED_OPEN regex")
});

/// The nearest closing tag that ends a loosely-delimited block.
pub static LOOSE_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){LOOSE_CLOSER}")).expect("LOOSE_CLOSE regex")
});

/// Text between two `<br>` breaks, or a break and a loose closer.
pub static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)<br\b[^>]*>(?P<content>.*?)(?:<br\b[^>]*>|{LOOSE_CLOSER})"
    ))
    .expect("LINE_BREAK regex")
});

// =============================================================================
// Rendering
// =============================================================================

/// Line breaks and block-level tags that separate words when removed.
pub static BLOCK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<br\b[^>]*>|</?(?:p|div|li|ul|ol|dl|dt|dd|tr|td|th|table|tbody|thead|h[1-6]|blockquote|pre|section|article|header|footer)\b[^>]*>",
    )
    .expect("BLOCK_BOUNDARY regex")
});

/// Any remaining tag-like markup (including `<!doctype>` and stray comments).
pub static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[A-Za-z!][^>]*>").expect("TAG regex")
});

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Entities
// =============================================================================

/// `&name;`, `&#digits;` or `&#xhex;` character reference.
pub static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?P<name>#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);")
        .expect("ENTITY regex")
});
