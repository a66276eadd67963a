//! Character encoding detection and transcoding for fetched documents.
//!
//! Fetched bodies arrive as bytes. The charset is taken from the HTTP
//! `Content-Type` header when present, then from the document's own meta
//! tags, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=...` parameter of a `Content-Type` value.
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset>` or `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a meta charset declaration.
const META_SNIFF_LEN: usize = 1024;

/// Charset label from a `Content-Type` header value.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    CHARSET_PARAM_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Detects the encoding of a fetched body.
///
/// The header charset wins over the document's meta declaration; unknown
/// labels are ignored.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(META_SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes a fetched body to UTF-8, replacing invalid sequences with U+FFFD.
///
/// ```
/// use rs_lede::encoding::decode_body;
///
/// let body = b"<p>Caf\xE9</p>";
/// assert_eq!(decode_body(body, Some("text/html; charset=ISO-8859-1")), "<p>Caf\u{e9}</p>");
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}
