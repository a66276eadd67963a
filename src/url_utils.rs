//! URL validation for the fetch side of batch collection.

use std::collections::VecDeque;

use tracing::debug;
use url::Url;

use crate::entities::EntityDecoder;

/// Parses `s` as an absolute `http`/`https` URL with a host.
///
/// ```
/// use rs_lede::url_utils::parse_http_url;
///
/// assert!(parse_http_url(" https://example.com/a ").is_some());
/// assert!(parse_http_url("ftp://example.com/").is_none());
/// assert!(parse_http_url("/relative/path").is_none());
/// ```
#[must_use]
pub fn parse_http_url(s: &str) -> Option<Url> {
    let url = Url::parse(s.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }
    Some(url)
}

/// Cleans a URL copied out of chat or markup text and parses it.
///
/// Decodes character references (`&amp;`), drops surrounding quotes and
/// trailing punctuation that usually belongs to the sentence, not the URL.
///
/// ```
/// use rs_lede::url_utils::normalize_url_candidate;
///
/// let url = normalize_url_candidate("\"https://example.com/?a=1&amp;b=2\"),").expect("url");
/// assert_eq!(url.as_str(), "https://example.com/?a=1&b=2");
/// ```
#[must_use]
pub fn normalize_url_candidate(raw: &str) -> Option<Url> {
    let decoded = EntityDecoder::BuiltIn.decode(raw.trim());
    let trimmed = decoded
        .trim_start_matches(['"', '\''])
        .trim_end_matches(['"', '\'', ')', ']', '}', '>', ',', '.', ';', ':']);
    parse_http_url(trimmed)
}

/// Builds a fetch queue with one entry per input line, in order.
///
/// Entries that normalise to an `http`/`https` URL are queued in normalised
/// form; anything else is queued verbatim, so it still takes a slot in the
/// budget and fails at fetch time instead of vanishing from the results.
///
/// ```
/// use rs_lede::url_utils::url_queue;
///
/// let queue = url_queue(["\"https://example.com/a\",", "not a url"]);
/// assert_eq!(queue, ["https://example.com/a", "not a url"]);
/// ```
#[must_use]
pub fn url_queue<'a>(lines: impl IntoIterator<Item = &'a str>) -> VecDeque<String> {
    lines
        .into_iter()
        .map(|raw| match normalize_url_candidate(raw) {
            Some(url) => url.into(),
            None => {
                debug!(url = %raw, "queueing unparseable URL as is");
                raw.to_string()
            }
        })
        .collect()
}
