//! Batch collection of excerpts from a queue of URLs.
//!
//! [`Collector`] dequeues URLs one at a time, fetches each through a
//! [`Fetch`] implementation, extracts the first paragraph and optionally
//! streams successful excerpts to a [`ReplySink`]. Fetching is strictly
//! sequential and failures are never retried.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::entities::EntityDecoder;
use crate::error::Result;
use crate::options::{BatchOptions, Truncate};
use crate::paragraph::first_paragraph_report;
use crate::render::{PlainTextRenderer, Render};

/// Retrieves a document by URL.
///
/// Implementations enforce their own timeout and size limits.
pub trait Fetch {
    /// Fetches `url` and returns the document body.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// Receives excerpts as soon as they are extracted.
pub trait ReplySink {
    /// Sends `text`, the `index`-th successful excerpt of the batch (from 1).
    fn reply(&mut self, index: usize, text: &str, truncate: Truncate);
}

impl<F> ReplySink for F
where
    F: FnMut(usize, &str, Truncate),
{
    fn reply(&mut self, index: usize, text: &str, truncate: Truncate) {
        self(index, text, truncate);
    }
}

/// Sequential fetch-and-extract loop over a URL queue.
///
/// # Example
///
/// ```rust
/// use std::collections::VecDeque;
/// use rs_lede::{Collector, Error, Result};
///
/// let fetch = |url: &str| -> Result<String> {
///     match url {
///         "https://a.example/" => Ok("<p>Alpha is the first letter of the Greek alphabet.</p>".into()),
///         _ => Err(Error::Fetch { url: url.into(), reason: "offline".into() }),
///     }
/// };
///
/// let mut urls: VecDeque<String> = ["https://a.example/", "https://b.example/"]
///     .map(String::from)
///     .into();
/// let results = Collector::new(&fetch).collect(&mut urls, 5);
///
/// assert_eq!(results.len(), 2);
/// assert!(results[0].as_deref().is_some_and(|t| t.starts_with("Alpha")));
/// assert!(results[1].is_none());
/// ```
pub struct Collector<'a> {
    fetcher: &'a dyn Fetch,
    renderer: &'a dyn Render,
    sink: Option<&'a mut dyn ReplySink>,
    options: BatchOptions,
}

static DEFAULT_RENDERER: PlainTextRenderer = PlainTextRenderer::new(EntityDecoder::preferred());

impl<'a> Collector<'a> {
    /// Creates a collector with default options and no reply sink.
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetch) -> Self {
        Self {
            fetcher,
            renderer: &DEFAULT_RENDERER,
            sink: None,
            options: BatchOptions::default(),
        }
    }

    /// Renders candidates with `renderer` instead of the built-in one.
    #[must_use]
    pub fn renderer(mut self, renderer: &'a dyn Render) -> Self {
        self.renderer = renderer;
        self
    }

    /// Streams each successful excerpt to `sink`.
    #[must_use]
    pub fn sink(mut self, sink: &'a mut dyn ReplySink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replaces the batch options.
    #[must_use]
    pub fn options(mut self, options: BatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Processes up to `count` URLs from the front of `urls`.
    ///
    /// Every dequeued URL consumes one unit of `count` and yields exactly one
    /// entry: the excerpt, or `None` when fetching failed, the body was empty,
    /// or nothing could be extracted. URLs beyond the budget stay queued.
    pub fn collect(mut self, urls: &mut VecDeque<String>, count: usize) -> Vec<Option<String>> {
        let mut results = Vec::with_capacity(count.min(urls.len()));
        let mut remaining = count;
        let mut shown = 0;

        while remaining > 0 {
            let Some(url) = urls.pop_front() else {
                break;
            };
            remaining -= 1;

            let body = match self.fetcher.fetch(&url) {
                Ok(body) if !body.trim().is_empty() => body,
                Ok(_) => {
                    debug!(%url, "empty document");
                    results.push(None);
                    continue;
                }
                Err(err) => {
                    warn!(%url, error = %err, "fetch failed");
                    results.push(None);
                    continue;
                }
            };

            let excerpt = first_paragraph_report(&body, &self.options.extract, self.renderer);
            if excerpt.is_empty() {
                debug!(%url, "no paragraph found");
                results.push(None);
                continue;
            }

            shown += 1;
            debug!(%url, tier = ?excerpt.tier, index = shown, "extracted excerpt");
            if let Some(sink) = self.sink.as_mut() {
                sink.reply(shown, &excerpt.text, self.options.truncate);
            }
            results.push(Some(excerpt.text));
        }

        info!(
            attempted = results.len(),
            extracted = shown,
            queued = urls.len(),
            "batch finished"
        );
        results
    }
}

/// Collects up to `count` excerpts from the front of `urls`.
///
/// Convenience wrapper around [`Collector`] with the default renderer.
pub fn collect_excerpts<'a>(
    urls: &mut VecDeque<String>,
    count: usize,
    options: &BatchOptions,
    fetcher: &'a dyn Fetch,
    sink: Option<&'a mut dyn ReplySink>,
) -> Vec<Option<String>> {
    let collector = Collector::new(fetcher).options(options.clone());
    match sink {
        Some(sink) => collector.sink(sink).collect(urls, count),
        None => collector.collect(urls, count),
    }
}
