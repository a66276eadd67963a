//! Blocking HTTP fetcher.
//!
//! [`HttpFetcher`] is the default [`Fetch`] implementation used by the
//! `fetch_excerpts` binary. It enforces a request timeout and a body size
//! limit, and transcodes the body to UTF-8.

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::batch::Fetch;
use crate::encoding;
use crate::error::{Error, Result};
use crate::url_utils::parse_http_url;

/// Settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Total time allowed per request, including reading the body.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Largest body accepted, in bytes. Larger documents fail the fetch.
    ///
    /// Default: `2 MiB`
    pub max_bytes: usize,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_bytes: 2 * 1024 * 1024,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches documents over HTTP(S) with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Builds a fetcher from `config`.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// The configuration this fetcher was built with.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = parse_http_url(url).ok_or_else(|| Error::fetch(url, "not an http(s) URL"))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(url, format!("HTTP {status}")));
        }

        let limit = self.config.max_bytes;
        if response
            .content_length()
            .is_some_and(|len| usize::try_from(len).map_or(true, |len| len > limit))
        {
            return Err(Error::fetch(url, format!("body larger than {limit} bytes")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let mut body = Vec::new();
        response
            .take(u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1))
            .read_to_end(&mut body)
            .map_err(|e| Error::fetch(url, e.to_string()))?;
        if body.len() > limit {
            return Err(Error::fetch(url, format!("body larger than {limit} bytes")));
        }

        debug!(%url, bytes = body.len(), content_type = content_type.as_deref(), "fetched document");
        Ok(encoding::decode_body(&body, content_type.as_deref()))
    }
}
