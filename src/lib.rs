//! # rs-lede
//!
//! Extracts "the first meaningful paragraph" of an arbitrary, often
//! malformed, HTML document for redisplay as a one-line reply.
//!
//! There is no DOM: candidates are located with a four-tier, self-relaxing
//! regex search that trades precision for resilience against broken markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_lede::{first_paragraph, ExtractOptions};
//!
//! let html = r#"<html><body>
//! <h1>Release notes</h1>
//! <p>Version two rewrites the parser and adds support for streaming input files.</p>
//! </body></html>"#;
//!
//! let excerpt = first_paragraph(html, &ExtractOptions::default());
//! assert!(excerpt.starts_with("Version two"));
//! ```
//!
//! ## Features
//!
//! - **Paragraph Extraction**: heading-anchored, document-wide, class-hinted
//!   and line-break tiers, with `min_spaces` relaxation
//! - **Entity Decoding**: full HTML5 table (`entity-table` feature) or a
//!   compact built-in table, unknown references become `*`
//! - **Batch Collection**: sequential fetch-and-extract over a URL queue with
//!   optional streaming to a reply sink (`http` feature for the default fetcher)

mod error;
mod options;
mod patterns;
mod result;

/// Character reference decoding strategies.
pub mod entities;

/// Markup-to-text rendering of candidate fragments.
pub mod render;

/// Tiered first-paragraph search.
pub mod paragraph;

/// Sequential fetch-and-extract over URL queues.
pub mod batch;

/// Character encoding detection and transcoding of fetched bodies.
pub mod encoding;

/// URL validation utilities.
pub mod url_utils;

/// Blocking HTTP fetcher.
#[cfg(feature = "http")]
pub mod fetch;

// Public API - re-exports
pub use batch::{collect_excerpts, Collector, Fetch, ReplySink};
pub use entities::{decode_entities, EntityDecoder, PLACEHOLDER};
pub use error::{Error, Result};
#[cfg(feature = "http")]
pub use fetch::{FetchConfig, HttpFetcher};
pub use options::{BatchOptions, ExtractOptions, Strip, Truncate, DEFAULT_MIN_SPACES, LINE_CHARS};
pub use paragraph::{first_paragraph, first_paragraph_report, first_paragraph_with, Tier};
pub use render::{PlainTextRenderer, Render};
pub use result::Excerpt;
