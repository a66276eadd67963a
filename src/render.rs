//! Markup-to-text rendering of candidate fragments.
//!
//! The extractor hands every candidate block to a [`Render`] implementation
//! and measures the plain text it gets back. [`PlainTextRenderer`] is the
//! default; callers with a better HTML-to-text converter can plug it in.

use crate::entities::EntityDecoder;
use crate::error::Result;
use crate::patterns::{BLOCK_BOUNDARY, TAG, WHITESPACE_NORMALIZE};

/// Converts an HTML fragment into plain text.
///
/// Implementations should strip tags and decode entities. A returned error
/// makes the extractor skip the candidate instead of aborting.
pub trait Render {
    /// Renders `fragment` to plain text.
    fn render(&self, fragment: &str) -> Result<String>;
}

impl<F> Render for F
where
    F: Fn(&str) -> Result<String>,
{
    fn render(&self, fragment: &str) -> Result<String> {
        self(fragment)
    }
}

/// Regex-based renderer producing a single line of text.
///
/// Block tags and `<br>` become word boundaries, other tags are dropped,
/// references are decoded with the configured [`EntityDecoder`], and
/// whitespace is collapsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer {
    decoder: EntityDecoder,
}

impl PlainTextRenderer {
    /// Creates a renderer that decodes references with `decoder`.
    #[must_use]
    pub const fn new(decoder: EntityDecoder) -> Self {
        Self { decoder }
    }

    /// The reference decoding strategy in use.
    #[must_use]
    pub const fn decoder(&self) -> EntityDecoder {
        self.decoder
    }

    /// Infallible form of [`Render::render`].
    #[must_use]
    pub fn to_text(&self, fragment: &str) -> String {
        let spaced = BLOCK_BOUNDARY.replace_all(fragment, " ");
        let stripped = TAG.replace_all(&spaced, "");
        // Decode after stripping so `&lt;b&gt;` survives as literal text.
        let decoded = self.decoder.decode(&stripped);
        WHITESPACE_NORMALIZE
            .replace_all(&decoded, " ")
            .trim()
            .to_string()
    }
}

impl Render for PlainTextRenderer {
    fn render(&self, fragment: &str) -> Result<String> {
        Ok(self.to_text(fragment))
    }
}
