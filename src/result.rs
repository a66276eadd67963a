//! Result types for extraction output.

use serde::Serialize;

use crate::paragraph::Tier;

/// The excerpt chosen for a document, with how it was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    /// Plain-text excerpt; empty when no candidate exists at all.
    pub text: String,

    /// Tier of the accepted candidate, `None` when nothing was accepted.
    pub tier: Option<Tier>,

    /// Relaxed `min_spaces` threshold in force when the candidate was accepted.
    pub min_spaces: usize,
}

impl Excerpt {
    /// Returns `true` when no text was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
