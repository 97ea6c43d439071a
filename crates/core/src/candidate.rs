//! Candidate model - one ranked knowledge-base search result.

use serde::{Deserialize, Serialize};

/// One ranked answer candidate returned by the knowledge-base search.
///
/// The search API omits `tags` and `exact_tag_match` for entries without
/// tag metadata, so both default when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Canonical question this candidate answers
    pub question_pattern: String,

    /// Answer text
    pub answer: String,

    /// Relevance to the input question, in [0, 1]
    pub similarity_score: f64,

    /// Topical labels attached to the entry
    #[serde(default)]
    pub tags: Vec<String>,

    /// True when a tag-based re-query found an exact tag overlap
    #[serde(default)]
    pub exact_tag_match: bool,
}

impl Candidate {
    /// Whether the candidate carries any tag metadata.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}
