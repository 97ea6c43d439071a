//! Confidence tiers and the lookup outcome.

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};

/// Confidence tier derived from the top-ranked candidate's score.
///
/// The tier doubles as the inclusion filter for the shaped result: every
/// candidate kept alongside the top one must clear the same threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Top score >= 0.7 - the top answer is reliable on its own
    High,
    /// Top score in [0.4, 0.7) - several plausible answers
    Medium,
    /// Top score in [0.3, 0.4) - weak evidence, clarification advised
    Low,
}

impl ConfidenceTier {
    /// Classify a top-candidate score. Scores below 0.3 have no tier and
    /// are treated as not-found.
    pub fn classify(top_score: f64) -> Option<ConfidenceTier> {
        if top_score >= 0.7 {
            Some(ConfidenceTier::High)
        } else if top_score >= 0.4 {
            Some(ConfidenceTier::Medium)
        } else if top_score >= 0.3 {
            Some(ConfidenceTier::Low)
        } else {
            None
        }
    }

    /// Minimum score a candidate must reach to be kept at this tier.
    pub fn threshold(&self) -> f64 {
        match self {
            ConfidenceTier::High => 0.7,
            ConfidenceTier::Medium => 0.4,
            ConfidenceTier::Low => 0.3,
        }
    }

    /// Tier label as it appears in the tool output contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

/// Outcome of a knowledge-base lookup.
///
/// Invariant: `Found` always carries a non-empty candidate list whose tier
/// matches the first candidate's score per [`ConfidenceTier::classify`].
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// Qualifying candidates in service rank order, at most five
    Found {
        /// Candidates that cleared the tier threshold
        candidates: Vec<Candidate>,
        /// Tier derived from the top candidate
        tier: ConfidenceTier,
    },
    /// No candidate cleared the minimum threshold on either search attempt
    NotFound,
}

impl LookupResult {
    /// True when the lookup produced qualifying candidates.
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_tiers_by_score() {
        assert_eq!(ConfidenceTier::classify(0.95), Some(ConfidenceTier::High));
        assert_eq!(ConfidenceTier::classify(0.7), Some(ConfidenceTier::High));
        assert_eq!(ConfidenceTier::classify(0.69), Some(ConfidenceTier::Medium));
        assert_eq!(ConfidenceTier::classify(0.4), Some(ConfidenceTier::Medium));
        assert_eq!(ConfidenceTier::classify(0.39), Some(ConfidenceTier::Low));
        assert_eq!(ConfidenceTier::classify(0.3), Some(ConfidenceTier::Low));
        assert_eq!(ConfidenceTier::classify(0.29), None);
        assert_eq!(ConfidenceTier::classify(0.0), None);
    }

    #[test]
    fn threshold_matches_tier_floor() {
        assert_eq!(ConfidenceTier::High.threshold(), 0.7);
        assert_eq!(ConfidenceTier::Medium.threshold(), 0.4);
        assert_eq!(ConfidenceTier::Low.threshold(), 0.3);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(ConfidenceTier::High.as_str(), "high");
        assert_eq!(ConfidenceTier::Medium.as_str(), "medium");
        assert_eq!(ConfidenceTier::Low.as_str(), "low");
    }
}
