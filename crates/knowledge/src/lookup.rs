//! Two-tier lookup orchestration.

use crate::search::SearchService;
use crate::tags::TagExtractor;
use frontdesk_core::{Candidate, ConfidenceTier, LookupResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of candidates surfaced to the reasoning model.
const MAX_CANDIDATES: usize = 5;

/// Truncate to the top candidates, classify the tier from the first
/// candidate's score, and keep only candidates clearing that tier's
/// threshold. `None` when nothing qualifies.
///
/// The filter reuses the tier threshold derived from the top candidate,
/// so a lower-scoring, more specific candidate can drop out at a high
/// tier. Choosing among the survivors is the reasoning layer's job; the
/// prompt tells it to weigh question patterns, not scores.
fn shape(candidates: Vec<Candidate>) -> Option<(Vec<Candidate>, ConfidenceTier)> {
    let top = candidates.first()?;
    let tier = ConfidenceTier::classify(top.similarity_score)?;
    let threshold = tier.threshold();

    let kept: Vec<Candidate> = candidates
        .into_iter()
        .take(MAX_CANDIDATES)
        .filter(|c| c.similarity_score >= threshold)
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some((kept, tier))
    }
}

/// Two-tier knowledge-base lookup.
///
/// Tier 1 searches with the raw question text and trusts the search
/// engine's own relevance model. Tier 2 runs only when tier 1 produces no
/// qualifying candidate: the question is expanded with extracted topical
/// tags and searched once more. Every remote failure is swallowed here -
/// the only outcomes are `Found` and `NotFound`.
pub struct KnowledgeLookup {
    /// Ranked text search
    search: Arc<dyn SearchService>,

    /// Semantic tag extraction for the fallback attempt
    tags: Arc<dyn TagExtractor>,
}

impl KnowledgeLookup {
    /// Create a new lookup over the given collaborators.
    pub fn new(search: Arc<dyn SearchService>, tags: Arc<dyn TagExtractor>) -> Self {
        Self { search, tags }
    }

    /// Look up a caller question. Infallible: failures degrade to
    /// [`LookupResult::NotFound`].
    pub async fn lookup(&self, question: &str) -> LookupResult {
        let direct = match self.search.search(question, None).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("direct knowledge-base search failed: {e}");
                Vec::new()
            }
        };

        if let Some((candidates, tier)) = shape(direct) {
            info!(
                "direct match: {} candidate(s), tier {}, top score {:.3}",
                candidates.len(),
                tier.as_str(),
                candidates[0].similarity_score,
            );
            return LookupResult::Found { candidates, tier };
        }

        debug!("no direct match for {question:?}, trying tag-based matching");

        let extracted = match self.tags.extract(question).await {
            Ok(tags) => tags,
            Err(e) => {
                warn!("tag extraction failed: {e}");
                return LookupResult::NotFound;
            }
        };

        if extracted.is_empty() {
            debug!("no tags extracted, skipping tag-based matching");
            return LookupResult::NotFound;
        }

        debug!("retrying with extracted tags: {extracted:?}");

        let tagged = match self.search.search(question, Some(&extracted)).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("tag-based knowledge-base search failed: {e}");
                return LookupResult::NotFound;
            }
        };

        match shape(tagged) {
            Some((candidates, tier)) => {
                info!(
                    "tag-based match: {} candidate(s), tier {}, top score {:.3}",
                    candidates.len(),
                    tier.as_str(),
                    candidates[0].similarity_score,
                );
                LookupResult::Found { candidates, tier }
            }
            None => {
                info!("no qualifying match for {question:?}");
                LookupResult::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use frontdesk_core::{SearchError, TagError};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn candidate(pattern: &str, score: f64) -> Candidate {
        Candidate {
            question_pattern: pattern.to_string(),
            answer: format!("answer to {pattern}"),
            similarity_score: score,
            tags: Vec::new(),
            exact_tag_match: false,
        }
    }

    /// Search stub replaying queued responses and recording the tags of
    /// each call.
    struct StubSearch {
        responses: Mutex<VecDeque<Result<Vec<Candidate>, SearchError>>>,
        calls: Mutex<Vec<Option<Vec<String>>>>,
    }

    impl StubSearch {
        fn new(responses: Vec<Result<Vec<Candidate>, SearchError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Option<Vec<String>>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchService for StubSearch {
        async fn search(
            &self,
            _question: &str,
            tags: Option<&[String]>,
        ) -> Result<Vec<Candidate>, SearchError> {
            self.calls.lock().unwrap().push(tags.map(|t| t.to_vec()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Tag extractor stub: `None` simulates a failed call.
    struct StubTags {
        tags: Option<Vec<String>>,
        calls: AtomicUsize,
    }

    impl StubTags {
        fn returning(tags: Vec<&str>) -> Arc<Self> {
            Arc::new(Self {
                tags: Some(tags.into_iter().map(String::from).collect()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                tags: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TagExtractor for StubTags {
        async fn extract(&self, _question: &str) -> Result<Vec<String>, TagError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.tags {
                Some(tags) => Ok(tags.clone()),
                None => Err(TagError::Transport("connection refused".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn high_confidence_direct_match() {
        let search = StubSearch::new(vec![Ok(vec![candidate(
            "What services do you offer?",
            0.85,
        )])]);
        let tags = StubTags::returning(vec!["services"]);
        let lookup = KnowledgeLookup::new(search.clone(), tags.clone());

        let result = lookup.lookup("what do you offer").await;
        match result {
            LookupResult::Found { candidates, tier } => {
                assert_eq!(tier, ConfidenceTier::High);
                assert_eq!(candidates.len(), 1);
            }
            LookupResult::NotFound => panic!("expected a match"),
        }
        // A qualifying direct match never reaches the extractor.
        assert_eq!(tags.call_count(), 0);
    }

    #[tokio::test]
    async fn high_tier_filter_drops_lower_scoring_specific_candidate() {
        let search = StubSearch::new(vec![Ok(vec![
            candidate("What services do you offer?", 0.85),
            candidate("Do you offer keratin treatments?", 0.49),
        ])]);
        let tags = StubTags::returning(vec![]);
        let lookup = KnowledgeLookup::new(search, tags);

        match lookup.lookup("do you do keratin").await {
            LookupResult::Found { candidates, tier } => {
                assert_eq!(tier, ConfidenceTier::High);
                assert_eq!(candidates.len(), 1);
                assert_eq!(candidates[0].question_pattern, "What services do you offer?");
            }
            LookupResult::NotFound => panic!("expected a match"),
        }
    }

    #[tokio::test]
    async fn medium_tier_keeps_all_clearing_candidates() {
        let search = StubSearch::new(vec![Ok(vec![
            candidate("Haircut pricing for women?", 0.65),
            candidate("Haircut pricing for men?", 0.49),
            candidate("Do you sell gift cards?", 0.35),
        ])]);
        let tags = StubTags::returning(vec![]);
        let lookup = KnowledgeLookup::new(search, tags);

        match lookup.lookup("how much is a haircut").await {
            LookupResult::Found { candidates, tier } => {
                assert_eq!(tier, ConfidenceTier::Medium);
                let scores: Vec<f64> = candidates.iter().map(|c| c.similarity_score).collect();
                assert_eq!(scores, vec![0.65, 0.49]);
                assert!(candidates
                    .iter()
                    .all(|c| c.similarity_score >= tier.threshold()));
            }
            LookupResult::NotFound => panic!("expected a match"),
        }
    }

    #[tokio::test]
    async fn low_tier_match_does_not_trigger_fallback() {
        let search = StubSearch::new(vec![Ok(vec![candidate("Hair treatments?", 0.33)])]);
        let tags = StubTags::returning(vec!["hair"]);
        let lookup = KnowledgeLookup::new(search.clone(), tags.clone());

        match lookup.lookup("hair?").await {
            LookupResult::Found { tier, .. } => assert_eq!(tier, ConfidenceTier::Low),
            LookupResult::NotFound => panic!("expected a match"),
        }
        assert_eq!(tags.call_count(), 0);
        assert_eq!(search.calls().len(), 1);
    }

    #[tokio::test]
    async fn truncates_to_five_candidates() {
        let raw: Vec<Candidate> = (0..8)
            .map(|i| candidate(&format!("q{i}"), 0.9 - 0.01 * i as f64))
            .collect();
        let search = StubSearch::new(vec![Ok(raw)]);
        let tags = StubTags::returning(vec![]);
        let lookup = KnowledgeLookup::new(search, tags);

        match lookup.lookup("anything").await {
            LookupResult::Found { candidates, .. } => assert_eq!(candidates.len(), 5),
            LookupResult::NotFound => panic!("expected a match"),
        }
    }

    #[tokio::test]
    async fn tag_fallback_finds_medium_match() {
        let search = StubSearch::new(vec![
            Ok(Vec::new()),
            Ok(vec![candidate("How much for a haircut?", 0.45)]),
        ]);
        let tags = StubTags::returning(vec!["pricing", "haircut"]);
        let lookup = KnowledgeLookup::new(search.clone(), tags.clone());

        match lookup.lookup("haircut cost").await {
            LookupResult::Found { candidates, tier } => {
                assert_eq!(tier, ConfidenceTier::Medium);
                assert_eq!(candidates.len(), 1);
            }
            LookupResult::NotFound => panic!("expected a match"),
        }

        assert_eq!(tags.call_count(), 1);
        let calls = search.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], None);
        assert_eq!(
            calls[1],
            Some(vec!["pricing".to_string(), "haircut".to_string()])
        );
    }

    #[tokio::test]
    async fn below_threshold_top_score_triggers_fallback() {
        let search = StubSearch::new(vec![
            Ok(vec![candidate("Something barely related", 0.2)]),
            Ok(Vec::new()),
        ]);
        let tags = StubTags::returning(vec!["services"]);
        let lookup = KnowledgeLookup::new(search.clone(), tags.clone());

        assert_eq!(lookup.lookup("vague").await, LookupResult::NotFound);
        assert_eq!(tags.call_count(), 1);
        assert_eq!(search.calls().len(), 2);
    }

    #[tokio::test]
    async fn empty_tag_set_skips_second_search() {
        let search = StubSearch::new(vec![Ok(Vec::new())]);
        let tags = StubTags::returning(vec![]);
        let lookup = KnowledgeLookup::new(search.clone(), tags.clone());

        assert_eq!(lookup.lookup("??").await, LookupResult::NotFound);
        assert_eq!(tags.call_count(), 1);
        assert_eq!(search.calls().len(), 1);
    }

    #[tokio::test]
    async fn tag_extraction_failure_yields_not_found() {
        let search = StubSearch::new(vec![Ok(Vec::new())]);
        let tags = StubTags::failing();
        let lookup = KnowledgeLookup::new(search.clone(), tags);

        assert_eq!(lookup.lookup("??").await, LookupResult::NotFound);
        assert_eq!(search.calls().len(), 1);
    }

    #[tokio::test]
    async fn direct_search_failure_still_tries_tag_fallback() {
        let search = StubSearch::new(vec![
            Err(SearchError::Status(502)),
            Ok(vec![candidate("What are your hours?", 0.75)]),
        ]);
        let tags = StubTags::returning(vec!["hours", "open"]);
        let lookup = KnowledgeLookup::new(search.clone(), tags);

        match lookup.lookup("when are you open").await {
            LookupResult::Found { tier, .. } => assert_eq!(tier, ConfidenceTier::High),
            LookupResult::NotFound => panic!("expected the fallback to match"),
        }
        assert_eq!(search.calls().len(), 2);
    }

    #[tokio::test]
    async fn both_attempts_failing_yield_not_found() {
        let search = StubSearch::new(vec![
            Err(SearchError::Transport("timed out".to_string())),
            Err(SearchError::Transport("timed out".to_string())),
        ]);
        let tags = StubTags::returning(vec!["pricing"]);
        let lookup = KnowledgeLookup::new(search, tags);

        assert_eq!(lookup.lookup("anything").await, LookupResult::NotFound);
    }

    #[tokio::test]
    async fn both_attempts_empty_yield_not_found() {
        let search = StubSearch::new(vec![Ok(Vec::new()), Ok(Vec::new())]);
        let tags = StubTags::returning(vec!["services"]);
        let lookup = KnowledgeLookup::new(search, tags);

        assert_eq!(lookup.lookup("anything").await, LookupResult::NotFound);
    }

    #[test]
    fn shape_is_monotonic_in_threshold() {
        let shaped = shape(vec![
            candidate("a", 0.72),
            candidate("b", 0.71),
            candidate("c", 0.69),
        ]);
        let (kept, tier) = shaped.unwrap();
        assert_eq!(tier, ConfidenceTier::High);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|c| c.similarity_score >= tier.threshold()));
    }

    #[test]
    fn shape_of_empty_is_none() {
        assert!(shape(Vec::new()).is_none());
    }
}
