//! Knowledge-base lookup tool.

use crate::r#trait::{Parameter, Tool, ToolSchema};
use async_trait::async_trait;
use frontdesk_core::{CallInfo, Candidate, ConfidenceTier, LookupResult};
use frontdesk_knowledge::KnowledgeLookup;
use serde_json::json;
use tracing::warn;

/// Reply when no qualifying answer exists or the lookup degraded.
const NOT_FOUND_REPLY: &str = "not_found";

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Render a successful lookup into the JSON contract the reasoning model
/// consumes: `found`, `count`, per-candidate metadata, and the tier.
fn render_found(candidates: &[Candidate], tier: ConfidenceTier) -> String {
    let results: Vec<serde_json::Value> = candidates
        .iter()
        .map(|c| {
            json!({
                "question": c.question_pattern,
                "answer": c.answer,
                "similarity_score": round2(c.similarity_score),
                "has_tags": c.has_tags(),
                "exact_tag_match": c.exact_tag_match,
            })
        })
        .collect();

    json!({
        "found": true,
        "count": results.len(),
        "results": results,
        "confidence_tier": tier.as_str(),
    })
    .to_string()
}

/// `check_knowledge_base` - search the business knowledge base before
/// answering questions about services, pricing, hours, or policies.
pub struct CheckKnowledgeBaseTool {
    lookup: KnowledgeLookup,
}

impl CheckKnowledgeBaseTool {
    /// Create the tool over a configured lookup.
    pub fn new(lookup: KnowledgeLookup) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl Tool for CheckKnowledgeBaseTool {
    fn name(&self) -> &str {
        "check_knowledge_base"
    }

    fn description(&self) -> &str {
        "Search the knowledge base for answers to customer questions. \
         Returns up to five ranked candidates with confidence information, \
         or \"not_found\" when no matching answer exists."
    }

    async fn invoke(&self, _call: &CallInfo, args: &serde_json::Value) -> String {
        let Some(question) = args.get("question").and_then(|q| q.as_str()) else {
            warn!("check_knowledge_base invoked without a question argument");
            return NOT_FOUND_REPLY.to_string();
        };

        match self.lookup.lookup(question).await {
            LookupResult::Found { candidates, tier } => render_found(&candidates, tier),
            LookupResult::NotFound => NOT_FOUND_REPLY.to_string(),
        }
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: vec![Parameter {
                name: "question".to_string(),
                description: "The customer question to search for".to_string(),
                param_type: "string".to_string(),
                required: true,
            }],
        }
    }
}
