//! Semantic tag extraction for fallback matching.
//!
//! Short or vaguely worded caller questions ("hair?") often miss direct
//! text matching. A small chat-completion call turns the question into a
//! handful of topical tags the search endpoint can match against entry
//! tags instead.

use async_trait::async_trait;
use frontdesk_core::{TagError, TagExtractorConfig};
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Instruction given to the tag-extraction model. The category list
/// mirrors the tag vocabulary used by the knowledge-base entries.
const TAG_SYSTEM_PROMPT: &str = "\
You are a semantic tag extractor for a salon/spa business knowledge base.
Extract semantic tags from customer questions that represent the intent and entities.

Common tag categories:
- Location: location, address, directions, place, where
- Pricing: pricing, cost, price, rates, how much
- Services: services, haircut, manicure, facial, treatments, offerings
- Hours: hours, schedule, timing, open, closed, time
- Appointments: appointments, booking, walk-ins, schedule, reservation
- Staff: staff, stylist, technician, team, who
- Policies: policies, cancellation, payment, tips, rules
- Products: products, retail, brands, buy

Return ONLY a JSON array of lowercase tags (3-6 tags), no explanation.
Example: [\"location\", \"address\", \"directions\", \"place\"]";

/// Turns a caller question into a small set of topical tags.
#[async_trait]
pub trait TagExtractor: Send + Sync {
    /// Extract lowercase topical tags from `question`.
    async fn extract(&self, question: &str) -> Result<Vec<String>, TagError>;
}

/// Chat-completion response, reduced to the single field we read.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Parse the completion content as a JSON array of tags, lowercased.
fn parse_tag_content(content: &str) -> Result<Vec<String>, TagError> {
    let tags: Vec<String> = serde_json::from_str(content.trim())
        .map_err(|e| TagError::Payload(format!("expected JSON array of strings: {e}")))?;
    Ok(tags.into_iter().map(|t| t.to_lowercase()).collect())
}

/// Tag extractor backed by a hosted chat-completion endpoint.
#[derive(Clone)]
pub struct ChatTagExtractor {
    /// HTTP client
    client: Client,

    /// Endpoint, credentials, and model selection
    config: TagExtractorConfig,
}

impl ChatTagExtractor {
    /// Create a new extractor.
    pub fn new(config: TagExtractorConfig) -> Self {
        Self {
            client: ClientBuilder::new()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
            config,
        }
    }
}

#[async_trait]
impl TagExtractor for ChatTagExtractor {
    async fn extract(&self, question: &str) -> Result<Vec<String>, TagError> {
        if !self.config.has_credentials() {
            return Err(TagError::MissingCredentials);
        }

        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "developer", "content": TAG_SYSTEM_PROMPT },
                { "role": "user", "content": format!("Extract tags from: {question}") }
            ],
            "temperature": 0.3,
            "max_tokens": 50
        });

        debug!("extracting tags for {question:?}");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TagError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TagError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| TagError::Payload(e.to_string()))?;

        let content = body
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| TagError::Payload("completion has no choices".to_string()))?;

        parse_tag_content(content)
    }
}
