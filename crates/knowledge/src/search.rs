//! Knowledge-base search client.

use async_trait::async_trait;
use frontdesk_core::{Candidate, KnowledgeBaseConfig, SearchError};
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use tracing::debug;

/// Ranked text search over the business knowledge base.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Search for candidates answering `question`, optionally biased by
    /// extracted topical tags. Candidates come back in the service's own
    /// rank order.
    async fn search(
        &self,
        question: &str,
        tags: Option<&[String]>,
    ) -> Result<Vec<Candidate>, SearchError>;
}

/// Search API response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    success: bool,

    #[serde(default)]
    found: bool,

    #[serde(default)]
    data: Vec<Candidate>,
}

impl SearchResponse {
    /// The envelope reports "no match" through its flags rather than an
    /// error status; both map to an empty candidate list.
    fn into_candidates(self) -> Vec<Candidate> {
        if self.success && self.found {
            self.data
        } else {
            Vec::new()
        }
    }
}

/// HTTP client for the knowledge-base search endpoint.
#[derive(Clone)]
pub struct HttpSearchClient {
    /// HTTP client
    client: Client,

    /// Knowledge-base API base URL
    base_url: String,
}

impl HttpSearchClient {
    /// Create a new search client.
    pub fn new(config: &KnowledgeBaseConfig) -> Self {
        Self {
            client: ClientBuilder::new()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SearchService for HttpSearchClient {
    async fn search(
        &self,
        question: &str,
        tags: Option<&[String]>,
    ) -> Result<Vec<Candidate>, SearchError> {
        let mut request = self
            .client
            .get(format!("{}/api/knowledge-base/search", self.base_url))
            .query(&[("q", question)]);

        if let Some(tags) = tags.filter(|t| !t.is_empty()) {
            request = request.query(&[("extracted_tags", tags.join(","))]);
        }

        debug!("searching knowledge base for {question:?}");

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Payload(e.to_string()))?;

        Ok(body.into_candidates())
    }
}
