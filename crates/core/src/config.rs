//! Configuration injected into the remote-call clients.
//!
//! All values are captured once at startup and handed to the clients at
//! construction; nothing reads process environment at call time.

use std::fmt;
use std::time::Duration;

/// Default timeout for knowledge-base search calls.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for tag-extraction calls.
pub const DEFAULT_TAG_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for help-request creation.
pub const DEFAULT_ESCALATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Default chat-completion endpoint for tag extraction.
pub const DEFAULT_TAG_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default tag-extraction model.
pub const DEFAULT_TAG_MODEL: &str = "gpt-4o-mini";

/// Knowledge-base search endpoint configuration.
#[derive(Debug, Clone)]
pub struct KnowledgeBaseConfig {
    /// Base URL of the knowledge-base API
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl KnowledgeBaseConfig {
    /// Create a config with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }
}

/// Tag-extraction (chat completion) configuration.
#[derive(Clone)]
pub struct TagExtractorConfig {
    /// Chat-completion endpoint URL
    pub endpoint: String,

    /// Bearer API key; empty disables extraction
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl TagExtractorConfig {
    /// Create a config with the default endpoint, model, and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_TAG_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_TAG_MODEL.to_string(),
            timeout: DEFAULT_TAG_TIMEOUT,
        }
    }

    /// Whether an API key is configured.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for TagExtractorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagExtractorConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Help-request (escalation) endpoint configuration.
#[derive(Debug, Clone)]
pub struct EscalationConfig {
    /// Base URL of the help-request API
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl EscalationConfig {
    /// Create a config with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_ESCALATION_TIMEOUT,
        }
    }
}
