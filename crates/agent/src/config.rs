//! Agent configuration, captured once at startup.

use frontdesk_core::{EscalationConfig, KnowledgeBaseConfig, TagExtractorConfig};
use frontdesk_voice::{LiveKitConfig, PipelineConfig};

/// Default knowledge-base / help-request API base URL.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Everything the receptionist needs, resolved from the environment once
/// and injected into the clients at construction.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Knowledge-base search endpoint
    pub knowledge_base: KnowledgeBaseConfig,

    /// Tag-extraction credentials and model
    pub tag_extractor: TagExtractorConfig,

    /// Help-request endpoint
    pub escalation: EscalationConfig,

    /// Voice platform connection
    pub livekit: LiveKitConfig,

    /// Speech pipeline model selections
    pub pipeline: PipelineConfig,
}

impl AgentConfig {
    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Resolve configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url =
            var("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            knowledge_base: KnowledgeBaseConfig::new(&api_base_url),
            tag_extractor: TagExtractorConfig::new(var("OPENAI_API_KEY").unwrap_or_default()),
            escalation: EscalationConfig::new(&api_base_url),
            livekit: LiveKitConfig::new(
                var("LIVEKIT_URL").unwrap_or_default(),
                var("LIVEKIT_API_KEY").unwrap_or_default(),
                var("LIVEKIT_API_SECRET").unwrap_or_default(),
            ),
            pipeline: PipelineConfig::default(),
        }
    }
}
