//! Platform connection and pipeline configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// LiveKit server connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct LiveKitConfig {
    /// Server URL
    pub url: String,

    /// API key
    pub api_key: String,

    /// API secret, never serialized or printed
    #[serde(skip_serializing)]
    pub api_secret: String,
}

impl LiveKitConfig {
    /// Create a new connection config.
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Whether the config points at a server.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

impl fmt::Debug for LiveKitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveKitConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Speech pipeline model selections handed to the platform when a session
/// starts. The platform resolves these identifiers; nothing here runs
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Speech-to-text model
    pub stt: String,

    /// Reasoning model
    pub llm: String,

    /// Text-to-speech model and voice
    pub tts: String,

    /// Voice activity detection model
    pub vad: String,

    /// Turn-detection model
    pub turn_detection: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stt: "deepgram/nova-3:en".to_string(),
            llm: "google/gemini-2.5-flash".to_string(),
            tts: "elevenlabs/eleven_flash_v2:cgSgspJ2msm6clMCkdW9".to_string(),
            vad: "silero".to_string(),
            turn_detection: "multilingual".to_string(),
        }
    }
}
