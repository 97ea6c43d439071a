use thiserror::Error;

/// Failures at the voice platform boundary.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Room service error: {0}")]
    RoomService(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
