//! Voice platform boundary.
//!
//! The hosted platform owns the audio pipeline (speech-to-text, reasoning
//! model, text-to-speech, voice activity, turn detection) and the
//! telephony room lifecycle. This crate binds to the small slice the
//! receptionist needs: ending a room to hang up, and reading the SIP
//! participant to identify the caller. Pipeline model selections are
//! configuration handed to the platform, not implementations.

pub mod config;
pub mod error;
pub mod service;

pub use config::{LiveKitConfig, PipelineConfig};
pub use error::VoiceError;
pub use service::RoomService;
