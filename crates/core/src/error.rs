//! Failure taxonomy for the remote collaborators.
//!
//! Every remote call can fail three ways: the transport layer (timeout,
//! connection refused), a non-success HTTP status, or a payload that does
//! not match the expected schema. Callers pattern-match these to decide
//! between fallback and termination; none of them escapes a tool.

use thiserror::Error;

/// Failure of a knowledge-base search call.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network-level failure (timeout, connection error)
    #[error("search transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("search API returned status {0}")]
    Status(u16),

    /// Response body did not match the expected schema
    #[error("malformed search payload: {0}")]
    Payload(String),
}

/// Failure of a tag-extraction call.
#[derive(Debug, Error)]
pub enum TagError {
    /// No API key configured; extraction is skipped without a request
    #[error("tag extractor credentials not configured")]
    MissingCredentials,

    /// Network-level failure (timeout, connection error)
    #[error("tag extraction transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("tag extraction API returned status {0}")]
    Status(u16),

    /// Completion content was not a JSON array of strings
    #[error("malformed tag payload: {0}")]
    Payload(String),
}

/// Failure of a help-request creation call.
#[derive(Debug, Error)]
pub enum EscalationError {
    /// Network-level failure (timeout, connection error)
    #[error("escalation transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("help-request API returned status {0}")]
    Status(u16),

    /// Response body did not match the expected schema
    #[error("malformed help-request payload: {0}")]
    Payload(String),
}
