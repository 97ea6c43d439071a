//! Frontdesk core data models.
//!
//! This crate defines the data structures shared across the voice
//! receptionist: knowledge-base candidates and confidence tiers, caller
//! identity, collaborator failure taxonomy, and injected configuration.
//! It performs no I/O.

#![warn(missing_docs)]

// Knowledge-base lookup
mod candidate;
mod lookup;

// Call identity
mod call;

// Collaborator failures
mod error;

// Injected configuration
mod config;

// Re-exports
pub use candidate::Candidate;
pub use lookup::{ConfidenceTier, LookupResult};

pub use call::CallInfo;

pub use error::{EscalationError, SearchError, TagError};

pub use config::{EscalationConfig, KnowledgeBaseConfig, TagExtractorConfig};
