//! Two-tier knowledge-base lookup.
//!
//! This crate holds the one piece of logic original to the receptionist:
//! answering a caller question from the business knowledge base. A direct
//! search runs first; when it produces nothing usable, the question is
//! expanded with LLM-extracted topical tags and searched again. Results
//! are shaped into a confidence-tiered candidate list for the reasoning
//! model to choose from - the lookup never picks a single best answer
//! itself.

mod lookup;
mod search;
mod tags;

pub use lookup::KnowledgeLookup;
pub use search::{HttpSearchClient, SearchService};
pub use tags::{ChatTagExtractor, TagExtractor};
