//! Call tools
//!
//! The remote tools the reasoning model can call during a conversation:
//! knowledge-base lookup, supervisor escalation, and hanging up.

#![warn(missing_docs)]

pub mod r#trait;
pub mod registry;

pub mod call_control;
pub mod escalation;
pub mod knowledge_base;

pub use r#trait::{Parameter, Tool, ToolSchema};
pub use registry::ToolRegistry;

pub use call_control::{CallControl, EndCallTool};
pub use escalation::{CreateHelpRequestTool, EscalationService, HttpEscalationClient};
pub use knowledge_base::CheckKnowledgeBaseTool;
