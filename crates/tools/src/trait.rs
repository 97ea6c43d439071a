//! Tool abstraction.

use async_trait::async_trait;
use frontdesk_core::CallInfo;
use serde::{Deserialize, Serialize};

/// A tool the reasoning model can invoke during a call.
///
/// Replies are plain strings handed back to the model as tool output.
/// Tools never raise: informational tools report `"not_found"`, action
/// tools report `"error"`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get tool name.
    fn name(&self) -> &str;

    /// Get tool description.
    fn description(&self) -> &str;

    /// Invoke the tool for the given call with JSON arguments.
    async fn invoke(&self, call: &CallInfo, args: &serde_json::Value) -> String;

    /// Get tool schema (for declaring the tool to the model).
    fn schema(&self) -> ToolSchema;
}

/// Tool schema declared to the reasoning model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,

    /// Description
    pub description: String,

    /// Parameters
    pub parameters: Vec<Parameter>,
}

/// A tool parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Description
    pub description: String,

    /// Type
    pub param_type: String,

    /// Required
    pub required: bool,
}
