//! Tool registry - dispatches invocations by name.

use crate::r#trait::{Tool, ToolSchema};
use frontdesk_core::CallInfo;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Registry of the tools available during a call.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. A later registration under the
    /// same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Schemas of all registered tools, for declaring the tool set to the
    /// reasoning model.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Dispatch an invocation to the named tool. An unknown name is an
    /// `"error"` reply, not a failure.
    pub async fn dispatch(&self, name: &str, call: &CallInfo, args: &serde_json::Value) -> String {
        let Some(tool) = self.tools.get(name) else {
            warn!("unknown tool {name:?} requested for call {}", call.call_id);
            return "error".to_string();
        };

        info!("dispatching tool {name} for call {}", call.call_id);
        tool.invoke(call, args).await
    }
}
