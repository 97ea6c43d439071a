//! Call-termination tool.

use crate::r#trait::{Tool, ToolSchema};
use async_trait::async_trait;
use frontdesk_core::CallInfo;
use tracing::{error, info};

/// Ends the platform session carrying the call. Implemented against the
/// voice platform's room service.
#[async_trait]
pub trait CallControl: Send + Sync {
    /// End the call identified by `call_id`.
    async fn end(&self, call_id: &str) -> Result<(), anyhow::Error>;
}

/// `end_call` - hang up gracefully after an escalation or when the caller
/// is done.
pub struct EndCallTool {
    control: std::sync::Arc<dyn CallControl>,
}

impl EndCallTool {
    /// Create the tool over a call-control backend.
    pub fn new(control: std::sync::Arc<dyn CallControl>) -> Self {
        Self { control }
    }
}

#[async_trait]
impl Tool for EndCallTool {
    fn name(&self) -> &str {
        "end_call"
    }

    fn description(&self) -> &str {
        "End the current call gracefully. Use after escalating to a \
         supervisor or when the customer is not interested."
    }

    async fn invoke(&self, call: &CallInfo, _args: &serde_json::Value) -> String {
        match self.control.end(&call.call_id).await {
            Ok(()) => {
                info!("ended call {}", call.call_id);
                "ended".to_string()
            }
            Err(e) => {
                error!("failed to end call {}: {e}", call.call_id);
                "error".to_string()
            }
        }
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: vec![],
        }
    }
}
