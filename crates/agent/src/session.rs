//! Per-call wiring: the tool set and its dispatch runtime.

use crate::config::AgentConfig;
use frontdesk_core::CallInfo;
use frontdesk_knowledge::{ChatTagExtractor, HttpSearchClient, KnowledgeLookup};
use frontdesk_tools::{
    CallControl, CheckKnowledgeBaseTool, CreateHelpRequestTool, EndCallTool, HttpEscalationClient,
    ToolRegistry,
};
use std::sync::{Arc, Mutex};
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// Build the tool set for a call. Each session gets its own registry;
/// nothing is shared across calls.
pub fn build_registry(config: &AgentConfig, control: Arc<dyn CallControl>) -> ToolRegistry {
    let lookup = KnowledgeLookup::new(
        Arc::new(HttpSearchClient::new(&config.knowledge_base)),
        Arc::new(ChatTagExtractor::new(config.tag_extractor.clone())),
    );

    let escalation = Arc::new(HttpEscalationClient::new(&config.escalation));

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CheckKnowledgeBaseTool::new(lookup)));
    registry.register(Arc::new(CreateHelpRequestTool::new(escalation)));
    registry.register(Arc::new(EndCallTool::new(control)));
    registry
}

/// Call control used when no voice platform is configured (schema dumps,
/// local tool runs). Ending a call through it always fails.
pub struct UnconfiguredCallControl;

#[async_trait::async_trait]
impl CallControl for UnconfiguredCallControl {
    async fn end(&self, _call_id: &str) -> Result<(), anyhow::Error> {
        anyhow::bail!("voice platform is not configured")
    }
}

/// Dispatch runtime for one voice session.
///
/// Every invocation runs as its own spawned task so a session shutdown can
/// abort in-flight remote calls without surfacing partial results.
pub struct CallRuntime {
    registry: ToolRegistry,
    call: CallInfo,
    inflight: Mutex<Vec<AbortHandle>>,
}

impl CallRuntime {
    /// Create a runtime for one call.
    pub fn new(registry: ToolRegistry, call: CallInfo) -> Self {
        Self {
            registry,
            call,
            inflight: Mutex::new(Vec::new()),
        }
    }

    /// Run one tool invocation to completion. Returns `None` when the
    /// invocation was aborted by [`CallRuntime::shutdown`].
    pub async fn dispatch(&self, tool: &str, args: serde_json::Value) -> Option<String> {
        let registry = self.registry.clone();
        let call = self.call.clone();
        let name = tool.to_string();

        let handle = tokio::spawn(async move { registry.dispatch(&name, &call, &args).await });
        self.inflight.lock().unwrap().push(handle.abort_handle());

        match handle.await {
            Ok(reply) => Some(reply),
            Err(e) => {
                if e.is_cancelled() {
                    debug!("tool invocation aborted during session shutdown");
                } else {
                    warn!("tool invocation task failed: {e}");
                }
                None
            }
        }
    }

    /// Abort every in-flight invocation. Called when the voice session
    /// ends or is cancelled.
    pub fn shutdown(&self) {
        let mut inflight = self.inflight.lock().unwrap();
        for handle in inflight.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for CallRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}
