//! Supervisor escalation tool.

use crate::r#trait::{Parameter, Tool, ToolSchema};
use async_trait::async_trait;
use frontdesk_core::{CallInfo, EscalationConfig, EscalationError};
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

/// Creates help requests for questions the assistant cannot answer.
#[async_trait]
pub trait EscalationService: Send + Sync {
    /// Create a help request; returns the request id assigned by the
    /// backend.
    async fn create(&self, call: &CallInfo, question: &str) -> Result<String, EscalationError>;
}

/// Help-request creation response, reduced to the id we report back.
#[derive(Debug, Default, Deserialize)]
struct HelpRequestResponse {
    #[serde(default)]
    data: HelpRequestData,
}

#[derive(Debug, Default, Deserialize)]
struct HelpRequestData {
    #[serde(default)]
    id: Option<serde_json::Value>,
}

impl HelpRequestResponse {
    /// The backend assigns ids server-side; a missing id still counts as
    /// a created request.
    fn request_id(&self) -> String {
        match &self.data.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => "unknown".to_string(),
        }
    }
}

/// HTTP client for the help-request endpoint.
#[derive(Clone)]
pub struct HttpEscalationClient {
    /// HTTP client
    client: Client,

    /// Help-request API base URL
    base_url: String,
}

impl HttpEscalationClient {
    /// Create a new escalation client.
    pub fn new(config: &EscalationConfig) -> Self {
        Self {
            client: ClientBuilder::new()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl EscalationService for HttpEscalationClient {
    async fn create(&self, call: &CallInfo, question: &str) -> Result<String, EscalationError> {
        let response = self
            .client
            .post(format!("{}/api/help-requests", self.base_url))
            .json(&json!({
                "customer_phone": call.customer_phone,
                "question": question,
                "call_id": call.call_id,
            }))
            .send()
            .await
            .map_err(|e| EscalationError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !matches!(status, 200 | 201) {
            return Err(EscalationError::Status(status));
        }

        let body: HelpRequestResponse = response
            .json()
            .await
            .map_err(|e| EscalationError::Payload(e.to_string()))?;

        Ok(body.request_id())
    }
}

/// `create_help_request` - escalate a customer question to a supervisor.
pub struct CreateHelpRequestTool {
    escalation: std::sync::Arc<dyn EscalationService>,
}

impl CreateHelpRequestTool {
    /// Create the tool over an escalation backend.
    pub fn new(escalation: std::sync::Arc<dyn EscalationService>) -> Self {
        Self { escalation }
    }
}

#[async_trait]
impl Tool for CreateHelpRequestTool {
    fn name(&self) -> &str {
        "create_help_request"
    }

    fn description(&self) -> &str {
        "Escalate a customer question to a supervisor. Use this when the \
         knowledge base has no answer. Caller details are filled in from \
         the current call."
    }

    async fn invoke(&self, call: &CallInfo, args: &serde_json::Value) -> String {
        let Some(question) = args.get("question").and_then(|q| q.as_str()) else {
            warn!("create_help_request invoked without a question argument");
            return "error".to_string();
        };

        match self.escalation.create(call, question).await {
            Ok(id) => {
                info!(
                    "help request {id} created for call {} ({:.50})",
                    call.call_id, question
                );
                format!("created: {id}")
            }
            Err(e) => {
                error!("failed to create help request: {e}");
                "error".to_string()
            }
        }
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: vec![Parameter {
                name: "question".to_string(),
                description: "The customer question to escalate".to_string(),
                param_type: "string".to_string(),
                required: true,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct StubEscalation(Option<String>);

    #[async_trait]
    impl EscalationService for StubEscalation {
        async fn create(
            &self,
            _call: &CallInfo,
            _question: &str,
        ) -> Result<String, EscalationError> {
            match &self.0 {
                Some(id) => Ok(id.clone()),
                None => Err(EscalationError::Status(500)),
            }
        }
    }

    fn call() -> CallInfo {
        CallInfo {
            customer_phone: "+15551234567".to_string(),
            call_id: "room-9".to_string(),
        }
    }

    #[tokio::test]
    async fn reports_created_id() {
        let tool = CreateHelpRequestTool::new(Arc::new(StubEscalation(Some("42".to_string()))));
        let reply = tool
            .invoke(&call(), &json!({"question": "do you do bridal packages"}))
            .await;
        assert_eq!(reply, "created: 42");
    }

    #[tokio::test]
    async fn backend_failure_replies_error() {
        let tool = CreateHelpRequestTool::new(Arc::new(StubEscalation(None)));
        let reply = tool.invoke(&call(), &json!({"question": "anything"})).await;
        assert_eq!(reply, "error");
    }

    #[tokio::test]
    async fn missing_question_replies_error() {
        let tool = CreateHelpRequestTool::new(Arc::new(StubEscalation(Some("1".to_string()))));
        assert_eq!(tool.invoke(&call(), &json!({})).await, "error");
    }

    #[test]
    fn request_id_handles_string_number_and_missing() {
        let with_string: HelpRequestResponse =
            serde_json::from_str(r#"{"data": {"id": "hr-7"}}"#).unwrap();
        assert_eq!(with_string.request_id(), "hr-7");

        let with_number: HelpRequestResponse =
            serde_json::from_str(r#"{"data": {"id": 7}}"#).unwrap();
        assert_eq!(with_number.request_id(), "7");

        let missing: HelpRequestResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(missing.request_id(), "unknown");
    }
}
