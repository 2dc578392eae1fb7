//! JSON-RPC messenger
//!
//! HTTP client implementation of `AgentMessenger`. Each remote agent exposes
//! a JSON-RPC 2.0 endpoint accepting the `message/send` method; the reply
//! carries content parts either directly on the result message or nested in
//! task artifacts, and both shapes are collected. Request concurrency is
//! bounded by a semaphore so a wide fan-out cannot open an unbounded number
//! of connections. No authentication is performed.

use crate::messenger::{AgentMessenger, MessagePart};
use crate::registry::RemoteAgentCard;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tandem_core::{new_request_id, MessagingError, RequestContext, TandemResult};
use tokio::sync::Semaphore;

/// Default cap on in-flight requests per messenger.
const DEFAULT_MAX_IN_FLIGHT: usize = 16;

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    id: String,
    method: &'static str,
    params: MessageSendParams,
}

#[derive(Debug, Serialize)]
struct MessageSendParams {
    message: WireMessage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireMessage {
    role: &'static str,
    parts: Vec<WireOutPart>,
    message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct WireOutPart {
    kind: &'static str,
    text: String,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<WireResult>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Result payload of `message/send`: a direct message with parts, or a task
/// whose artifacts carry the parts. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct WireResult {
    #[serde(default)]
    parts: Vec<WireInPart>,
    #[serde(default)]
    artifacts: Vec<WireArtifact>,
}

#[derive(Debug, Deserialize)]
struct WireArtifact {
    #[serde(default)]
    parts: Vec<WireInPart>,
}

#[derive(Debug, Deserialize)]
struct WireInPart {
    #[serde(default)]
    text: Option<String>,
}

// ============================================================================
// CLIENT
// ============================================================================

/// `AgentMessenger` over JSON-RPC 2.0 HTTP endpoints.
pub struct JsonRpcMessenger {
    client: Client,
    in_flight: Arc<Semaphore>,
}

impl JsonRpcMessenger {
    /// Create a messenger with the default in-flight request cap.
    pub fn new() -> Self {
        Self::with_max_in_flight(DEFAULT_MAX_IN_FLIGHT)
    }

    /// Create a messenger capping concurrent requests at `max_in_flight`.
    /// Zero is clamped to one.
    pub fn with_max_in_flight(max_in_flight: usize) -> Self {
        Self {
            client: Client::new(),
            in_flight: Arc::new(Semaphore::new(max_in_flight.max(1))),
        }
    }
}

impl Default for JsonRpcMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentMessenger for JsonRpcMessenger {
    async fn send(
        &self,
        card: &RemoteAgentCard,
        prompt: &str,
        ctx: &RequestContext,
    ) -> TandemResult<Vec<MessagePart>> {
        let _permit = self.in_flight.acquire().await.map_err(|e| {
            MessagingError::RequestFailed {
                agent_id: card.name.clone(),
                reason: format!("Concurrency limiter closed: {}", e),
            }
        })?;

        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: ctx.request_id.to_string(),
            method: "message/send",
            params: MessageSendParams {
                message: WireMessage {
                    role: "user",
                    parts: vec![WireOutPart {
                        kind: "text",
                        text: prompt.to_string(),
                    }],
                    message_id: new_request_id().to_string(),
                    context_id: ctx.session_id.clone(),
                },
            },
        };

        let response = self
            .client
            .post(&card.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| MessagingError::RequestFailed {
                agent_id: card.name.clone(),
                reason: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MessagingError::RequestFailed {
                agent_id: card.name.clone(),
                reason: format!("HTTP status {}", status),
            }
            .into());
        }

        let body: JsonRpcResponse =
            response
                .json()
                .await
                .map_err(|e| MessagingError::InvalidResponse {
                    agent_id: card.name.clone(),
                    reason: format!("Failed to parse response: {}", e),
                })?;

        if let Some(error) = body.error {
            return Err(MessagingError::RequestFailed {
                agent_id: card.name.clone(),
                reason: format!("JSON-RPC error {}: {}", error.code, error.message),
            }
            .into());
        }

        let result = body.result.ok_or_else(|| MessagingError::InvalidResponse {
            agent_id: card.name.clone(),
            reason: "Response carried neither result nor error".to_string(),
        })?;

        let parts = result
            .parts
            .into_iter()
            .chain(result.artifacts.into_iter().flat_map(|a| a.parts))
            .map(|part| MessagePart { text: part.text })
            .collect();

        Ok(parts)
    }
}

impl std::fmt::Debug for JsonRpcMessenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcMessenger")
            .field("available_permits", &self.in_flight.available_permits())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope_shape() {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: "req-1".to_string(),
            method: "message/send",
            params: MessageSendParams {
                message: WireMessage {
                    role: "user",
                    parts: vec![WireOutPart {
                        kind: "text",
                        text: "hello".to_string(),
                    }],
                    message_id: "msg-1".to_string(),
                    context_id: None,
                },
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["method"], "message/send");
        assert_eq!(json["params"]["message"]["parts"][0]["text"], "hello");
        assert_eq!(json["params"]["message"]["messageId"], "msg-1");
        assert!(json["params"]["message"].get("contextId").is_none());
    }

    #[test]
    fn test_response_parses_direct_message_parts() {
        let body = r#"{"jsonrpc":"2.0","id":"1","result":{"parts":[{"kind":"text","text":"I love React"}]}}"#;
        let response: JsonRpcResponse = serde_json::from_str(body).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result.parts.len(), 1);
        assert_eq!(result.parts[0].text.as_deref(), Some("I love React"));
    }

    #[test]
    fn test_response_parses_task_artifacts() {
        let body = r#"{"jsonrpc":"2.0","id":"1","result":{"artifacts":[{"parts":[{"text":"part one"},{"text":"part two"}]}]}}"#;
        let response: JsonRpcResponse = serde_json::from_str(body).unwrap();
        let result = response.result.unwrap();
        assert!(result.parts.is_empty());
        assert_eq!(result.artifacts[0].parts.len(), 2);
    }

    #[test]
    fn test_response_parses_error_object() {
        let body = r#"{"jsonrpc":"2.0","id":"1","error":{"code":-32600,"message":"bad request"}}"#;
        let response: JsonRpcResponse = serde_json::from_str(body).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32600);
        assert_eq!(error.message, "bad request");
    }

    #[test]
    fn test_parts_without_text_deserialize_to_none() {
        let body = r#"{"jsonrpc":"2.0","id":"1","result":{"parts":[{"kind":"data"}]}}"#;
        let response: JsonRpcResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.result.unwrap().parts[0].text, None);
    }
}
