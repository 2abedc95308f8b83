// src/transport.rs

use crate::errors::{ChatError, ChatResult};
use crate::logging::log_exchange;
use crate::models::ExchangeLog;
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Instant;

/// One request/response interaction with the remote webhook. The session
/// controller is generic over this, which is what lets tests substitute a
/// scripted transport for the real one.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn exchange(&self, message: &str) -> ChatResult<String>;
}

/// The production transport: one POST per submission to the configured
/// webhook, body `{"message": <text>}`.
pub struct WebhookTransport {
    client: Client,
    url: String,
}

impl WebhookTransport {
    pub fn new(url: impl Into<String>) -> Self {
        WebhookTransport {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl Transport for WebhookTransport {
    async fn exchange(&self, message: &str) -> ChatResult<String> {
        let started = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "message": message }))
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                // Status 0 marks exchanges that never got a response.
                log_exchange(&ExchangeLog {
                    timestamp: Utc::now(),
                    endpoint: self.url.clone(),
                    request_summary: summarize(message),
                    response_status: 0,
                    response_time_ms: started.elapsed().as_millis(),
                });
                return Err(ChatError::transport(format!("request failed: {e}")));
            }
        };

        let status = response.status();
        log_exchange(&ExchangeLog {
            timestamp: Utc::now(),
            endpoint: self.url.clone(),
            request_summary: summarize(message),
            response_status: status.as_u16(),
            response_time_ms: started.elapsed().as_millis(),
        });

        if !status.is_success() {
            return Err(ChatError::transport(format!("webhook returned {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ChatError::malformed(format!("failed to parse response body: {e}")))?;

        extract_reply(&body).ok_or(ChatError::MissingReply)
    }
}

/// Picks the reply string out of a webhook response body. The `message` key
/// wins over `output`; empty strings don't count as a reply.
fn extract_reply(body: &Value) -> Option<String> {
    ["message", "output"]
        .into_iter()
        .find_map(|key| body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .map(str::to_string)
}

fn summarize(message: &str) -> String {
    const MAX_CHARS: usize = 48;
    if message.chars().count() <= MAX_CHARS {
        message.to_string()
    } else {
        let truncated: String = message.chars().take(MAX_CHARS).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_transport(server: &MockServer) -> WebhookTransport {
        WebhookTransport::new(format!("{}/webhook", server.uri()))
    }

    #[tokio::test]
    async fn test_exchange_success_message_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .and(body_json(json!({ "message": "list my events" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "message": "You have 3 events today."
                })),
            )
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let reply = transport.exchange("list my events").await.unwrap();
        assert_eq!(reply, "You have 3 events today.");
    }

    #[tokio::test]
    async fn test_exchange_falls_back_to_output_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": "Done." })))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let reply = transport.exchange("delete event X").await.unwrap();
        assert_eq!(reply, "Done.");
    }

    #[tokio::test]
    async fn test_exchange_message_key_wins_over_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "from message",
                "output": "from output"
            })))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let reply = transport.exchange("hello").await.unwrap();
        assert_eq!(reply, "from message");
    }

    #[tokio::test]
    async fn test_exchange_empty_body_is_missing_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let err = transport.exchange("hello").await.unwrap_err();
        assert_eq!(err, ChatError::MissingReply);
    }

    #[tokio::test]
    async fn test_exchange_empty_string_reply_is_missing_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "" })))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let err = transport.exchange("hello").await.unwrap_err();
        assert_eq!(err, ChatError::MissingReply);
    }

    #[tokio::test]
    async fn test_exchange_server_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let err = transport.exchange("hello").await.unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
    }

    #[tokio::test]
    async fn test_exchange_unparseable_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let err = transport.exchange("hello").await.unwrap_err();
        assert!(matches!(err, ChatError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_exchange_network_failure() {
        // Nothing is listening here; the connection is refused.
        let transport = WebhookTransport::new("http://127.0.0.1:9/webhook");
        let err = transport.exchange("hello").await.unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
    }

    #[test]
    fn test_extract_reply_ignores_non_string_values() {
        let body = json!({ "message": 42, "output": "fallback" });
        assert_eq!(extract_reply(&body), Some("fallback".to_string()));
    }

    #[test]
    fn test_summarize_truncates_long_messages() {
        let long = "x".repeat(100);
        let summary = summarize(&long);
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= 51);
        assert_eq!(summarize("short"), "short");
    }
}
