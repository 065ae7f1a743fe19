//! HTTP transport for the chat backend
//!
//! A two-operation client against a fixed base URL: send one chat message,
//! probe the health endpoint. Errors never travel past this module and the
//! session boundary: [`exchange`] absorbs them into a failed settlement.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::{Outbound, TurnOutcome};

/// Reply used when a 2xx response carries no `response` field
pub const MISSING_REPLY_APOLOGY: &str = "Sorry, I couldn't process that request.";

/// Transport failures. All variants surface to the user as the same offline
/// warning; the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("chat endpoint returned {0}")]
    Status(StatusCode),
    #[error("chat reply body was not valid JSON")]
    Malformed,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: Option<String>,
}

/// Client surface for the chat backend. Object-safe so the turn driver and
/// tests can swap in fakes.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one chat message, returning the assistant reply text
    async fn send_chat(&self, text: &str) -> Result<String, TransportError>;

    /// Probe the health endpoint. True only on a 2xx response; any failure
    /// is false. The probe itself never alters session state.
    async fn check_health(&self) -> bool;
}

/// reqwest-backed client. No request timeout: a slow reply keeps its turn
/// in flight until it settles.
pub struct HttpChatClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpChatClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn send_chat(&self, text: &str) -> Result<String, TransportError> {
        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatRequest { message: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let body = response.text().await?;
        parse_reply(&body)
    }

    async fn check_health(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("health probe failed: {}", e);
                false
            }
        }
    }
}

/// Extract the reply text from a chat response body.
///
/// A JSON object without a `response` field is still an answer, just not in
/// the expected shape, so it maps to the apology text rather than a failure.
fn parse_reply(body: &str) -> Result<String, TransportError> {
    let reply: ChatReply = serde_json::from_str(body).map_err(|_| TransportError::Malformed)?;
    Ok(reply
        .response
        .unwrap_or_else(|| MISSING_REPLY_APOLOGY.to_string()))
}

/// Run one accepted turn over the transport. Errors stop here: the turn
/// settles as failed and the session appends the offline warning.
pub async fn exchange(transport: &dyn ChatTransport, outbound: &Outbound) -> TurnOutcome {
    match transport.send_chat(&outbound.text).await {
        Ok(reply) => TurnOutcome::Reply(reply),
        Err(e) => {
            tracing::warn!("chat turn {} failed: {}", outbound.turn, e);
            TurnOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ChatSession, OFFLINE_WARNING};

    struct FakeTransport {
        reply: Option<String>,
    }

    #[async_trait]
    impl ChatTransport for FakeTransport {
        async fn send_chat(&self, _text: &str) -> Result<String, TransportError> {
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(TransportError::Malformed),
            }
        }

        async fn check_health(&self) -> bool {
            self.reply.is_some()
        }
    }

    #[test]
    fn test_parse_reply_extracts_response_field() {
        let reply = parse_reply(r#"{"response":"SIP is..."}"#).unwrap();
        assert_eq!(reply, "SIP is...");
    }

    #[test]
    fn test_parse_reply_ignores_extra_fields() {
        let reply = parse_reply(r#"{"response":"ok","status":"fine"}"#).unwrap();
        assert_eq!(reply, "ok");
    }

    #[test]
    fn test_parse_reply_missing_field_apologizes() {
        let reply = parse_reply(r#"{"message":"wrong field"}"#).unwrap();
        assert_eq!(reply, MISSING_REPLY_APOLOGY);
    }

    #[test]
    fn test_parse_reply_rejects_invalid_json() {
        assert!(matches!(
            parse_reply("<html>502</html>"),
            Err(TransportError::Malformed)
        ));
    }

    #[test]
    fn test_parse_reply_rejects_non_object_body() {
        assert!(matches!(
            parse_reply(r#""just a string""#),
            Err(TransportError::Malformed)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpChatClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_exchange_maps_reply() {
        let transport = FakeTransport {
            reply: Some("hello back".to_string()),
        };
        let outbound = Outbound {
            turn: 2,
            text: "hello".to_string(),
        };
        let outcome = exchange(&transport, &outbound).await;
        assert_eq!(outcome, TurnOutcome::Reply("hello back".to_string()));
    }

    #[tokio::test]
    async fn test_exchange_absorbs_failure() {
        let transport = FakeTransport { reply: None };
        let outbound = Outbound {
            turn: 2,
            text: "hello".to_string(),
        };
        let outcome = exchange(&transport, &outbound).await;
        assert_eq!(outcome, TurnOutcome::Failed);
    }

    #[tokio::test]
    async fn test_full_turn_against_fake_backend() {
        let mut session = ChatSession::new();
        session.set_draft("What is SIP?");
        let outbound = session.submit().expect("submit accepted");

        let transport = FakeTransport {
            reply: Some("SIP is a systematic investment plan.".to_string()),
        };
        let outcome = exchange(&transport, &outbound).await;
        session.settle(outbound.turn, outcome);

        assert_eq!(session.messages().len(), 3);
        assert_eq!(
            session.messages()[2].text,
            "SIP is a systematic investment plan."
        );
        assert!(session.is_connected());
    }

    #[tokio::test]
    async fn test_full_turn_failure_appends_warning() {
        let mut session = ChatSession::new();
        session.set_draft("anyone home?");
        let outbound = session.submit().expect("submit accepted");

        let transport = FakeTransport { reply: None };
        let outcome = exchange(&transport, &outbound).await;
        session.settle(outbound.turn, outcome);

        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].text, OFFLINE_WARNING);
        assert!(!session.is_connected());
    }
}
