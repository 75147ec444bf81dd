//! AnkiConnect Client
//!
//! Speaks the AnkiConnect HTTP protocol (version 6): every call is a POST
//! of `{action, version, params}`, and every response is a JSON object
//! holding exactly a `result` and an `error` field.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

/// Protocol version sent with every request.
pub const ANKI_CONNECT_VERSION: u64 = 6;

/// Errors from talking to AnkiConnect.
#[derive(Debug, Error)]
pub enum AnkiError {
    #[error("AnkiConnect request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AnkiConnect returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed AnkiConnect response: {0}")]
    Protocol(String),

    #[error("AnkiConnect error: {0}")]
    Api(String),
}

/// The AnkiConnect surface the tool relies on.
#[async_trait]
pub trait AnkiConnect: Send + Sync {
    /// Invoke `action` with `params` and return the `result` payload.
    async fn invoke(&self, action: &str, params: Value) -> Result<Value, AnkiError>;
}

/// HTTP client for a running AnkiConnect endpoint.
pub struct AnkiHttpClient {
    url: String,
    http: Client,
}

impl AnkiHttpClient {
    /// Create a client for the endpoint at `url`.
    pub fn new(url: String) -> Self {
        Self {
            url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl AnkiConnect for AnkiHttpClient {
    async fn invoke(&self, action: &str, params: Value) -> Result<Value, AnkiError> {
        let request = json!({
            "action": action,
            "version": ANKI_CONNECT_VERSION,
            "params": params,
        });

        tracing::debug!("invoking AnkiConnect action {}", action);

        let resp = self.http.post(&self.url).json(&request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AnkiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = resp.json().await?;
        parse_response(body)
    }
}

/// Validate a response envelope and pull out the `result` payload.
///
/// AnkiConnect always answers with `{"result": ..., "error": ...}`.
/// Anything else is treated as a protocol violation.
fn parse_response(body: Value) -> Result<Value, AnkiError> {
    let fields = match body.as_object() {
        Some(fields) => fields,
        None => {
            return Err(AnkiError::Protocol(
                "response is not a JSON object".to_string(),
            ))
        }
    };

    if fields.len() != 2 {
        return Err(AnkiError::Protocol(
            "response has an unexpected number of fields".to_string(),
        ));
    }
    if !fields.contains_key("error") {
        return Err(AnkiError::Protocol(
            "response is missing required error field".to_string(),
        ));
    }
    if !fields.contains_key("result") {
        return Err(AnkiError::Protocol(
            "response is missing required result field".to_string(),
        ));
    }

    match &fields["error"] {
        Value::Null => Ok(fields["result"].clone()),
        Value::String(message) => Err(AnkiError::Api(message.clone())),
        other => Err(AnkiError::Api(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_invoke_sends_envelope_and_returns_result() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/").json_body(json!({
                "action": "addNote",
                "version": 6,
                "params": {"note": {"deckName": "Linux"}},
            }));
            then.status(200)
                .json_body(json!({"result": 1496198395707i64, "error": null}));
        });

        let client = AnkiHttpClient::new(server.url("/"));
        let result = client
            .invoke("addNote", json!({"note": {"deckName": "Linux"}}))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(result, json!(1496198395707i64));
    }

    #[tokio::test]
    async fn test_invoke_surfaces_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .json_body(json!({"result": null, "error": "cannot create note because it is a duplicate"}));
        });

        let client = AnkiHttpClient::new(server.url("/"));
        let err = client.invoke("addNote", json!({})).await.unwrap_err();

        match err {
            AnkiError::Api(message) => assert!(message.contains("duplicate")),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invoke_rejects_extra_fields() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .json_body(json!({"result": 1, "error": null, "extra": true}));
        });

        let client = AnkiHttpClient::new(server.url("/"));
        let err = client.invoke("version", json!({})).await.unwrap_err();

        match err {
            AnkiError::Protocol(message) => {
                assert!(message.contains("unexpected number of fields"))
            }
            other => panic!("expected Protocol error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invoke_rejects_missing_error_field() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(200).json_body(json!({"result": 1, "other": 2}));
        });

        let client = AnkiHttpClient::new(server.url("/"));
        let err = client.invoke("version", json!({})).await.unwrap_err();

        match err {
            AnkiError::Protocol(message) => {
                assert!(message.contains("missing required error field"))
            }
            other => panic!("expected Protocol error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invoke_surfaces_http_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(500).body("collection is not available");
        });

        let client = AnkiHttpClient::new(server.url("/"));
        let err = client.invoke("version", json!({})).await.unwrap_err();

        match err {
            AnkiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("not available"));
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }
}
