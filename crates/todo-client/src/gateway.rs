//! Client data gateway.
//!
//! Wraps the three HTTP calls to the todo service and decodes the
//! `{status, ...}` envelope. The server answers HTTP 200 even on logical
//! failure, so the envelope's `status` field is the only failure signal
//! besides actual transport errors.

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use todo_domain::{DeleteResult, Todo};

use crate::config::ClientConfig;

/// Gateway errors, split by where the failure happened.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network-level failure (connection refused, DNS, non-2xx, bad body)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Transport succeeded but the server reported `status: "error"`
    #[error("{0}")]
    Api(String),
}

/// Response envelope, discriminated by the `status` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Envelope<T> {
    Success(T),
    Error { error: String },
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, GatewayError> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Error { error } => Err(GatewayError::Api(error)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListPayload {
    todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct TodoPayload {
    todo: Todo,
}

#[derive(Debug, Deserialize)]
struct DeletePayload {
    todo: DeleteResult,
}

/// HTTP gateway to the todo service.
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/todo", config.server_url.trim_end_matches('/')),
        }
    }

    /// GET /todo
    pub fn fetch_todos(&self) -> Result<Vec<Todo>, GatewayError> {
        let envelope: Envelope<ListPayload> = self
            .client
            .get(&self.base_url)
            .send()?
            .error_for_status()?
            .json()?;
        envelope.into_result().map(|payload| payload.todos)
    }

    /// POST /todo
    pub fn create_todo(&self, title: &str) -> Result<Todo, GatewayError> {
        let envelope: Envelope<TodoPayload> = self
            .client
            .post(&self.base_url)
            .json(&serde_json::json!({ "title": title }))
            .send()?
            .error_for_status()?
            .json()?;
        envelope.into_result().map(|payload| payload.todo)
    }

    /// DELETE /todo/:id
    pub fn delete_todo(&self, id: &str) -> Result<DeleteResult, GatewayError> {
        let envelope: Envelope<DeletePayload> = self
            .client
            .delete(format!("{}/{}", self.base_url, id))
            .send()?
            .error_for_status()?
            .json()?;
        envelope.into_result().map(|payload| payload.todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_for(server: &mockito::ServerGuard) -> Gateway {
        let config = ClientConfig {
            server_url: server.url(),
        };
        Gateway::new(&config)
    }

    const TODO_JSON: &str = r#"{
        "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
        "title": "Buy milk",
        "createdAt": "2026-01-01T00:00:00Z",
        "updatedAt": "2026-01-01T00:00:00Z"
    }"#;

    #[test]
    fn fetch_todos_decodes_success_envelope() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/todo")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"status":"success","todos":[{TODO_JSON}]}}"#))
            .create();

        let todos = gateway_for(&server).fetch_todos().unwrap();
        mock.assert();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title.as_deref(), Some("Buy milk"));
        assert_eq!(todos[0].id.as_str(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    }

    #[test]
    fn fetch_todos_surfaces_embedded_error_string() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/todo")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"error","error":"Error fetching data from resource"}"#)
            .create();

        let err = gateway_for(&server).fetch_todos().unwrap_err();
        match err {
            GatewayError::Api(message) => {
                assert_eq!(message, "Error fetching data from resource");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn create_todo_sends_title_and_decodes_record() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/todo")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"title": "Buy milk"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"status":"success","todo":{TODO_JSON}}}"#))
            .create();

        let todo = gateway_for(&server).create_todo("Buy milk").unwrap();
        mock.assert();

        assert_eq!(todo.title.as_deref(), Some("Buy milk"));
    }

    #[test]
    fn delete_todo_decodes_deletion_result() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("DELETE", "/todo/01ARZ3NDEKTSV4RRFFQ69G5FAV")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"success","todo":{"deletedCount":1}}"#)
            .create();

        let result = gateway_for(&server)
            .delete_todo("01ARZ3NDEKTSV4RRFFQ69G5FAV")
            .unwrap();
        mock.assert();

        assert_eq!(result.deleted_count, 1);
    }

    #[test]
    fn transport_failure_is_classified_as_transport() {
        // Nothing listens on this port.
        let config = ClientConfig {
            server_url: "http://127.0.0.1:1".to_string(),
        };
        let err = Gateway::new(&config).fetch_todos().unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[test]
    fn non_success_status_is_classified_as_transport() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/todo")
            .with_status(502)
            .with_body("bad gateway")
            .create();

        let err = gateway_for(&server).fetch_todos().unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
