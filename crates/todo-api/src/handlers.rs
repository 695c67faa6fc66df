//! HTTP ハンドラ
//!
//! Todo エンドポイントは成否にかかわらず HTTP 200 を返し、結果は
//! `status` フィールドで表す（クライアント契約）。ストア障害の詳細は
//! 操作タグ付きでログにのみ残し、クライアントには固定メッセージを返す。

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::models::CreateTodoRequest;
use crate::AppState;

const LIST_ERROR: &str = "Error fetching data from resource";
const CREATE_ERROR: &str = "Error creating resource";
const DELETE_ERROR: &str = "Error deleting resource with provided identifier";

fn error_envelope(message: &str) -> Json<serde_json::Value> {
    Json(json!({ "status": "error", "error": message }))
}

/// GET /todo
pub async fn list_todos(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_all().await {
        Ok(todos) => Json(json!({ "status": "success", "todos": todos })),
        Err(err) => {
            tracing::error!(error = %err, "[list-todos]");
            error_envelope(LIST_ERROR)
        }
    }
}

/// POST /todo
///
/// ボディ無し・title 無しも拒否せず、そのままストアへ渡す。
pub async fn create_todo(
    State(state): State<AppState>,
    body: Option<Json<CreateTodoRequest>>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    match state.store.create(req.title).await {
        Ok(todo) => Json(json!({ "status": "success", "todo": todo })),
        Err(err) => {
            tracing::error!(error = %err, "[create-todo]");
            error_envelope(CREATE_ERROR)
        }
    }
}

/// DELETE /todo/:id
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete_by_id(&id).await {
        Ok(result) => Json(json!({ "status": "success", "todo": result })),
        Err(err) => {
            tracing::error!(error = %err, todo_id = %id, "[delete-todo]");
            error_envelope(DELETE_ERROR)
        }
    }
}

/// GET /（サービスメタデータ）
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "name": "todo-api",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Minimal todo-list API server",
        "client": state.config.client_url,
    }))
}

/// GET /health は HTTP を返せている限り常に healthy
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// GET /ready はストア疎通を確認できたときのみ ready
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "not ready" })),
            )
        }
    }
}
