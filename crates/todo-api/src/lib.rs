//! Todo サービスの HTTP API（axum）
//!
//! `/todo` 配下の 3 エンドポイントと運用プローブ（`/`・`/health`・
//! `/ready`）を提供します。Todo エンドポイントのレスポンスは常に
//! HTTP 200 で、成否は `status` フィールドで表現します。

pub mod config;
mod handlers;
mod middleware;
mod models;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get},
    Router,
};
use tower_http::cors::CorsLayer;

use config::ApiConfig;
use todo_store::{MemoryTodoStore, TodoStore};

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub config: ApiConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: Arc::new(MemoryTodoStore::new()),
            config: ApiConfig::default(),
        }
    }
}

/// 既定状態（InMemory ストア）でルータを構築して返します。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版
pub fn app_with_state(state: AppState) -> Router {
    let origin: HeaderValue = state
        .config
        .client_url
        .parse()
        .expect("client origin is a valid header value");
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route("/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route("/todo/:id", delete(handlers::delete_todo))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(axum::middleware::from_fn(middleware::dedupe_query_params))
        .layer(cors)
        .with_state(state)
}
