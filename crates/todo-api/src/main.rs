//! todo-api バイナリのエントリポイント
//!
//! ストア接続を確認してから HTTP サーバを起動します。
//! 接続に失敗した場合はログを残してプロセスを終了します（リトライなし）。

use std::sync::Arc;

use todo_api::{app_with_state, config::ApiConfig, AppState};
use todo_store::{DynamoTodoStore, TodoStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env();

    let store =
        DynamoTodoStore::connect(&config.table_name, config.store_endpoint.as_deref()).await;

    // 起動時のストア疎通確認。失敗はフェイタル。
    if let Err(err) = store.ping().await {
        tracing::error!(error = %err, "error connecting to store");
        std::process::exit(1);
    }
    tracing::info!(table = %config.table_name, "store connected");

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    let state = AppState {
        store: Arc::new(store),
        config,
    };
    axum::serve(listener, app_with_state(state)).await?;

    Ok(())
}
