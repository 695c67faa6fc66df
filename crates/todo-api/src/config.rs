//! 環境変数による設定

use std::env;

pub const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
pub const DEFAULT_TABLE_NAME: &str = "todo-table";
pub const DEFAULT_PORT: u16 = 3000;

/// サーバ設定（未設定の項目は既定値にフォールバック）
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// 待ち受けポート
    pub port: u16,
    /// CORS で許可するクライアントオリジン
    pub client_url: String,
    /// Todo コレクションを保持するテーブル名
    pub table_name: String,
    /// ストアのエンドポイント URL（ローカルストア向けの上書き）
    pub store_endpoint: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            client_url: env::var("CLIENT_URL").unwrap_or_else(|_| DEFAULT_CLIENT_URL.to_string()),
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()),
            store_endpoint: env::var("DYNAMODB_ENDPOINT").ok(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            client_url: DEFAULT_CLIENT_URL.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            store_endpoint: None,
        }
    }
}
