//! リクエストの形

use serde::Deserialize;

/// POST /todo リクエスト
///
/// `title` はここでは検証しない（必須チェックはクライアントのフォームのみ）。
/// 欠落した title はそのままストア層へ渡る。
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
}
