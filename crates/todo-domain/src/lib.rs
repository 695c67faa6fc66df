//! Todo レコードのドメイン型
//!
//! ストアが割り当てる ID とタイムスタンプを含むレコード形状を定義します。
//! 更新操作は存在しないため、状態遷移のロジックはありません。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Todo の一意識別子（ULID）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn timestamp(&self) -> Option<u64> {
        self.parse_ulid().map(|ulid| ulid.timestamp_ms())
    }

    fn parse_ulid(&self) -> Option<Ulid> {
        Ulid::from_string(&self.0).ok()
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Todo レコード
///
/// `title` はクライアント側でのみ必須扱いで、サーバは検証しません。
/// タイトル無しで作成されたレコードも表現できるよう Option とし、
/// ワイヤ上では欠落フィールドとして扱います。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// delete-by-id の結果（高々 1 件）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}
