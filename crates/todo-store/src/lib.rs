//! Record Access Layer
//!
//! Todo コレクションへの 3 操作（一覧・作成・削除）と疎通確認を抽象化し、
//! DynamoDB 実装と InMemory 実装を提供します。各操作はストアへの単発の
//! ラウンドトリップで、リトライやフォールバックは行いません。

mod dynamodb;
mod memory;

pub use dynamodb::DynamoTodoStore;
pub use memory::MemoryTodoStore;

use async_trait::async_trait;
use todo_domain::{DeleteResult, Todo, TodoId};

/// ストア層のエラー
///
/// 障害の詳細は呼び出し側でログにのみ残し、クライアントへは返さない想定。
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// ストアへの接続・疎通の失敗
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// 個々の読み書き要求の失敗
    #[error("store request failed: {0}")]
    Request(String),
}

/// Todo コレクションへの最小抽象
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// 全件をストア順で取得（0 件なら空列）
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// レコードを 1 件作成し、作成されたレコードを返す
    ///
    /// ID とタイムスタンプはストア層が割り当てる。`title` は検証せず
    /// そのまま保存する（None はタイトル無しレコードになる）。
    async fn create(&self, title: Option<String>) -> Result<Todo, StoreError>;

    /// ID 一致のレコードを高々 1 件削除する
    ///
    /// 存在しない ID はエラーではなく `deletedCount: 0` を返す。
    async fn delete_by_id(&self, id: &str) -> Result<DeleteResult, StoreError>;

    /// 接続状態の確認（起動時チェックと readiness プローブ用）
    async fn ping(&self) -> Result<(), StoreError>;
}

/// 新規レコードの組み立て（実装間で共通）
fn new_todo(title: Option<String>) -> Todo {
    let now = chrono::Utc::now();
    Todo {
        id: TodoId::new(),
        title,
        created_at: now,
        updated_at: now,
    }
}
