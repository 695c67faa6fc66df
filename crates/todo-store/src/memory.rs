use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use todo_domain::{DeleteResult, Todo};

use crate::{new_todo, StoreError, TodoStore};

/// 簡易な InMemory 実装（開発/テスト用）
///
/// 挿入順を保持するため Vec を使う。`set_failing` で全操作を失敗させ、
/// `set_connected(false)` で未接続状態を再現できる。
#[derive(Default)]
pub struct MemoryTodoStore {
    records: Mutex<Vec<Todo>>,
    failing: AtomicBool,
    disconnected: AtomicBool,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以後の全操作を失敗させる（ストア障害の再現）
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// ping の成否を切り替える（接続状態の再現）
    pub fn set_connected(&self, connected: bool) {
        self.disconnected.store(!connected, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Request("simulated store failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        self.check()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, title: Option<String>) -> Result<Todo, StoreError> {
        self.check()?;
        let todo = new_todo(title);
        self.records.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteResult, StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|t| t.id.as_str() != id);
        Ok(DeleteResult {
            deleted_count: (before - records.len()) as u64,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.disconnected.load(Ordering::SeqCst) || self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store disconnected".to_string()));
        }
        Ok(())
    }
}
