use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use shared::Task;
use tokio::sync::RwLock;

use super::{StoreError, TaskStore};

/// In-memory store with the same id-assignment contract as the Redis store.
#[derive(Default)]
pub struct MemoryStore {
    tasks: RwLock<HashMap<i64, Task>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn save(&self, mut task: Task) -> Result<Task, StoreError> {
        let id = match task.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        };
        task.id = Some(id);
        self.tasks.write().await.insert(id, task.clone());
        Ok(task)
    }

    async fn find(&self, id: i64) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Task>, StoreError> {
        let mut tasks: Vec<Task> = self.tasks.read().await.values().cloned().collect();
        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tasks.write().await.remove(&id).is_some())
    }
}
