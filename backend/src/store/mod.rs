//! Storage abstraction over task records.
//!
//! The service only sees `TaskStore`; the Redis store backs the running server
//! and the in-memory store backs the tests.

use async_trait::async_trait;
use shared::Task;

mod memory;
mod redis;

pub use self::redis::RedisStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] ::redis::RedisError),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists the task. Assigns a fresh id when the task has none and never
    /// changes an existing one.
    async fn save(&self, task: Task) -> Result<Task, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Task>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Returns whether a record was actually removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
