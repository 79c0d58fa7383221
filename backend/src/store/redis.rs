use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use shared::Task;

use super::{StoreError, TaskStore};

// Task records live under `task:{id}`; the id counter key deliberately does
// not match the `task:*` listing pattern.
const NEXT_ID_KEY: &str = "tasks:next_id";

/// Redis-backed store. Tasks are stored as JSON strings under `task:{id}`,
/// with ids drawn from an `INCR` counter.
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn new(redis_url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            client: Client::open(redis_url)?,
        })
    }

    fn key(id: i64) -> String {
        format!("task:{id}")
    }
}

#[async_trait]
impl TaskStore for RedisStore {
    async fn save(&self, mut task: Task) -> Result<Task, StoreError> {
        let mut conn = self.client.get_async_connection().await?;
        let id = match task.id {
            Some(id) => id,
            None => conn.incr(NEXT_ID_KEY, 1).await?,
        };
        task.id = Some(id);
        let json = serde_json::to_string(&task)?;
        let _: () = conn.set(Self::key(id), json).await?;
        Ok(task)
    }

    async fn find(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let mut conn = self.client.get_async_connection().await?;
        let json: Option<String> = conn.get(Self::key(id)).await?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Task>, StoreError> {
        let mut conn = self.client.get_async_connection().await?;
        let keys: Vec<String> = conn.keys("task:*").await?;
        let mut tasks = Vec::with_capacity(keys.len());
        for key in keys {
            let json: String = conn.get(&key).await?;
            if let Ok(task) = serde_json::from_str::<Task>(&json) {
                tasks.push(task);
            }
        }
        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.client.get_async_connection().await?;
        let deleted: usize = conn.del(Self::key(id)).await?;
        Ok(deleted > 0)
    }
}
