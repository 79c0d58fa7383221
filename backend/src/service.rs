//! Service layer: validation plus orchestration of the store.
//!
//! Each operation is a single step against the store. The existence check in
//! `update`/`delete` and the following mutation are separate store calls, so
//! concurrent clients can race on the same id; that window is a known
//! limitation of this layer, not something it guards against.

use std::sync::Arc;

use shared::{Task, TaskPayload};

use crate::error::TaskError;
use crate::store::TaskStore;
use crate::validation::{validate_id, validate_payload};

#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Task>, TaskError> {
        tracing::info!("listing all tasks");
        let tasks = self.store.find_all().await.map_err(|err| {
            tracing::error!(error = %err, "failed to list tasks");
            TaskError::from(err)
        })?;
        Ok(tasks)
    }

    pub async fn create(&self, payload: TaskPayload) -> Result<Task, TaskError> {
        tracing::info!(title = ?payload.title, "creating task");
        validate_payload(&payload)?;
        let task = Task {
            id: None,
            title: payload.title.unwrap_or_default(),
            description: payload.description,
            completed: payload.completed,
        };
        let saved = self.store.save(task).await.map_err(|err| {
            tracing::error!(error = %err, "failed to create task");
            TaskError::from(err)
        })?;
        tracing::info!(id = ?saved.id, "task created");
        Ok(saved)
    }

    pub async fn get(&self, id: i64) -> Result<Task, TaskError> {
        tracing::info!(id, "fetching task");
        validate_id(id)?;
        self.fetch(id).await
    }

    pub async fn update(&self, id: i64, payload: TaskPayload) -> Result<Task, TaskError> {
        tracing::info!(id, "updating task");
        validate_id(id)?;
        validate_payload(&payload)?;

        let mut task = self.fetch(id).await?;
        task.title = payload.title.unwrap_or_default();
        task.description = payload.description;
        task.completed = payload.completed;

        let saved = self.store.save(task).await.map_err(|err| {
            tracing::error!(error = %err, id, "failed to update task");
            TaskError::from(err)
        })?;
        tracing::info!(id, "task updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), TaskError> {
        tracing::info!(id, "deleting task");
        validate_id(id)?;
        self.fetch(id).await?;

        self.store.delete(id).await.map_err(|err| {
            tracing::error!(error = %err, id, "failed to delete task");
            TaskError::from(err)
        })?;
        tracing::info!(id, "task deleted");
        Ok(())
    }

    async fn fetch(&self, id: i64) -> Result<Task, TaskError> {
        let found = self.store.find(id).await.map_err(|err| {
            tracing::error!(error = %err, id, "failed to fetch task");
            TaskError::from(err)
        })?;
        found.ok_or_else(|| {
            tracing::warn!(id, "task not found");
            TaskError::NotFound(id)
        })
    }
}
