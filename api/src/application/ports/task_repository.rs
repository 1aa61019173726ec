use async_trait::async_trait;

use crate::domain::tasks::task::{Task, TaskFields};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    // Insertion order (ascending id)
    async fn list_all(&self) -> anyhow::Result<Vec<Task>>;

    // Returns the generated id
    async fn insert(&self, fields: &TaskFields) -> anyhow::Result<i64>;

    // Overwrites every column; returns rows affected (0 when the id is unknown)
    async fn replace(&self, id: i64, fields: &TaskFields) -> anyhow::Result<u64>;

    // Returns rows affected (0 when the id is unknown)
    async fn delete(&self, id: i64) -> anyhow::Result<u64>;
}
