use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::task_repository::TaskRepository;
use crate::domain::tasks::task::{Task, TaskFields};

pub struct UpdateTask<'a, R: TaskRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TaskRepository + ?Sized> UpdateTask<'a, R> {
    // Full replace: absent fields are stored as NULL. An unknown id affects
    // zero rows and still echoes the payload.
    pub async fn execute(&self, id: i64, fields: TaskFields) -> ServiceResult<Task> {
        let affected = self
            .repo
            .replace(id, &fields)
            .await
            .map_err(ServiceError::Storage)?;
        if affected == 0 {
            tracing::debug!(task_id = id, "task_update_no_rows");
        } else {
            tracing::info!(task_id = id, "task_updated");
        }
        Ok(Task { id, fields })
    }
}
