use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::task_repository::TaskRepository;

pub struct DeleteTask<'a, R: TaskRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TaskRepository + ?Sized> DeleteTask<'a, R> {
    /// Returns the number of rows removed; zero is not an error.
    pub async fn execute(&self, id: i64) -> ServiceResult<u64> {
        let affected = self
            .repo
            .delete(id)
            .await
            .map_err(ServiceError::Storage)?;
        tracing::info!(task_id = id, rows_affected = affected, "task_deleted");
        Ok(affected)
    }
}
