use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::task_repository::TaskRepository;
use crate::domain::tasks::task::Task;

pub struct ListTasks<'a, R: TaskRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TaskRepository + ?Sized> ListTasks<'a, R> {
    pub async fn execute(&self) -> ServiceResult<Vec<Task>> {
        self.repo.list_all().await.map_err(ServiceError::Storage)
    }
}
