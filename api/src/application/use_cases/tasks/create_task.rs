use chrono::{SecondsFormat, Utc};

use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::task_repository::TaskRepository;
use crate::domain::tasks::task::{Task, TaskFields};

pub struct CreateTask<'a, R: TaskRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone, Default)]
pub struct CreateTaskRequest {
    pub task: Option<String>,
    pub measure: Option<String>,
    pub target: Option<i64>,
    pub unit: Option<String>,
    pub assigned_to: Option<String>,
    pub assigned_by: Option<String>,
    pub status: Option<String>,
}

impl CreateTaskRequest {
    /// Names of required text fields that are absent or blank, in wire spelling.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("task", &self.task),
            ("measure", &self.measure),
            ("unit", &self.unit),
            ("assignedTo", &self.assigned_to),
            ("assignedBy", &self.assigned_by),
            ("status", &self.status),
        ]
        .into_iter()
        .filter(|(_, v)| v.as_deref().map(str::trim).unwrap_or("").is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<'a, R: TaskRepository + ?Sized> CreateTask<'a, R> {
    pub async fn execute(&self, req: CreateTaskRequest) -> ServiceResult<Task> {
        let missing = req.missing_fields();
        if !missing.is_empty() {
            return Err(ServiceError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        let fields = TaskFields {
            task: req.task,
            measure: req.measure,
            target: req.target,
            unit: req.unit,
            assigned_to: req.assigned_to,
            status: req.status,
            assigned_by: req.assigned_by,
            assigned_time: Some(now_iso8601()),
        };
        let id = self
            .repo
            .insert(&fields)
            .await
            .map_err(ServiceError::Storage)?;
        tracing::info!(task_id = id, "task_created");
        Ok(Task { id, fields })
    }
}
