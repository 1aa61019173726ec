use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::tasks::create_task::{CreateTask, CreateTaskRequest};
use crate::application::use_cases::tasks::delete_task::DeleteTask;
use crate::application::use_cases::tasks::list_tasks::ListTasks;
use crate::application::use_cases::tasks::update_task::UpdateTask;
use crate::bootstrap::app_context::AppContext;
use crate::domain::tasks::task::{Task, TaskFields};
use crate::presentation::http::error::{ApiError, ApiJson, ErrorBody, method_not_allowed};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: i64,
    pub task: Option<String>,
    pub measure: Option<String>,
    pub target: Option<i64>,
    pub unit: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub assigned_by: Option<String>,
    pub assigned_time: Option<String>,
}

impl From<Task> for TaskRecord {
    fn from(t: Task) -> Self {
        let f = t.fields;
        TaskRecord {
            id: t.id,
            task: f.task,
            measure: f.measure,
            target: f.target,
            unit: f.unit,
            assigned_to: f.assigned_to,
            status: f.status,
            assigned_by: f.assigned_by,
            assigned_time: f.assigned_time,
        }
    }
}

/// `assignedTime` is always set by the server; a client value is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    pub task: Option<String>,
    pub measure: Option<String>,
    pub target: Option<i64>,
    pub unit: Option<String>,
    pub assigned_to: Option<String>,
    pub assigned_by: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    pub task: Option<String>,
    pub measure: Option<String>,
    pub target: Option<i64>,
    pub unit: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub assigned_by: Option<String>,
    pub assigned_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteTaskResponse {
    pub deleted: bool,
}

#[utoipa::path(get, path = "/api/tasks", tag = "Tasks", responses(
    (status = 200, body = [TaskRecord]),
    (status = 500, body = ErrorBody)
))]
pub async fn list_tasks(State(ctx): State<AppContext>) -> Result<Json<Vec<TaskRecord>>, ApiError> {
    let repo = ctx.task_repo();
    let uc = ListTasks {
        repo: repo.as_ref(),
    };
    let tasks = uc.execute().await?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/api/tasks", tag = "Tasks", request_body = CreateTaskBody, responses(
    (status = 200, body = TaskRecord),
    (status = 400, body = ErrorBody),
    (status = 500, body = ErrorBody)
))]
pub async fn create_task(
    State(ctx): State<AppContext>,
    ApiJson(body): ApiJson<CreateTaskBody>,
) -> Result<Json<TaskRecord>, ApiError> {
    let repo = ctx.task_repo();
    let uc = CreateTask {
        repo: repo.as_ref(),
    };
    let task = uc
        .execute(CreateTaskRequest {
            task: body.task,
            measure: body.measure,
            target: body.target,
            unit: body.unit,
            assigned_to: body.assigned_to,
            assigned_by: body.assigned_by,
            status: body.status,
        })
        .await?;
    Ok(Json(task.into()))
}

#[utoipa::path(put, path = "/api/tasks/{id}", tag = "Tasks",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = UpdateTaskBody,
    responses(
        (status = 200, body = TaskRecord),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn update_task(
    State(ctx): State<AppContext>,
    id: Result<Path<i64>, PathRejection>,
    ApiJson(body): ApiJson<UpdateTaskBody>,
) -> Result<Json<TaskRecord>, ApiError> {
    let Path(id) = id?;
    let repo = ctx.task_repo();
    let uc = UpdateTask {
        repo: repo.as_ref(),
    };
    let fields = TaskFields {
        task: body.task,
        measure: body.measure,
        target: body.target,
        unit: body.unit,
        assigned_to: body.assigned_to,
        status: body.status,
        assigned_by: body.assigned_by,
        assigned_time: body.assigned_time,
    };
    let task = uc.execute(id, fields).await?;
    Ok(Json(task.into()))
}

#[utoipa::path(delete, path = "/api/tasks/{id}", tag = "Tasks",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 200, body = DeleteTaskResponse),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn delete_task(
    State(ctx): State<AppContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    let Path(id) = id?;
    let repo = ctx.task_repo();
    let uc = DeleteTask {
        repo: repo.as_ref(),
    };
    uc.execute(id).await?;
    Ok(Json(DeleteTaskResponse { deleted: true }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(list_tasks)
                .post(create_task)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/:id",
            put(update_task)
                .delete(delete_task)
                .fallback(method_not_allowed),
        )
        .with_state(ctx)
}
