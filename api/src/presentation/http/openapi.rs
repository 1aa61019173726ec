use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::tasks::list_tasks,
        crate::presentation::http::tasks::create_task,
        crate::presentation::http::tasks::update_task,
        crate::presentation::http::tasks::delete_task,
        crate::presentation::http::auth::login,
        crate::presentation::http::auth::register,
        crate::presentation::http::health::health,
    ),
    components(schemas(
        crate::presentation::http::tasks::TaskRecord,
        crate::presentation::http::tasks::CreateTaskBody,
        crate::presentation::http::tasks::UpdateTaskBody,
        crate::presentation::http::tasks::DeleteTaskResponse,
        crate::presentation::http::auth::LoginRequest,
        crate::presentation::http::auth::RegisterRequest,
        crate::presentation::http::auth::UserResponse,
        crate::presentation::http::health::HealthResp,
        crate::presentation::http::error::ErrorBody,
    )),
    tags(
        (name = "Tasks", description = "Task assignment CRUD"),
        (name = "Auth", description = "Username/password login and registration"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;
