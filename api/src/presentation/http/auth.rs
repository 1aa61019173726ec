use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::User;
use crate::presentation::http::error::{ApiError, ApiJson, ErrorBody, method_not_allowed};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            username: u.username,
            role: u.role,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", post(register).fallback(method_not_allowed))
        .route("/login", post(login).fallback(method_not_allowed))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/register", tag = "Auth", request_body = RegisterRequest, responses(
    (status = 200, body = UserResponse),
    (status = 400, body = ErrorBody)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        username: req.username.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
        role: req.role.unwrap_or_default(),
    };
    let user = uc.execute(&dto).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(post, path = "/api/login", tag = "Auth", request_body = LoginRequest, responses(
    (status = 200, body = UserResponse),
    (status = 401, body = ErrorBody),
    (status = 500, body = ErrorBody)
))]
pub async fn login(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        username: req.username.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };
    let user = uc.execute(&dto).await?;
    Ok(Json(user.into()))
}
