use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::passwords;
use crate::domain::users::user::User;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> ServiceResult<User> {
        let row = self
            .repo
            .find_by_username(&req.username)
            .await
            .map_err(ServiceError::Storage)?;
        let hash = row.as_ref().and_then(|r| r.password_hash.as_deref());
        let verified = passwords::verify_password(&req.password, hash)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        match row {
            Some(r) if verified => Ok(User {
                id: r.id,
                username: r.username,
                role: r.role,
            }),
            _ => {
                tracing::warn!("login_failed");
                Err(ServiceError::InvalidCredentials)
            }
        }
    }
}
