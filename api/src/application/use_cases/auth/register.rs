use crate::application::errors::{ServiceError, ServiceResult};
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::passwords;
use crate::domain::users::user::User;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> ServiceResult<User> {
        if req.username.trim().is_empty() || req.password.is_empty() || req.role.trim().is_empty()
        {
            return Err(ServiceError::Validation(
                "username, password and role are required".into(),
            ));
        }
        let hash = passwords::hash_password(&req.password)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        // Any insert failure is reported as a duplicate username.
        let row = match self
            .repo
            .create_user(&req.username, &hash, &req.role)
            .await
        {
            Ok(row) => row,
            Err(e) => {
                tracing::info!(username = %req.username, error = %e, "register_rejected");
                return Err(ServiceError::UsernameTaken);
            }
        };
        tracing::info!(user_id = row.id, "user_registered");
        Ok(User {
            id: row.id,
            username: row.username,
            role: row.role,
        })
    }
}
