use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    // Same message for unknown user and wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,
    // Reported for any failed user insert
    #[error("Username already exists")]
    UsernameTaken,
    #[error("{0}")]
    Storage(#[source] anyhow::Error),
    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
