use models::errors::{FieldErrors, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(id: i64) -> Self { Self::NotFound(format!("cliente not found with id: {}", id)) }

    pub fn email_in_use(email: &str) -> Self { Self::Conflict(format!("email already in use: {}", email)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(fields) => ServiceError::Validation(fields),
            // `email` is the only unique column besides the key.
            ModelError::Duplicate(_) => ServiceError::Conflict("email already in use".into()),
            ModelError::NotFound(msg) => ServiceError::NotFound(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
