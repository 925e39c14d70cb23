use crate::domain::error::UserError;
use crate::domain::user::User;
use async_trait::async_trait;
use sqlx::Error as SqlxError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound(String),
    Database(SqlxError),
    Conflict(String),
    ValidationError(String),
    Storage(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(msg) => write!(f, "{}", msg),
            RepositoryError::Database(e) => write!(f, "Database error: {}", e),
            RepositoryError::Conflict(msg) => write!(f, "Conflict error: {}", msg),
            RepositoryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            RepositoryError::Storage(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RepositoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RepositoryError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UserError> for RepositoryError {
    fn from(error: UserError) -> Self {
        RepositoryError::ValidationError(error.to_string())
    }
}

/// Resettable in-memory stand-in for the application database.
#[async_trait]
pub trait MockDatabase: Send + Sync {
    async fn save_user(&self, user: &User) -> Result<(), RepositoryError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError>;
    /// Drops every record. Clearing an empty store is a no-op.
    async fn clear_all_data(&self) -> Result<(), RepositoryError>;
}

/// Read-only view of the `users` table in the real database.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;
}
