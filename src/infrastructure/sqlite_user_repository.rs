use crate::domain::repository::{RepositoryError, UserRepository};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Pool<Sqlite>,
}

impl SqliteUserRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}
