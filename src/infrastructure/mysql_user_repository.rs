use crate::domain::repository::{RepositoryError, UserRepository};
use async_trait::async_trait;
use sqlx::{MySql, Pool};

#[derive(Clone)]
pub struct MysqlUserRepository {
    pool: Pool<MySql>,
}

impl MysqlUserRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}
