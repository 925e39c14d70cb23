use crate::domain::repository::{RepositoryError, UserRepository};
use crate::infrastructure::database::DatabasePool;
use crate::infrastructure::mysql_user_repository::MysqlUserRepository;
use crate::infrastructure::sqlite_user_repository::SqliteUserRepository;
use sqlx::Error as SqlxError;
use std::sync::Arc;

pub fn create_user_repository(pool: DatabasePool) -> Arc<dyn UserRepository> {
    match pool {
        DatabasePool::MySql(pool) => Arc::new(MysqlUserRepository::new(pool)),
        DatabasePool::Sqlite(pool) => Arc::new(SqliteUserRepository::new(pool)),
    }
}

impl From<SqlxError> for RepositoryError {
    fn from(error: SqlxError) -> Self {
        match error {
            SqlxError::RowNotFound => RepositoryError::NotFound("Entity not found".to_string()),
            _ => RepositoryError::Database(error),
        }
    }
}
