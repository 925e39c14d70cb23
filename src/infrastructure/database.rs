use crate::application::configuration::database::DatabaseConfiguration;
use sqlx::migrate::MigrateError;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Error, MySql, Pool, Sqlite};
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DatabaseEngine {
    #[default]
    Sqlite,
    Mysql,
}

impl DatabaseEngine {
    pub fn from_url(url: &str) -> Option<DatabaseEngine> {
        match url.to_lowercase() {
            url if url.starts_with("sqlite:") => Some(DatabaseEngine::Sqlite),
            url if url.starts_with("mysql:") => Some(DatabaseEngine::Mysql),
            _ => None,
        }
    }
}

impl Display for DatabaseEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseEngine::Sqlite => write!(f, "sqlite"),
            DatabaseEngine::Mysql => write!(f, "mysql"),
        }
    }
}

impl TryFrom<String> for DatabaseEngine {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "sqlite" => Ok(DatabaseEngine::Sqlite),
            "mysql" => Ok(DatabaseEngine::Mysql),
            _ => Err(format!("Unsupported database engine: {}", value)),
        }
    }
}

#[derive(Clone)]
pub enum DatabasePool {
    MySql(Pool<MySql>),
    Sqlite(Pool<Sqlite>),
}

impl DatabasePool {
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        match self {
            DatabasePool::MySql(pool) => sqlx::migrate!("./migrations/mysql").run(pool).await,
            DatabasePool::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await,
        }
    }

    pub async fn close(&self) {
        match self {
            DatabasePool::MySql(pool) => pool.close().await,
            DatabasePool::Sqlite(pool) => pool.close().await,
        }
    }
}

pub async fn create_pool(config: &DatabaseConfiguration) -> Result<DatabasePool, Error> {
    if let Some(e) = config.database_engine_error() {
        return Err(Error::Configuration(e.to_string().into()));
    }

    if config.database_url().is_empty() {
        return Err(Error::Configuration("DATABASE_URL is not configured".into()));
    }

    let timeout = Duration::from_millis(config.database_timeout_ms());

    tracing::debug!(
        engine = %config.database_engine(),
        max_connections = config.database_max_connections(),
        "Connecting to database"
    );

    match config.database_engine() {
        DatabaseEngine::Mysql => {
            let pool = MySqlPoolOptions::new()
                .max_connections(config.database_max_connections())
                .acquire_timeout(timeout)
                .connect(config.database_url())
                .await?;

            Ok(DatabasePool::MySql(pool))
        }
        DatabaseEngine::Sqlite => {
            let pool = SqlitePoolOptions::new()
                .max_connections(config.database_max_connections())
                .acquire_timeout(timeout)
                .connect(config.database_url())
                .await?;

            Ok(DatabasePool::Sqlite(pool))
        }
    }
}
