use crate::infrastructure::database::DatabaseEngine;
use std::collections::HashMap;
use std::env;

pub struct DatabaseConfigurationBuilder {
    pub database_engine: Option<DatabaseEngine>,
    pub database_url: Option<String>,
    pub database_max_connections: Option<u32>,
    pub database_timeout_ms: Option<u64>,
    pub database_engine_error: Option<String>,
}

impl DatabaseConfigurationBuilder {
    pub fn new() -> Self {
        DatabaseConfigurationBuilder {
            database_engine: None,
            database_url: None,
            database_max_connections: None,
            database_timeout_ms: None,
            database_engine_error: None,
        }
    }

    pub fn database_engine(&mut self, database_engine: DatabaseEngine) -> &mut Self {
        self.database_engine = Some(database_engine);
        self
    }

    pub fn database_url(&mut self, database_url: String) -> &mut Self {
        self.database_url = Some(database_url);
        self
    }

    pub fn database_max_connections(&mut self, database_max_connections: u32) -> &mut Self {
        self.database_max_connections = Some(database_max_connections);
        self
    }

    pub fn database_timeout_ms(&mut self, database_timeout_ms: u64) -> &mut Self {
        self.database_timeout_ms = Some(database_timeout_ms);
        self
    }

    pub fn load_env(&mut self) -> &mut Self {
        let database_url = env::var(EnvNames::DATABASE_URL)
            .ok()
            .filter(|url| !url.is_empty());

        self.database_engine = match &database_url {
            Some(url) => DatabaseEngine::from_url(url),
            None => match env::var(EnvNames::DATABASE_ENGINE) {
                Ok(v) => match DatabaseEngine::try_from(v) {
                    Ok(engine) => Some(engine),
                    Err(e) => {
                        self.database_engine_error = Some(e);
                        None
                    }
                },
                Err(_) => None,
            },
        };

        self.database_max_connections = env::var(EnvNames::DATABASE_MAX_CONNECTIONS)
            .ok()
            .and_then(|v| v.parse::<u32>().ok());
        self.database_timeout_ms = env::var(EnvNames::DATABASE_TIMEOUT_MS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        self.database_url = match (database_url, &self.database_engine) {
            (Some(url), _) => Some(url),
            (None, Some(DatabaseEngine::Mysql)) => {
                let user = env::var("DATABASE_USER").ok();
                let password = env::var("DATABASE_PASSWORD").ok();
                let host = env::var("DATABASE_HOST").ok();
                let port = env::var("DATABASE_PORT").ok();
                let name = env::var("DATABASE_NAME").ok();

                match (user, password, host, port, name) {
                    (Some(user), Some(password), Some(host), Some(port), Some(name)) => Some(
                        format!("mysql://{}:{}@{}:{}/{}", user, password, host, port, name),
                    ),
                    _ => None,
                }
            }
            (None, Some(DatabaseEngine::Sqlite)) => env::var("SQLITE_PATH")
                .ok()
                .map(|path| format!("sqlite://{}", path)),
            (None, None) => None,
        };

        self
    }

    pub fn build(&self) -> DatabaseConfiguration {
        let database_url = self.database_url.clone().unwrap_or_default();
        let detected_engine = self
            .database_engine
            .clone()
            .or_else(|| DatabaseEngine::from_url(&database_url));
        let database_engine_error = match (&self.database_engine_error, &detected_engine) {
            (Some(e), _) => Some(e.clone()),
            (None, None) if !database_url.is_empty() => Some(format!(
                "Unsupported database engine: {}",
                database_url.split(':').next().unwrap_or_default()
            )),
            _ => None,
        };

        DatabaseConfiguration::new(
            detected_engine.unwrap_or_default(),
            database_url,
            self.database_max_connections.unwrap_or(5),
            self.database_timeout_ms.unwrap_or(5000),
            database_engine_error,
        )
    }
}

impl Default for DatabaseConfigurationBuilder {
    fn default() -> Self {
        DatabaseConfigurationBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfiguration {
    database_engine: DatabaseEngine,
    database_url: String,
    database_max_connections: u32,
    database_timeout_ms: u64,
    database_engine_error: Option<String>,
}

impl DatabaseConfiguration {
    pub fn new(
        database_engine: DatabaseEngine,
        database_url: String,
        database_max_connections: u32,
        database_timeout_ms: u64,
        database_engine_error: Option<String>,
    ) -> Self {
        DatabaseConfiguration {
            database_engine,
            database_url,
            database_max_connections,
            database_timeout_ms,
            database_engine_error,
        }
    }

    pub fn database_engine(&self) -> DatabaseEngine {
        self.database_engine.clone()
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn database_timeout_ms(&self) -> u64 {
        self.database_timeout_ms
    }

    /// Set when `DATABASE_ENGINE` or the `DATABASE_URL` scheme names an engine that is not supported.
    pub fn database_engine_error(&self) -> Option<&str> {
        self.database_engine_error.as_deref()
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();

        envs.insert(
            EnvNames::DATABASE_ENGINE.to_owned(),
            self.database_engine.to_string(),
        );
        envs.insert(EnvNames::DATABASE_URL.to_owned(), self.database_url.clone());
        envs.insert(
            EnvNames::DATABASE_MAX_CONNECTIONS.to_owned(),
            self.database_max_connections.to_string(),
        );
        envs.insert(
            EnvNames::DATABASE_TIMEOUT_MS.to_owned(),
            self.database_timeout_ms.to_string(),
        );

        envs
    }
}

pub struct EnvNames;

impl EnvNames {
    pub const DATABASE_ENGINE: &'static str = "DATABASE_ENGINE";
    pub const DATABASE_URL: &'static str = "DATABASE_URL";
    pub const DATABASE_MAX_CONNECTIONS: &'static str = "DATABASE_MAX_CONNECTIONS";
    pub const DATABASE_TIMEOUT_MS: &'static str = "DATABASE_TIMEOUT_MS";
}
