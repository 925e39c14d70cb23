use crate::application::configuration::database::DatabaseConfiguration;
use crate::domain::repository::RepositoryError;
use crate::infrastructure::database::create_pool;
use crate::infrastructure::repository::create_user_repository;

/// Opens a pool for `config` and reports whether a `users` row with `email` exists.
pub async fn check_user_exists(
    config: &DatabaseConfiguration,
    email: &str,
) -> Result<bool, RepositoryError> {
    let pool = create_pool(config).await?;
    let user_repository = create_user_repository(pool.clone());

    let exists = user_repository.exists_by_email(email).await;
    pool.close().await;

    let exists = exists?;
    tracing::debug!(email, exists, "User lookup finished");

    Ok(exists)
}
