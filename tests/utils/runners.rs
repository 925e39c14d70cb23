use crate::utils::cli::CommandFactory;
use crate::utils::context::CliTestContext;
use crate::utils::db::{create_sqlite_database, drop_database, sqlite_test_database_url};
use mock_db_service::application::configuration::app::AppConfigurationBuilder;
use mock_db_service::application::configuration::composed::ConfigurationBuilder;
use mock_db_service::application::configuration::database::DatabaseConfigurationBuilder;
use mock_db_service::infrastructure::database::create_pool;
use std::future::Future;
use uuid::Uuid;

pub async fn run_cli_test<F, Fut>(test: F)
where
    F: FnOnce(CliTestContext) -> Fut,
    Fut: Future<Output = ()>,
{
    let case = Uuid::new_v4().to_string().replace("-", "_");
    let database_url = sqlite_test_database_url(&case);
    create_sqlite_database(&database_url).await;

    let mut builder = ConfigurationBuilder::new(
        AppConfigurationBuilder::new(),
        DatabaseConfigurationBuilder::new(),
    );
    builder.db.database_url(database_url.clone());
    let config = builder.build();

    let pool = create_pool(config.db()).await.unwrap();
    pool.migrate().await.unwrap();

    let command_factory = CommandFactory::new(&config);

    test(CliTestContext::new(
        pool.clone(),
        database_url.clone(),
        command_factory,
    ))
    .await;

    drop_database(&pool, &database_url).await;
}
