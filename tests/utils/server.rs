use axum_test::TestServer;
use mock_db_service::api::routes::routes;
use mock_db_service::api::server_state::ServerState;
use mock_db_service::application::configuration::app::AppConfigurationBuilder;
use mock_db_service::domain::repository::MockDatabase;
use std::sync::Arc;

pub fn create_test_server(mock_database: Arc<dyn MockDatabase>) -> TestServer {
    let config = AppConfigurationBuilder::new().build();
    let state = ServerState::new(config, mock_database);

    TestServer::new(routes(state)).unwrap()
}
