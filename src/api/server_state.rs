use crate::application::configuration::app::AppConfiguration;
use crate::domain::repository::MockDatabase;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServerState {
    pub config: AppConfiguration,
    pub mock_database: Arc<dyn MockDatabase>,
}

impl ServerState {
    pub fn new(config: AppConfiguration, mock_database: Arc<dyn MockDatabase>) -> Self {
        ServerState {
            config,
            mock_database,
        }
    }
}
