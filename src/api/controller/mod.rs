pub mod mock_database_controller;
pub mod utils_controller;
