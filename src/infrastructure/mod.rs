pub mod database;
pub mod in_memory_mock_database;
pub mod mysql_user_repository;
pub mod repository;
pub mod sqlite_user_repository;
