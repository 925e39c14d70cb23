pub mod app;
pub mod composed;
pub mod database;
