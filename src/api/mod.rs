pub mod controller;
pub mod dto;
pub mod response;
pub mod routes;
pub mod server_state;
