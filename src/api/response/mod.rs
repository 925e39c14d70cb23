pub mod repository_response;
