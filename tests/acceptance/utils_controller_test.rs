use crate::utils::server::create_test_server;
use axum::http::StatusCode;
use mock_db_service::api::dto::HealthResponse;
use mock_db_service::infrastructure::in_memory_mock_database::InMemoryMockDatabase;
use std::sync::Arc;

#[tokio::test]
async fn it_returns_health_check_result() {
    let server = create_test_server(Arc::new(InMemoryMockDatabase::new()));
    let response = server.get("/v1/health").await;
    let body = response.json::<HealthResponse>();

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(body.message, "OK");
}

#[tokio::test]
async fn it_returns_open_api_docs() {
    let server = create_test_server(Arc::new(InMemoryMockDatabase::new()));
    let response = server.get("/").await;
    let body = response.text();

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(body.contains("openapi"));
    assert!(body.contains("/v1/mock-db/clear"));
}
