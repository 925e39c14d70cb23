use crate::api::controller::mock_database_controller::*;
use crate::api::controller::utils_controller::*;
use crate::api::dto::*;
use crate::api::server_state::ServerState;
use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn routes(state: ServerState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/", ApiDoc::openapi()))
        .route("/v1/health", get(health_action))
        .route("/v1/mock-db/clear", post(clear_mock_database))
        .route(
            "/v1/mock-db/users",
            get(list_mock_users).post(create_mock_user),
        )
        .route("/v1/mock-db/users/{email}", get(get_mock_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    servers(
        (description="dev", url="http://localhost:8080"),
    ),
    paths(
        health_action,
        clear_mock_database,
        list_mock_users,
        create_mock_user,
        get_mock_user,
    ),
    components(
        schemas(
            HealthResponse,
            EnvelopeResponse,
            CreateUserRequest,
            CreatedResponse,
            UserResponse,
            UserListResponse,
        ),
    )
)]
pub struct ApiDoc;
