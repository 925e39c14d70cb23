use crate::api::dto::{
    CreateUserRequest, CreatedResponse, EnvelopeResponse, UserListResponse, UserResponse,
};
use crate::api::server_state::ServerState;
use crate::domain::repository::RepositoryError;
use crate::domain::user::User;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

#[utoipa::path(post, path = "/v1/mock-db/clear",
    tag="mock-db",
    responses(
        (status = 200, description = "Mock database cleared", content_type = "application/json", body = EnvelopeResponse),
        (status = 500, description = "Mock database could not be cleared", content_type = "application/json", body = EnvelopeResponse),
    )
)]
pub async fn clear_mock_database(
    State(state): State<ServerState>,
) -> (StatusCode, Json<EnvelopeResponse>) {
    match state.mock_database.clear_all_data().await {
        Ok(()) => {
            tracing::info!("Mock database cleared");

            (
                StatusCode::OK,
                Json(EnvelopeResponse::success("Mock database cleared successfully")),
            )
        }
        Err(e) => {
            tracing::error!("Failed to clear mock database: {}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EnvelopeResponse::failure(e.to_string())),
            )
        }
    }
}

#[utoipa::path(get, path = "/v1/mock-db/users",
    tag="mock-db",
    responses(
        (status = 200, description = "Users held by the mock database", content_type = "application/json", body = UserListResponse),
        (status = 500, description = "Mock database error", content_type = "application/json", body = EnvelopeResponse),
    )
)]
pub async fn list_mock_users(
    State(state): State<ServerState>,
) -> Result<(StatusCode, Json<UserListResponse>), RepositoryError> {
    let users = state.mock_database.list_users().await?;
    let items: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    let total = items.len();

    Ok((StatusCode::OK, Json(UserListResponse { items, total })))
}

#[utoipa::path(post, path = "/v1/mock-db/users",
    tag="mock-db",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User added to the mock database", content_type = "application/json", body = CreatedResponse),
        (status = 400, description = "Invalid email or malformed body", content_type = "application/json", body = EnvelopeResponse),
        (status = 409, description = "Email already taken", content_type = "application/json", body = EnvelopeResponse),
    )
)]
pub async fn create_mock_user(
    State(state): State<ServerState>,
    request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), RepositoryError> {
    let Json(request) =
        request.map_err(|rejection| RepositoryError::ValidationError(rejection.body_text()))?;
    let user = User::now(request.email)?;
    state.mock_database.save_user(&user).await?;

    tracing::debug!(id = %user.id, email = %user.email, "Mock user created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: user.id.to_string(),
        }),
    ))
}

#[utoipa::path(get, path = "/v1/mock-db/users/{email}",
    tag="mock-db",
    params(
        ("email" = String, Path, description = "Email of the mock user"),
    ),
    responses(
        (status = 200, description = "Mock user found", content_type = "application/json", body = UserResponse),
        (status = 404, description = "No mock user with this email", content_type = "application/json", body = EnvelopeResponse),
    )
)]
pub async fn get_mock_user(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> Result<(StatusCode, Json<UserResponse>), RepositoryError> {
    let user = state
        .mock_database
        .get_user_by_email(&email)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("User with email {} not found", email)))?;

    Ok((StatusCode::OK, Json(UserResponse::from(user))))
}
