use crate::api::dto::EnvelopeResponse;
use crate::domain::repository::RepositoryError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

impl IntoResponse for RepositoryError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
            RepositoryError::Conflict(_) => StatusCode::CONFLICT,
            RepositoryError::ValidationError(_) => StatusCode::BAD_REQUEST,
            RepositoryError::Storage(_) | RepositoryError::Database(_) => {
                tracing::error!("Mock database error: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(EnvelopeResponse::failure(self.to_string()))).into_response()
    }
}
