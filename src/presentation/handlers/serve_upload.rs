use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::StagingStoreError;
use crate::domain::StoragePath;
use crate::presentation::state::AppState;

use super::analyses::ErrorResponse;

/// `GET /uploads/{file_name}`: read-only access to a stored recording.
#[tracing::instrument(skip(state))]
pub async fn serve_upload_handler(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Response {
    let Some(path) = StoragePath::parse(&file_name) else {
        tracing::warn!(file_name = %file_name, "Rejected malformed upload name");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid file name: {}", file_name),
            }),
        )
            .into_response();
    };

    match state.staging_store.fetch(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, path.format().as_mime())],
            bytes,
        )
            .into_response(),
        Err(StagingStoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("File not found: {}", file_name),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read stored upload");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to read file".to_string(),
                }),
            )
                .into_response()
        }
    }
}
