use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::presentation::state::AppState;
use crate::presentation::views::{render_error_page, render_report};

use super::upload_intake::accept_upload;

/// `POST /upload`: browser form submission, answered with an HTML report.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_form_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Response {
    match accept_upload(&state, multipart).await {
        Ok(report) => (StatusCode::OK, Html(render_report(&report))).into_response(),
        Err(e) => {
            let status = e.status_code();
            tracing::warn!(error = %e, status = %status, "Upload rejected");
            (status, Html(render_error_page(status, &e.to_string()))).into_response()
        }
    }
}
