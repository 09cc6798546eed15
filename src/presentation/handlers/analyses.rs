use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{AnalysisReport, AudioMetrics, FeedbackResult, MetricsOutcome, StudentProfile};
use crate::presentation::state::AppState;

use super::upload_intake::accept_upload;

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub file_name: String,
    pub file_url: String,
    pub original_filename: String,
    pub student: StudentProfile,
    pub metrics: AudioMetrics,
    pub metrics_status: MetricsOutcome,
    pub transcript: String,
    pub feedback: FeedbackResult,
    pub analyzed_at: String,
}

impl From<AnalysisReport> for AnalysisResponse {
    fn from(report: AnalysisReport) -> Self {
        let file_name = report.upload_path.as_str().to_string();
        Self {
            file_url: format!("/uploads/{}", file_name),
            file_name,
            original_filename: report.original_filename,
            student: report.student,
            metrics: report.metrics,
            metrics_status: report.metrics_outcome,
            transcript: report.transcript.as_str().to_string(),
            feedback: report.feedback,
            analyzed_at: report.analyzed_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /api/v1/analyses`: same pipeline as the form, answered with JSON.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyses_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    match accept_upload(&state, multipart).await {
        Ok(report) => (StatusCode::OK, Json(AnalysisResponse::from(report))).into_response(),
        Err(e) => {
            let status = e.status_code();
            tracing::warn!(error = %e, status = %status, "Upload rejected");
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
