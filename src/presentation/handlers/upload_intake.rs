use axum::extract::Multipart;
use futures::stream;

use crate::domain::{AnalysisReport, AudioFormat, StoragePath, StudentProfile, UploadedAudio};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::upload_error::UploadError;

const FILE_FIELDS: [&str; 2] = ["file", "audio"];

/// Reads, stores and analyzes one multipart submission.
pub async fn accept_upload(
    state: &AppState,
    multipart: Multipart,
) -> Result<AnalysisReport, UploadError> {
    let (upload, student) = read_upload(multipart).await?;
    store_and_analyze(state, upload, student).await
}

/// Reads the multipart form. The extension is checked before the file body
/// is read, so unsupported uploads are never buffered, stored or decoded.
async fn read_upload(
    mut multipart: Multipart,
) -> Result<(UploadedAudio, StudentProfile), UploadError> {
    let mut upload = None;
    let mut student = StudentProfile::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            n if FILE_FIELDS.contains(&n) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let format = AudioFormat::from_filename(&filename).inspect_err(|_| {
                    tracing::warn!(filename = %filename, "Rejected upload with unsupported extension");
                })?;
                let data = field.bytes().await?;

                tracing::debug!(filename = %filename, format = %format, bytes = data.len(), "Audio file received");
                upload = Some(UploadedAudio::new(filename, format, data));
            }
            "student_name" => student.name = non_empty(field.text().await?),
            "age" => student.age = non_empty(field.text().await?),
            "notes" => student.notes = non_empty(field.text().await?),
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    let upload = upload.ok_or(UploadError::MissingFile)?;

    if let Some(notes) = &student.notes {
        tracing::debug!(notes = %preview_text(notes), "Upload notes");
    }

    Ok((upload, student))
}

/// Persists the upload under its random name, then runs the pipeline.
async fn store_and_analyze(
    state: &AppState,
    upload: UploadedAudio,
    student: StudentProfile,
) -> Result<AnalysisReport, UploadError> {
    let path = StoragePath::new(&upload.id, upload.format);
    let body = stream::iter([Ok::<_, std::io::Error>(upload.data.clone())]);
    let stored = state.staging_store.store(&path, Box::pin(body)).await?;

    tracing::info!(
        path = %path,
        original_filename = %upload.original_filename,
        bytes = stored,
        "Upload stored"
    );

    let report = state.analysis_service.analyze(upload, student).await;

    tracing::debug!(transcript = %preview_text(report.transcript.as_str()), "Transcript");

    Ok(report)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
