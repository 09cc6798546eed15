use axum::http::StatusCode;

use crate::application::ports::StagingStoreError;
use crate::domain::UnsupportedFormatError;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no audio file uploaded")]
    MissingFile,
    #[error("failed to read upload: {message}")]
    Multipart { status: StatusCode, message: String },
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),
    #[error("failed to store upload: {0}")]
    Storage(#[from] StagingStoreError),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::Multipart { status, .. } => *status,
            Self::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for UploadError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        Self::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}
