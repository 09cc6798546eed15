mod analyses;
mod health;
mod index;
mod serve_upload;
mod upload_error;
mod upload_form;
mod upload_intake;

pub use analyses::{AnalysisResponse, ErrorResponse, analyses_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use serve_upload::serve_upload_handler;
pub use upload_error::UploadError;
pub use upload_form::upload_form_handler;
