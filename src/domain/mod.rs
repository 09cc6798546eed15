mod analysis_report;
mod audio_format;
mod audio_metrics;
mod feedback;
mod normalized_audio;
mod storage_path;
mod student_profile;
mod transcript;
mod uploaded_audio;

pub use analysis_report::AnalysisReport;
pub use audio_format::{AudioFormat, UnsupportedFormatError};
pub use audio_metrics::{AudioMetrics, MetricsOutcome};
pub use feedback::{FeedbackResult, MAX_SCORE, MIN_SCORE, Rubric};
pub use normalized_audio::NormalizedAudio;
pub use storage_path::StoragePath;
pub use student_profile::StudentProfile;
pub use transcript::Transcript;
pub use uploaded_audio::{UploadId, UploadedAudio};
