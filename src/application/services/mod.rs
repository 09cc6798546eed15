mod analysis_service;
mod feedback_generator;
mod metrics_extractor;
mod wav_encoder;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use feedback_generator::{FeedbackGenerator, FeedbackTemplate, RubricConfig};
pub use metrics_extractor::{MetricsConfig, MetricsExtractor, SilenceSpan, count_peaks};
pub use wav_encoder::encode_wav;
