use chrono::{DateTime, Utc};

use super::{AudioMetrics, FeedbackResult, MetricsOutcome, StoragePath, StudentProfile, Transcript};

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub upload_path: StoragePath,
    pub original_filename: String,
    pub student: StudentProfile,
    pub metrics: AudioMetrics,
    pub metrics_outcome: MetricsOutcome,
    pub transcript: Transcript,
    pub feedback: FeedbackResult,
    pub analyzed_at: DateTime<Utc>,
}
