use crate::domain::{AudioMetrics, NormalizedAudio};

/// Measures decoded audio. CPU-bound; driven from the blocking pool.
pub trait MetricsSource: Send + Sync {
    fn measure(&self, audio: &NormalizedAudio) -> AudioMetrics;
}
