use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioMetrics {
    pub duration_s: f64,
    pub silence_ratio: f64,
    pub num_silence_segments: usize,
    pub approx_peak_rate: f64,
}

impl AudioMetrics {
    pub fn zero() -> Self {
        Self {
            duration_s: 0.0,
            silence_ratio: 0.0,
            num_silence_segments: 0,
            approx_peak_rate: 0.0,
        }
    }

    /// Values fed to the rubric when the clip could not be measured.
    pub fn fallback() -> Self {
        Self {
            duration_s: 30.0,
            silence_ratio: 0.2,
            num_silence_segments: 0,
            approx_peak_rate: 1.2,
        }
    }
}

/// Whether the metrics in a report were measured or substituted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricsOutcome {
    Measured,
    Unavailable { reason: String },
}

impl MetricsOutcome {
    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Measured)
    }
}
