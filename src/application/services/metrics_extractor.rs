use serde::Deserialize;

use crate::application::ports::MetricsSource;
use crate::domain::{AudioMetrics, NormalizedAudio};

const STD_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Silence threshold, in dB below the clip's overall loudness.
    pub silence_offset_db: f64,
    pub min_silence_ms: u32,
    pub seek_step_ms: u32,
    pub peak_z_threshold: f64,
    pub duration_epsilon: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            silence_offset_db: 16.0,
            min_silence_ms: 350,
            seek_step_ms: 1,
            peak_z_threshold: 1.5,
            duration_epsilon: 1e-6,
        }
    }
}

/// Half-open sample range `[start_sample, end_sample)` judged silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilenceSpan {
    pub start_sample: usize,
    pub end_sample: usize,
}

impl SilenceSpan {
    pub fn len(&self) -> usize {
        self.end_sample - self.start_sample
    }

    pub fn is_empty(&self) -> bool {
        self.end_sample == self.start_sample
    }
}

pub struct MetricsExtractor {
    config: MetricsConfig,
}

impl MetricsExtractor {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, audio: &NormalizedAudio) -> AudioMetrics {
        if audio.is_empty() || audio.sample_rate == 0 {
            return AudioMetrics::zero();
        }

        let duration_s = audio.duration_secs();
        let denominator = duration_s.max(self.config.duration_epsilon);

        let spans = self.detect_silence(&audio.samples, audio.sample_rate);
        let silent_samples: usize = spans.iter().map(SilenceSpan::len).sum();
        let total_silence_s = silent_samples as f64 / audio.sample_rate as f64;
        let silence_ratio = (total_silence_s / denominator).clamp(0.0, 1.0);

        let peaks = count_peaks(&audio.samples, self.config.peak_z_threshold);
        let approx_peak_rate = peaks as f64 / denominator;

        tracing::debug!(
            duration_s,
            silence_ratio,
            silence_segments = spans.len(),
            peaks,
            "Audio metrics extracted"
        );

        AudioMetrics {
            duration_s,
            silence_ratio,
            num_silence_segments: spans.len(),
            approx_peak_rate,
        }
    }

    /// Slides a `min_silence_ms` window across the clip in `seek_step_ms`
    /// steps and merges overlapping windows whose RMS is at or below the
    /// clip loudness minus `silence_offset_db`.
    pub fn detect_silence(&self, samples: &[f32], sample_rate: u32) -> Vec<SilenceSpan> {
        let window = ms_to_samples(self.config.min_silence_ms, sample_rate).max(1);
        if samples.len() < window {
            return Vec::new();
        }
        let step = ms_to_samples(self.config.seek_step_ms, sample_rate).max(1);

        let energy = prefix_energy(samples);
        let overall_rms = rms_between(&energy, 0, samples.len());
        let threshold = overall_rms * db_to_linear(-self.config.silence_offset_db);

        let last_start = samples.len() - window;
        let mut spans: Vec<SilenceSpan> = Vec::new();
        let mut start = 0;

        loop {
            let end = start + window;
            if rms_between(&energy, start, end) <= threshold {
                match spans.last_mut() {
                    Some(span) if start <= span.end_sample => span.end_sample = end,
                    _ => spans.push(SilenceSpan {
                        start_sample: start,
                        end_sample: end,
                    }),
                }
            }

            if start == last_start {
                break;
            }
            start = (start + step).min(last_start);
        }

        spans
    }
}

impl MetricsSource for MetricsExtractor {
    fn measure(&self, audio: &NormalizedAudio) -> AudioMetrics {
        self.extract(audio)
    }
}

impl Default for MetricsExtractor {
    fn default() -> Self {
        Self::new(MetricsConfig::default())
    }
}

/// Counts z-score local maxima above `z_threshold`. Edge samples have a
/// missing neighbour and never count.
pub fn count_peaks(samples: &[f32], z_threshold: f64) -> usize {
    if samples.len() < 3 {
        return 0;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    let z = |s: f32| {
        if std_dev > STD_EPSILON {
            (s as f64 - mean) / std_dev
        } else {
            s as f64
        }
    };

    samples
        .windows(3)
        .filter(|w| {
            let (prev, current, next) = (z(w[0]), z(w[1]), z(w[2]));
            current > z_threshold && current > prev && current > next
        })
        .count()
}

fn ms_to_samples(ms: u32, sample_rate: u32) -> usize {
    (ms as u64 * sample_rate as u64 / 1000) as usize
}

fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

fn prefix_energy(samples: &[f32]) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(samples.len() + 1);
    let mut acc = 0.0f64;
    prefix.push(acc);
    for &s in samples {
        acc += s as f64 * s as f64;
        prefix.push(acc);
    }
    prefix
}

fn rms_between(prefix: &[f64], start: usize, end: usize) -> f64 {
    if end <= start {
        return 0.0;
    }
    let sum = (prefix[end] - prefix[start]).max(0.0);
    (sum / (end - start) as f64).sqrt()
}
