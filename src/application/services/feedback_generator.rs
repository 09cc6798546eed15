use serde::Deserialize;

use crate::domain::{AudioMetrics, FeedbackResult, Rubric, Transcript};

/// Tuning constants for the heuristic rubric. They have no derivation
/// beyond observation and are exposed so deployments can override them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    pub base_pronunciation: i32,
    pub base_fluency: i32,
    pub base_intonation: i32,
    pub max_silence_ratio: f64,
    pub max_peak_rate: f64,
    pub min_peak_rate: f64,
    pub seconds_per_expected_word: f64,
    pub min_expected_words: usize,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            base_pronunciation: 4,
            base_fluency: 4,
            base_intonation: 3,
            max_silence_ratio: 0.45,
            max_peak_rate: 3.0,
            min_peak_rate: 0.8,
            seconds_per_expected_word: 2.0,
            min_expected_words: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackTemplate {
    pub english: String,
    pub chinese: String,
}

impl Default for FeedbackTemplate {
    fn default() -> Self {
        Self {
            english: "Great effort! Your voice comes through with confidence and you kept \
                      going all the way to the end. Tip: pause briefly at each comma and \
                      full stop so every sentence has room to breathe."
                .to_string(),
            chinese: "表現很棒！你的聲音充滿自信，而且從頭到尾都堅持完成了。\
                      小建議：在逗號和句號處稍作停頓，讓每個句子都有呼吸的空間。"
                .to_string(),
        }
    }
}

pub struct FeedbackGenerator {
    config: RubricConfig,
    template: FeedbackTemplate,
}

impl FeedbackGenerator {
    pub fn new(config: RubricConfig, template: FeedbackTemplate) -> Self {
        Self { config, template }
    }

    pub fn generate(&self, transcript: &Transcript, metrics: &AudioMetrics) -> FeedbackResult {
        let mut pronunciation = self.config.base_pronunciation;
        let mut fluency = self.config.base_fluency;
        let intonation = self.config.base_intonation;

        if metrics.silence_ratio > self.config.max_silence_ratio {
            fluency -= 1;
        }

        if metrics.approx_peak_rate > self.config.max_peak_rate
            || metrics.approx_peak_rate < self.config.min_peak_rate
        {
            fluency -= 1;
        }

        if transcript.word_count() < self.expected_word_count(metrics.duration_s) {
            pronunciation -= 1;
        }

        FeedbackResult {
            english_text: self.template.english.clone(),
            chinese_text: self.template.chinese.clone(),
            rubric: Rubric::clamped(pronunciation, fluency, intonation),
        }
    }

    /// `max(floor(duration / seconds_per_expected_word), min_expected_words)`
    pub fn expected_word_count(&self, duration_s: f64) -> usize {
        let per_duration = if self.config.seconds_per_expected_word > 0.0 && duration_s > 0.0 {
            (duration_s / self.config.seconds_per_expected_word).floor() as usize
        } else {
            0
        };
        per_duration.max(self.config.min_expected_words)
    }
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self::new(RubricConfig::default(), FeedbackTemplate::default())
    }
}
