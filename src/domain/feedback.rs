use serde::Serialize;

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rubric {
    pub pronunciation: u8,
    pub fluency: u8,
    pub intonation: u8,
}

impl Rubric {
    /// Builds a rubric from raw (possibly out-of-range) scores, clamping each axis.
    pub fn clamped(pronunciation: i32, fluency: i32, intonation: i32) -> Self {
        Self {
            pronunciation: clamp_score(pronunciation),
            fluency: clamp_score(fluency),
            intonation: clamp_score(intonation),
        }
    }
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackResult {
    pub english_text: String,
    pub chinese_text: String,
    pub rubric: Rubric,
}
