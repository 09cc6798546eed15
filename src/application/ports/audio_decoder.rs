use crate::domain::{AudioFormat, NormalizedAudio};

/// Turns an uploaded container into mono PCM. Implementations are CPU-bound
/// and are driven from the blocking pool.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8], format: AudioFormat)
    -> Result<NormalizedAudio, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("resampling failed: {0}")]
    ResamplingFailed(String),
}
