use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribes a complete 16-bit PCM WAV file.
    async fn transcribe(&self, wav: Vec<u8>) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("transcription timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("transcription unavailable: {0}")]
    Unavailable(String),
}
