use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::application::ports::{
    AudioDecoder, AudioDecoderError, MetricsSource, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{
    AnalysisReport, AudioMetrics, MetricsOutcome, NormalizedAudio, StoragePath, StudentProfile,
    Transcript, UploadedAudio,
};

use super::FeedbackGenerator;
use super::wav_encoder::encode_wav;

/// Runs decode, measurement, transcription and feedback for one upload.
/// Every stage after upload acceptance degrades instead of failing, so a
/// report is always produced.
pub struct AnalysisService {
    decoder: Arc<dyn AudioDecoder>,
    transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
    metrics_source: Arc<dyn MetricsSource>,
    feedback_generator: FeedbackGenerator,
    transcription_timeout: Duration,
}

impl AnalysisService {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
        metrics_source: Arc<dyn MetricsSource>,
        feedback_generator: FeedbackGenerator,
        transcription_timeout: Duration,
    ) -> Self {
        Self {
            decoder,
            transcription_engine,
            metrics_source,
            feedback_generator,
            transcription_timeout,
        }
    }

    #[tracing::instrument(
        skip(self, upload, student),
        fields(upload_id = %upload.id.as_uuid(), format = %upload.format, bytes = upload.size_bytes())
    )]
    pub async fn analyze(&self, upload: UploadedAudio, student: StudentProfile) -> AnalysisReport {
        let upload_path = StoragePath::new(&upload.id, upload.format);

        let (metrics, metrics_outcome, transcript) = match self.decode(&upload).await {
            Ok(audio) => {
                let (metrics, outcome) = self.measure(Arc::clone(&audio)).await;
                let transcript = self.transcribe(audio).await;
                (metrics, outcome, transcript)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Audio could not be decoded, using fallback metrics");
                (
                    AudioMetrics::fallback(),
                    MetricsOutcome::Unavailable {
                        reason: e.to_string(),
                    },
                    Transcript::empty(),
                )
            }
        };

        let feedback = self.feedback_generator.generate(&transcript, &metrics);

        tracing::info!(
            measured = metrics_outcome.is_measured(),
            words = transcript.word_count(),
            pronunciation = feedback.rubric.pronunciation,
            fluency = feedback.rubric.fluency,
            intonation = feedback.rubric.intonation,
            "Analysis completed"
        );

        AnalysisReport {
            upload_path,
            original_filename: upload.original_filename,
            student,
            metrics,
            metrics_outcome,
            transcript,
            feedback,
            analyzed_at: Utc::now(),
        }
    }

    async fn decode(&self, upload: &UploadedAudio) -> Result<Arc<NormalizedAudio>, AnalysisError> {
        let decoder = Arc::clone(&self.decoder);
        let data = upload.data.clone();
        let format = upload.format;

        let audio = tokio::task::spawn_blocking(move || decoder.decode(&data, format))
            .await
            .map_err(|e| AnalysisError::TaskFailed(format!("decoder: {}", e)))??;

        Ok(Arc::new(audio))
    }

    async fn measure(&self, audio: Arc<NormalizedAudio>) -> (AudioMetrics, MetricsOutcome) {
        let source = Arc::clone(&self.metrics_source);

        match tokio::task::spawn_blocking(move || source.measure(&audio)).await {
            Ok(metrics) => (metrics, MetricsOutcome::Measured),
            Err(e) => {
                let err = AnalysisError::TaskFailed(format!("metrics: {}", e));
                tracing::error!(error = %err, "Metrics computation failed, using fallback metrics");
                (
                    AudioMetrics::fallback(),
                    MetricsOutcome::Unavailable {
                        reason: err.to_string(),
                    },
                )
            }
        }
    }

    async fn transcribe(&self, audio: Arc<NormalizedAudio>) -> Transcript {
        match self.try_transcribe(audio).await {
            Ok(text) => Transcript::new(text),
            Err(TranscriptionError::Unavailable(reason)) => {
                tracing::debug!(reason = %reason, "Skipping transcription");
                Transcript::empty()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Transcription failed, continuing with empty transcript");
                Transcript::empty()
            }
        }
    }

    /// Encodes on the blocking pool, then bounds only the engine call by
    /// the transcription timeout.
    async fn try_transcribe(&self, audio: Arc<NormalizedAudio>) -> Result<String, TranscriptionError> {
        let engine = self.transcription_engine.as_ref().ok_or_else(|| {
            TranscriptionError::Unavailable("no transcription engine configured".to_string())
        })?;

        if audio.is_empty() {
            return Err(TranscriptionError::Unavailable(
                "no audio samples to transcribe".to_string(),
            ));
        }

        let wav = tokio::task::spawn_blocking(move || encode_wav(&audio))
            .await
            .map_err(|e| TranscriptionError::EncodingFailed(format!("encoder task: {}", e)))??;

        tokio::time::timeout(self.transcription_timeout, engine.transcribe(wav))
            .await
            .map_err(|_| TranscriptionError::Timeout(self.transcription_timeout))?
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Decoding(#[from] AudioDecoderError),
    #[error("analysis task failed: {0}")]
    TaskFailed(String),
}
