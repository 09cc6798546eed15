use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// Builds the configured engine. A missing credential or endpoint yields
    /// `Ok(None)`: the pipeline then runs exactly as if the service had failed.
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Option<Arc<dyn TranscriptionEngine>>, TranscriptionError> {
        let timeout = settings.timeout();

        match settings.provider {
            TranscriptionProviderSetting::Disabled => {
                tracing::info!("Transcription disabled");
                Ok(None)
            }
            TranscriptionProviderSetting::OpenAi => {
                let Some(api_key) = non_empty(settings.api_key.as_deref()) else {
                    tracing::warn!("OpenAI transcription selected but no api_key configured");
                    return Ok(None);
                };
                let engine = OpenAiWhisperEngine::new(
                    api_key.to_string(),
                    settings.base_url.clone(),
                    settings.model.clone(),
                    timeout,
                )?;
                Ok(Some(Arc::new(engine)))
            }
            TranscriptionProviderSetting::Azure => {
                let Some(api_key) = non_empty(settings.api_key.as_deref()) else {
                    tracing::warn!("Azure transcription selected but no api_key configured");
                    return Ok(None);
                };
                let (Some(base_url), Some(deployment)) = (
                    non_empty(settings.base_url.as_deref()),
                    non_empty(settings.azure_deployment.as_deref()),
                ) else {
                    tracing::warn!("Azure transcription requires base_url and azure_deployment");
                    return Ok(None);
                };
                let engine = AzureWhisperEngine::new(
                    base_url,
                    deployment,
                    api_key,
                    &settings.azure_api_version,
                    timeout,
                )?;
                Ok(Some(Arc::new(engine)))
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
