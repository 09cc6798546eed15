use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{MetricsConfig, RubricConfig};

use super::Environment;

pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub upload: UploadSettings,
    pub transcription: TranscriptionSettings,
    pub metrics: MetricsConfig,
    pub rubric: RubricConfig,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml` if present, then `APP__*`
    /// environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(File::with_name(&environment.settings_file()).required(false))
                .add_source(
                    config::Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator(ENV_SEPARATOR)
                        .separator(ENV_SEPARATOR),
                ),
        )
    }

    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.max_file_size_mb == 0 {
            return Err(ConfigError::Message(
                "upload.max_file_size_mb must be greater than zero".to_string(),
            ));
        }
        if self.transcription.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "transcription.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.metrics.min_silence_ms == 0 || self.metrics.seek_step_ms == 0 {
            return Err(ConfigError::Message(
                "metrics.min_silence_ms and metrics.seek_step_ms must be greater than zero"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub upload_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            upload_dir: std::env::temp_dir().join("speakwell-uploads"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_body_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[default]
    Disabled,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub timeout_secs: u64,
}

impl TranscriptionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: TranscriptionProviderSetting::Disabled,
            api_key: None,
            base_url: None,
            model: None,
            azure_deployment: None,
            azure_api_version: "2024-06-01".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,speakwell=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}
