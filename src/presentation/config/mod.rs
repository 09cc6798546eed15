mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ENV_PREFIX, ENV_SEPARATOR, LoggingSettings, ServerSettings, Settings, StorageSettings,
    TranscriptionProviderSetting, TranscriptionSettings, UploadSettings,
};
