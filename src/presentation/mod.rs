pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use config::{
    Environment, LoggingSettings, ServerSettings, Settings, StorageSettings,
    TranscriptionProviderSetting, TranscriptionSettings, UploadSettings,
};
pub use router::create_router;
pub use state::AppState;
