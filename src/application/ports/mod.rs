mod audio_decoder;
mod metrics_source;
mod staging_store;
mod transcription_engine;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use metrics_source::MetricsSource;
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
