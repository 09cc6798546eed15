use std::sync::Arc;

use tokio::net::TcpListener;

use speakwell::application::services::{
    AnalysisService, FeedbackGenerator, FeedbackTemplate, MetricsExtractor,
};
use speakwell::infrastructure::audio::{SymphoniaAudioDecoder, TranscriptionEngineFactory};
use speakwell::infrastructure::observability::{TracingConfig, init_tracing};
use speakwell::infrastructure::storage::LocalStagingStore;
use speakwell::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let staging_store = Arc::new(LocalStagingStore::new(
        settings.storage.upload_dir.clone(),
    )?);

    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription)?;

    let analysis_service = Arc::new(AnalysisService::new(
        Arc::new(SymphoniaAudioDecoder),
        transcription_engine,
        Arc::new(MetricsExtractor::new(settings.metrics)),
        FeedbackGenerator::new(settings.rubric.clone(), FeedbackTemplate::default()),
        settings.transcription.timeout(),
    ));

    let upload_dir = staging_store.base_path().display().to_string();

    let state = AppState {
        analysis_service,
        staging_store,
        upload_settings: settings.upload.clone(),
    };

    let router = create_router(state);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        upload_dir = %upload_dir,
        provider = ?settings.transcription.provider,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
