use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;

use speakwell::application::ports::{TranscriptionEngine, TranscriptionError};
use speakwell::application::services::encode_wav;
use speakwell::domain::NormalizedAudio;
use speakwell::infrastructure::audio::AzureWhisperEngine;

#[derive(Clone, Default)]
struct Captured {
    api_key: Arc<Mutex<Option<String>>>,
    api_version: Arc<Mutex<Option<String>>>,
}

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn half_second_of_wav() -> Vec<u8> {
    encode_wav(&NormalizedAudio::new(vec![0.05; 8_000], 16_000)).unwrap()
}

#[tokio::test]
async fn given_deployment_endpoint_when_transcribing_then_json_text_is_returned() {
    let captured = Captured::default();
    let router = Router::new()
        .route(
            "/openai/deployments/whisper/audio/transcriptions",
            post(
                |State(captured): State<Captured>,
                 Query(query): Query<HashMap<String, String>>,
                 headers: HeaderMap,
                 _body: Bytes| async move {
                    *captured.api_key.lock().unwrap() = headers
                        .get("api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *captured.api_version.lock().unwrap() = query.get("api-version").cloned();
                    Json(serde_json::json!({ "text": " I like drawing cats. " }))
                },
            ),
        )
        .with_state(captured.clone());
    let addr = spawn_server(router).await;

    let engine = AzureWhisperEngine::new(
        &format!("http://{}/", addr),
        "whisper",
        "azure-key",
        "2024-06-01",
        Duration::from_secs(5),
    )
    .unwrap();

    let text = engine.transcribe(half_second_of_wav()).await.unwrap();

    assert_eq!(text, "I like drawing cats.");
    assert_eq!(captured.api_key.lock().unwrap().as_deref(), Some("azure-key"));
    assert_eq!(
        captured.api_version.lock().unwrap().as_deref(),
        Some("2024-06-01")
    );
}

#[tokio::test]
async fn given_malformed_json_when_transcribing_then_invalid_response_is_reported() {
    let router = Router::new().route(
        "/openai/deployments/whisper/audio/transcriptions",
        post(|_body: Bytes| async { Json(serde_json::json!({ "transcript": "wrong field" })) }),
    );
    let addr = spawn_server(router).await;

    let engine = AzureWhisperEngine::new(
        &format!("http://{}", addr),
        "whisper",
        "azure-key",
        "2024-06-01",
        Duration::from_secs(5),
    )
    .unwrap();

    let result = engine.transcribe(half_second_of_wav()).await;

    assert!(matches!(result, Err(TranscriptionError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_server_error_when_transcribing_then_request_failure_is_reported() {
    let router = Router::new().route(
        "/openai/deployments/whisper/audio/transcriptions",
        post(|_body: Bytes| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded").into_response() }),
    );
    let addr = spawn_server(router).await;

    let engine = AzureWhisperEngine::new(
        &format!("http://{}", addr),
        "whisper",
        "azure-key",
        "2024-06-01",
        Duration::from_secs(5),
    )
    .unwrap();

    let result = engine.transcribe(half_second_of_wav()).await;

    match result {
        Err(TranscriptionError::ApiRequestFailed(message)) => assert!(message.contains("503")),
        other => panic!("expected request failure, got {:?}", other),
    }
}
