//! End-to-end tests of the HTTP providers against a local stub server.

use adapt_core::{
    ImageGenerator, ProviderError, ReasoningEngine, SpeechSynthesizer, SummaryLength, Summarizer,
    Transcriber,
};
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use llm_providers::{ChatEngine, HttpImageGenerator, HttpSpeech, HttpTranscriber, LlmConfig};
use serde_json::{json, Value};

const API_KEY: &str = "test-key";

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config(url: &str) -> LlmConfig {
    LlmConfig::builder().api_key(API_KEY).api_url(url).build()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", API_KEY))
        .unwrap_or(false)
}

async fn chat(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "Invalid API key"}})),
        );
    }

    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    let content = if prompt.contains("summarization engine") {
        "  A short summary of the page.  "
    } else {
        "```json\n{\"mode\": \"apply\"}\n```"
    };

    (
        StatusCode::OK,
        Json(json!({
            "model": body["model"],
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        })),
    )
}

#[tokio::test]
async fn test_reasoning_returns_raw_content() {
    let url = spawn(Router::new().route("/v1/chat/completions", post(chat))).await;
    let engine = ChatEngine::new(config(&url)).unwrap();

    let raw = engine.reason("decide").await.unwrap();
    assert_eq!(raw, "```json\n{\"mode\": \"apply\"}\n```");
}

#[tokio::test]
async fn test_summary_is_trimmed() {
    let url = spawn(Router::new().route("/v1/chat/completions", post(chat))).await;
    let engine = ChatEngine::new(config(&url)).unwrap();

    let summary = engine
        .summarize("A long page about cells.", SummaryLength::Medium)
        .await
        .unwrap();
    assert_eq!(summary, "A short summary of the page.");
}

#[tokio::test]
async fn test_error_statuses_mapped() {
    let url = spawn(
        Router::new()
            .route("/v1/chat/completions", post(chat))
            .route(
                "/v1/audio/speech",
                post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
            ),
    )
    .await;

    let bad_key = LlmConfig::builder().api_key("wrong").api_url(&url).build();
    let err = ChatEngine::new(bad_key).unwrap().reason("x").await.unwrap_err();
    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }

    let err = HttpSpeech::new(config(&url))
        .unwrap()
        .synthesize("hello")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::RateLimited(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let engine = ChatEngine::new(config("http://127.0.0.1:1")).unwrap();
    let err = engine.reason("x").await.unwrap_err();
    assert!(matches!(err, ProviderError::Network(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_transcription_uploads_audio() {
    let url = spawn(Router::new().route(
        "/v1/audio/transcriptions",
        post(|body: Bytes| async move {
            let form = String::from_utf8_lossy(&body);
            assert!(form.contains("whisper-1"));
            assert!(form.contains("audio.wav"));
            Json(json!({"text": " summarize this page "}))
        }),
    ))
    .await;

    let transcriber = HttpTranscriber::new(config(&url)).unwrap();
    let text = transcriber
        .transcribe("data:audio/wav;base64,UklGRg")
        .await
        .unwrap();
    assert_eq!(text, "summarize this page");

    // Empty audio never reaches the server.
    assert_eq!(transcriber.transcribe("").await.unwrap(), "");
}

#[tokio::test]
async fn test_speech_is_base64_encoded() {
    let url = spawn(Router::new().route(
        "/v1/audio/speech",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["response_format"], "wav");
            assert_eq!(body["input"], "Read this aloud.");
            b"RIFF....WAVE".to_vec()
        }),
    ))
    .await;

    let audio = HttpSpeech::new(config(&url))
        .unwrap()
        .synthesize("Read this aloud.")
        .await
        .unwrap();
    assert_eq!(audio.audio_format, "wav");
    assert_eq!(STANDARD.decode(audio.audio_base64).unwrap(), b"RIFF....WAVE");
}

#[tokio::test]
async fn test_empty_speech_is_empty_output() {
    let url = spawn(Router::new().route(
        "/v1/audio/speech",
        post(|| async { Vec::<u8>::new() }),
    ))
    .await;

    let err = HttpSpeech::new(config(&url))
        .unwrap()
        .synthesize("hello")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::EmptyOutput));
}

#[tokio::test]
async fn test_image_generation() {
    let url = spawn(Router::new().route(
        "/v1/images/generations",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["model"], "painter");
            assert_eq!(body["response_format"], "b64_json");
            Json(json!({"data": [{"b64_json": "aW1hZ2U="}]}))
        }),
    ))
    .await;

    let generator = HttpImageGenerator::new(config(&url), "painter").unwrap();
    let image = generator.generate("Cells divide.").await.unwrap();
    assert_eq!(image.image_base64, "aW1hZ2U=");
}
