use std::sync::{Arc, Mutex};

use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use auralens::application::ports::{SpeechSynthesizer, SynthesisError};
use auralens::domain::Voice;
use auralens::infrastructure::audio::{OpenAiSpeechSynthesizer, SpeakerProfiles};

type Captured = Arc<Mutex<Vec<Value>>>;

async fn start_mock_speech_server(
    response_status: u16,
    response_body: &'static [u8],
) -> (String, Captured, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/audio/speech",
        post(move |Json(body): Json<Value>| async move {
            sink.lock().unwrap().push(body);
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn synthesizer(base_url: &str) -> OpenAiSpeechSynthesizer {
    OpenAiSpeechSynthesizer::new(base_url, "tts-model", "test-key", SpeakerProfiles::default())
        .unwrap()
}

#[tokio::test]
async fn given_audio_response_when_synthesizing_then_returns_bytes() {
    let (base_url, _captured, shutdown_tx) = start_mock_speech_server(200, b"RIFF....WAVE").await;

    let audio = synthesizer(&base_url)
        .synthesize("hello there", Voice::Female)
        .await
        .unwrap();

    assert_eq!(audio, &b"RIFF....WAVE"[..]);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_male_voice_when_synthesizing_then_requests_male_speaker_as_wav() {
    let (base_url, captured, shutdown_tx) = start_mock_speech_server(200, b"RIFF").await;

    synthesizer(&base_url)
        .synthesize("hello there", Voice::Male)
        .await
        .unwrap();

    let requests = captured.lock().unwrap();
    assert_eq!(requests[0]["voice"], "p317");
    assert_eq!(requests[0]["input"], "hello there");
    assert_eq!(requests[0]["response_format"], "wav");
    drop(requests);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_synthesizing_then_api_request_failed() {
    let (base_url, _captured, shutdown_tx) = start_mock_speech_server(500, b"boom").await;

    let result = synthesizer(&base_url)
        .synthesize("hello", Voice::Female)
        .await;

    assert!(matches!(result, Err(SynthesisError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_body_when_synthesizing_then_empty_audio() {
    let (base_url, _captured, shutdown_tx) = start_mock_speech_server(200, b"").await;

    let result = synthesizer(&base_url)
        .synthesize("hello", Voice::Female)
        .await;

    assert!(matches!(result, Err(SynthesisError::EmptyAudio)));
    shutdown_tx.send(()).ok();
}

#[test]
fn given_default_profiles_then_voices_map_to_distinct_speakers() {
    let speakers = SpeakerProfiles::default();

    assert_eq!(speakers.speaker_for(Voice::Female), "p270");
    assert_eq!(speakers.speaker_for(Voice::Male), "p317");
}
