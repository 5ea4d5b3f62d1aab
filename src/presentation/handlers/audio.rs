use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::Instrument;

use crate::presentation::state::AppState;

use super::ErrorResponse;

/// Serves a synthesized clip, regenerating it once if the file has gone
/// missing. Responses are never cacheable: the same URL may be rewritten.
#[tracing::instrument(skip(state))]
pub async fn audio_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    let resolver = state.audio_resolver.clone();
    let name = filename.clone();
    let served = tokio::spawn(
        async move { resolver.fetch_for_serving(&name).await }.in_current_span(),
    )
    .await;

    let failure = match served {
        Ok(Ok(audio)) => {
            tracing::debug!(
                bytes = audio.bytes.len(),
                regenerated = audio.regenerated,
                "Serving audio"
            );
            return (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "audio/wav"),
                    (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
                    (header::PRAGMA, "no-cache"),
                    (header::EXPIRES, "0"),
                ],
                audio.bytes,
            )
                .into_response();
        }
        Ok(Err(e)) => format!("{} ({})", e, e.kind()),
        Err(e) => e.to_string(),
    };

    tracing::warn!(error = %failure, "Audio unavailable");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!(
            "Audio file {} not found and could not be regenerated.",
            filename
        ))),
    )
        .into_response()
}
