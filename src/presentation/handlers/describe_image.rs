use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use serde::Serialize;
use tracing::Instrument;

use crate::domain::{DescriptionVariant, Voice, sniff_image_mime};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Debug, Serialize)]
pub struct DescribeImageResponse {
    pub description: String,
    pub audio_url: String,
    pub image_url: String,
}

#[derive(Default)]
struct DescribeImageForm {
    image: Option<(Bytes, Option<String>)>,
    speaker_type: Option<String>,
    description_type: Option<String>,
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal Server Error")),
    )
        .into_response()
}

async fn read_form(multipart: &mut Multipart) -> Result<DescribeImageForm, Response> {
    let mut form = DescribeImageForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(bad_request(format!("Failed to read multipart: {}", e)));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        let result = match name.as_str() {
            "file" => {
                let content_type = field.content_type().map(String::from);
                field
                    .bytes()
                    .await
                    .map(|data| form.image = Some((data, content_type)))
            }
            "speaker_type" => field.text().await.map(|v| form.speaker_type = Some(v)),
            "description_type" => field.text().await.map(|v| form.description_type = Some(v)),
            _ => {
                tracing::debug!(field = %name, "Ignoring unknown form field");
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::warn!(field = %name, error = %e, "Failed to read form field");
            return Err(bad_request(format!("Failed to read field {}: {}", name, e)));
        }
    }

    Ok(form)
}

fn image_data_uri(image: &[u8], declared: Option<&str>) -> String {
    let mime = declared
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or_else(|| sniff_image_mime(image));
    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(image)
    )
}

pub async fn describe_image_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some((image, content_type)) = form.image else {
        tracing::warn!("Describe request with no file");
        return bad_request("No file uploaded");
    };

    if image.is_empty() {
        return bad_request("Uploaded file is empty");
    }

    let variant_input = form.description_type.as_deref().unwrap_or_default();
    let variant = match DescriptionVariant::parse(variant_input) {
        Ok(v) => v,
        Err(e) => return bad_request(e.to_string()),
    };
    let voice = Voice::from_form(form.speaker_type.as_deref().unwrap_or_default());

    tracing::info!(
        bytes = image.len(),
        variant = %variant,
        voice = %voice,
        "Describe request received"
    );

    // Detached so a client disconnect does not abandon generation halfway;
    // the artifacts are still published for the next caller.
    let service = state.describe_service.clone();
    let task_image = image.clone();
    let outcome = tokio::spawn(
        async move { service.describe(task_image, variant, voice).await }.in_current_span(),
    )
    .await;

    match outcome {
        Ok(Ok(outcome)) => {
            tracing::info!(
                identity = %outcome.identity,
                audio = %outcome.audio.key,
                synthesized = outcome.audio.synthesized,
                "Describe request completed"
            );
            let response = DescribeImageResponse {
                audio_url: outcome.audio_url(),
                description: outcome.description,
                image_url: image_data_uri(&image, content_type.as_deref()),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, kind = e.kind(), "Describe request failed");
            internal_error()
        }
        Err(e) => {
            tracing::error!(error = %e, "Describe task aborted");
            internal_error()
        }
    }
}
