use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::InferenceClient;
use crate::domain::{AudioAsset, Locale};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

const NO_AUDIO_MESSAGE: &str = "No audio file uploaded.";
const EMPTY_AUDIO_MESSAGE: &str = "Uploaded audio file is empty.";

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

struct UploadedAudio {
    bytes: Vec<u8>,
    declared_type: Option<String>,
    filename: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<C>(
    State(state): State<AppState<C>>,
    mut multipart: Multipart,
) -> Response
where
    C: InferenceClient + 'static,
{
    let mut audio: Option<UploadedAudio> = None;
    let mut region: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read multipart body");
                return bad_request(format!("Failed to read multipart body: {}", e));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let filename = field.file_name().map(str::to_string);
                let declared_type = field.content_type().map(str::to_string);
                match field.bytes().await {
                    Ok(data) => {
                        audio = Some(UploadedAudio {
                            bytes: data.to_vec(),
                            declared_type,
                            filename,
                        });
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read audio field");
                        return bad_request(format!("Failed to read audio field: {}", e));
                    }
                }
            }
            Some("region") => {
                region = field.text().await.ok();
            }
            _ => {}
        }
    }

    let Some(upload) = audio else {
        tracing::warn!("analyze request without audio field");
        return bad_request(NO_AUDIO_MESSAGE.to_string());
    };

    let asset = match AudioAsset::new(upload.bytes, upload.declared_type, upload.filename) {
        Ok(asset) => asset,
        Err(e) => {
            tracing::warn!(error = %e, "analyze request with empty audio field");
            return bad_request(EMPTY_AUDIO_MESSAGE.to_string());
        }
    };

    let locale = Locale::parse(region.as_deref());

    tracing::debug!(
        filename = %sanitize_for_log(asset.filename.as_deref().unwrap_or("unknown")),
        locale = %locale,
        bytes = asset.bytes.len(),
        "processing audio upload"
    );

    match state.analysis_service.analyze(&asset, locale).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "audio classification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(MessageResponse { message })).into_response()
}
