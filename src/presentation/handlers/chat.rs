use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatOptions, InferenceClient};
use crate::domain::{ChatRole, ChatTurn};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub conversation: Vec<ConversationTurn>,
    #[serde(default)]
    pub config: Option<ChatConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    #[serde(alias = "content")]
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConfig {
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub system_instruction: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub result: String,
}

#[derive(Serialize)]
pub struct ChatErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<C>(
    State(state): State<AppState<C>>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Response
where
    C: InferenceClient + 'static,
{
    // Malformed payloads answer 400 with the error shape, never the
    // extractor's plain-text 422.
    let Json(request) = match request {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "malformed chat payload");
            return bad_request(format!("Invalid request body: {}", rejection.body_text()));
        }
    };

    if request.conversation.is_empty() {
        tracing::warn!("chat request with empty conversation");
        return bad_request("Conversation must not be empty.".to_string());
    }

    let mut turns = Vec::with_capacity(request.conversation.len());
    for entry in &request.conversation {
        match entry.role.parse::<ChatRole>() {
            Ok(role) => turns.push(ChatTurn::new(role, entry.text.clone())),
            Err(reason) => {
                tracing::warn!(role = %entry.role, "chat request with unknown role");
                return bad_request(reason);
            }
        }
    }

    // The service generates from the conversation tail, so the caller
    // must speak last.
    if turns.last().map(|turn| turn.role) != Some(ChatRole::User) {
        tracing::warn!("chat request not ending with a user turn");
        return bad_request("Conversation must end with a user turn.".to_string());
    }

    let options = request
        .config
        .map(|config| ChatOptions {
            temperature: config.temperature,
            system_instruction: config.system_instruction,
        })
        .unwrap_or_default();

    if let Some(last) = turns.last() {
        tracing::debug!(prompt = %sanitize_for_log(&last.text), "processing chat request");
    }

    match state.chat_service.relay(&turns, &options).await {
        Ok(result) => (StatusCode::OK, Json(ChatResponse { result })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "chat relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ChatErrorResponse { error })).into_response()
}
