use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatOptions, InferenceClient, InferenceError};
use crate::domain::ChatTurn;

const JSON_MIME: &str = "application/json";

/// Adapter for the Gemini `generateContent` REST surface.
///
/// The base URL is injectable so tests can point the client at a local
/// server. Every request carries the configured timeout; a hung
/// upstream call fails the request instead of pinning it.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, InferenceError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout
                } else {
                    InferenceError::ApiRequestFailed(e.to_string())
                }
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(InferenceError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        body.first_candidate_text()
            .ok_or_else(|| InferenceError::InvalidResponse("no candidate text".to_string()))
    }
}

#[async_trait]
impl InferenceClient for GeminiClient {
    async fn analyze_audio(
        &self,
        instructions: &str,
        content_type: &str,
        audio: &[u8],
    ) -> Result<String, InferenceError> {
        let encoded = general_purpose::STANDARD.encode(audio);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(instructions), Part::inline(content_type, encoded)],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: Some(JSON_MIME.to_string()),
                temperature: None,
            }),
        };

        tracing::debug!(
            model = %self.model,
            content_type = %content_type,
            bytes = audio.len(),
            "sending audio to Gemini"
        );

        self.generate(&request).await
    }

    async fn chat(
        &self,
        turns: &[ChatTurn],
        options: &ChatOptions,
    ) -> Result<String, InferenceError> {
        let contents = turns
            .iter()
            .map(|turn| Content {
                role: Some(turn.role.as_str().to_string()),
                parts: vec![Part::text(&turn.text)],
            })
            .collect();

        let request = GenerateContentRequest {
            contents,
            system_instruction: options.system_instruction.as_deref().map(|text| Content {
                role: None,
                parts: vec![Part::text(text)],
            }),
            generation_config: options.temperature.map(|temperature| GenerationConfig {
                response_mime_type: None,
                temperature: Some(temperature),
            }),
        };

        tracing::debug!(model = %self.model, turns = turns.len(), "sending conversation to Gemini");

        self.generate(&request).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline(content_type: &str, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: content_type.to_string(),
                data,
            }),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}
