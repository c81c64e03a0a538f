use async_trait::async_trait;

use crate::domain::ChatTurn;

/// Per-request overrides for conversational generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
    pub system_instruction: Option<String>,
}

/// Seam to the external generative-AI service.
///
/// Implementations own transport concerns (encoding, authentication,
/// timeouts) and return the model's text output verbatim; interpreting
/// that text is the caller's job.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Submits an audio payload plus instructions, asking the service
    /// to constrain its output to JSON-formatted text.
    async fn analyze_audio(
        &self,
        instructions: &str,
        content_type: &str,
        audio: &[u8],
    ) -> Result<String, InferenceError>;

    /// Forwards a multi-turn conversation and returns the model's
    /// free-text reply.
    async fn chat(&self, turns: &[ChatTurn], options: &ChatOptions)
        -> Result<String, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited by inference service")]
    RateLimited,
    #[error("inference request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
