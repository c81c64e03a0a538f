use std::sync::Arc;

use crate::application::ports::{ChatOptions, InferenceClient, InferenceError};
use crate::domain::ChatTurn;

/// Relays a validated conversation to the inference service.
pub struct ChatService<C>
where
    C: InferenceClient,
{
    client: Arc<C>,
}

impl<C> ChatService<C>
where
    C: InferenceClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn relay(
        &self,
        turns: &[ChatTurn],
        options: &ChatOptions,
    ) -> Result<String, ChatRelayError> {
        let reply = self
            .client
            .chat(turns, options)
            .await
            .map_err(ChatRelayError::Inference)?;

        tracing::debug!(turns = turns.len(), chars = reply.len(), "chat relay completed");
        Ok(reply)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatRelayError {
    #[error("inference: {0}")]
    Inference(InferenceError),
}
