use std::sync::Arc;

use crate::application::ports::{InferenceClient, InferenceError};
use crate::application::services::prompt_catalog;
use crate::domain::{AnalysisOutcome, AudioAsset, Locale};

/// The classification pipeline: resolve the content type, select the
/// locale's instruction template, invoke the inference service, and
/// normalize its text output.
///
/// Stateless; one pass per request, no retries.
pub struct AnalysisService<C>
where
    C: InferenceClient,
{
    client: Arc<C>,
}

impl<C> AnalysisService<C>
where
    C: InferenceClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn analyze(
        &self,
        asset: &AudioAsset,
        locale: Locale,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let content_type = asset.resolve_content_type();
        let instructions = prompt_catalog::instruction_template(locale);

        tracing::debug!(
            content_type = %content_type,
            locale = %locale,
            bytes = asset.bytes.len(),
            "submitting audio for classification"
        );

        let text = self
            .client
            .analyze_audio(instructions, &content_type, &asset.bytes)
            .await
            .map_err(AnalysisError::Inference)?;

        let outcome = AnalysisOutcome::from_model_text(&text);
        if !outcome.is_structured() {
            tracing::warn!(chars = text.len(), "model output was not schema-shaped JSON");
        }

        Ok(outcome)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("inference: {0}")]
    Inference(InferenceError),
}
