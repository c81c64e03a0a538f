use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Structured classification of an audio clip, as dictated to the
/// inference service by the instruction templates.
///
/// `confidence` is on a 0-100 scale, kept as a [`Number`] so the value
/// reaches the caller exactly as the model wrote it (an integer `87`
/// stays `87`, not `87.0`). `cause` is an open vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryAnalysis {
    pub is_baby_cry: bool,
    pub cause: String,
    pub confidence: Number,
    pub actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Normalized model output: either the expected structured record or
/// the raw text when the model answered outside the schema.
///
/// Serialized untagged so the two wire shapes stay distinct for
/// callers (`{...}` vs `{"raw": "..."}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Structured(CryAnalysis),
    Raw { raw: String },
}

impl AnalysisOutcome {
    /// Strict typed parse of the model's text output, degrading to the
    /// raw envelope on any mismatch. Never fails: an informal answer is
    /// still an answer.
    pub fn from_model_text(text: &str) -> Self {
        match serde_json::from_str::<CryAnalysis>(text) {
            Ok(analysis) => AnalysisOutcome::Structured(analysis),
            Err(_) => AnalysisOutcome::Raw {
                raw: text.to_string(),
            },
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, AnalysisOutcome::Structured(_))
    }
}
