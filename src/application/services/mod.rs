mod analysis_service;
mod chat_service;
pub mod prompt_catalog;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use chat_service::{ChatRelayError, ChatService};
