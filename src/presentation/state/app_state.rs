use std::sync::Arc;

use crate::application::ports::InferenceClient;
use crate::application::services::{AnalysisService, ChatService};
use crate::presentation::config::Settings;

pub struct AppState<C>
where
    C: InferenceClient,
{
    pub analysis_service: Arc<AnalysisService<C>>,
    pub chat_service: Arc<ChatService<C>>,
    pub settings: Settings,
}

impl<C> Clone for AppState<C>
where
    C: InferenceClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}
