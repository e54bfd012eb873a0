use std::sync::Arc;

use crate::config::Config;
use crate::gemini::GeminiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: Config, gemini: GeminiClient) -> Self {
        Self {
            config: Arc::new(config),
            gemini,
        }
    }
}
