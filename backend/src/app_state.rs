use std::sync::Arc;

use inferences::Classifier;

pub const DEFAULT_WELCOME_MESSAGE: &str = "Bienvenue sur l'API de prédiction Iris";

/// Context shared by all workers: the model loaded at startup and the
/// welcome text. Read-only once the server runs.
pub struct AppState {
    pub model: Arc<dyn Classifier>,
    pub welcome_message: String,
}

impl AppState {
    pub fn new(model: Arc<dyn Classifier>, welcome_message: impl Into<String>) -> Self {
        AppState {
            model,
            welcome_message: welcome_message.into(),
        }
    }

    pub fn with_default_message(model: Arc<dyn Classifier>) -> Self {
        Self::new(model, DEFAULT_WELCOME_MESSAGE)
    }
}
