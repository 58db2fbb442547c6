use inferences::Features;
use serde::{Deserialize, Serialize};

/// Body of `POST /predict` once it has passed validation.
///
/// Built from the decoded JSON through [`crate::validation::validate`];
/// fields other than `features` are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub features: Features,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub prediction: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WelcomeResponse {
    pub message: String,
}
