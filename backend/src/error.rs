use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use inferences::PredictError;
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::validation::ValidationError;

/// Every failure a request can end with. Status codes are decided here only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Le corps de la requête doit être un JSON valide.")]
    MalformedBody,
    #[error("Le corps de la requête est trop volumineux.")]
    PayloadTooLarge,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Données d'entrée invalides pour le modèle : {0}")]
    ModelInput(String),
    #[error("Erreur interne du serveur")]
    Internal,
    #[error("Endpoint non trouvé")]
    NotFound,
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::InvalidInput(detail) => ApiError::ModelInput(detail),
            PredictError::Internal(e) => {
                log::error!("Erreur de prédiction: {:#}", e);
                ApiError::Internal
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody | ApiError::Validation(_) | ApiError::ModelInput(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}
