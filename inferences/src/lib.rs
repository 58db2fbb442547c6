//! Iris species classifier.
//!
//! Loads an ONNX classifier with tract-onnx and exposes it behind the
//! [`Classifier`] trait so the HTTP layer can share it read-only.

pub mod inference;
pub mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use inference::IrisModel;
pub use types::{Features, FEATURE_COUNT};

/// Errors raised while loading the model artifact at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Le modèle Iris n'a pas été trouvé : {}", .0.display())]
    NotFound(PathBuf),
    #[error("Le modèle Iris est illisible ({}) : {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Errors raised by a single prediction.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The model refuses the values it was given.
    #[error("entrée refusée par le modèle : {0}")]
    InvalidInput(String),
    #[error("échec de l'inférence : {0}")]
    Internal(#[from] anyhow::Error),
}

/// A pre-trained classifier mapping one feature vector to a class index.
///
/// Implementations are loaded once and shared between requests, so
/// `predict` must not mutate any state.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &Features) -> Result<i64, PredictError>;
}
