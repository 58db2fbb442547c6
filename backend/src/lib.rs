//! HTTP front of the Iris classifier: validation, routing and error mapping.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod validation;

pub use app_state::AppState;
pub use config::AppConfig;
pub use error::ApiError;
