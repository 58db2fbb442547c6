use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::Value;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::{PredictionRequest, PredictionResponse, WelcomeResponse};

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: state.welcome_message.clone(),
    })
}

#[post("/predict")]
pub async fn predict(
    state: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let body = body.map_err(reject_payload)?;
    let payload = decode_body(&body)?;

    let request = PredictionRequest::try_from(&payload).map_err(|e| {
        warn!("Validation échouée: {}", e);
        e
    })?;

    let model = state.model.clone();
    let features = request.features;
    let prediction = web::block(move || model.predict(&features))
        .await
        .map_err(|e| {
            error!("Erreur d'exécution bloquante: {}", e);
            ApiError::Internal
        })??;

    info!("Prédiction réussie: {:?} -> {}", features.as_slice(), prediction);
    Ok(HttpResponse::Ok().json(PredictionResponse { prediction }))
}

// The extractor's own errors are plain text; keep every answer JSON.
fn reject_payload(err: actix_web::Error) -> ApiError {
    warn!("Corps de requête refusé: {}", err);
    if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::MalformedBody
    }
}

// An empty body decodes as `null` so the validator reports the missing key.
fn decode_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| {
        warn!("Corps JSON invalide: {}", e);
        ApiError::MalformedBody
    })
}

async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(predict)
        .default_service(web::route().to(not_found));
}
