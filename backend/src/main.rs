use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use log::{error, info};

use backend::{routes, AppConfig, AppState};
use inferences::IrisModel;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional, the process environment is enough
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("🚀 Démarrage de l'API de prédiction Iris");
    if dotenv_loaded {
        info!("Variables chargées depuis .env");
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("❌ {}", e);
        e
    })?;

    // Refuse to serve without a model.
    let model = IrisModel::load(&config.model_path).map_err(|e| {
        error!("❌ {}", e);
        e
    })?;
    info!("✅ Modèle ONNX chargé depuis {}", model.path().display());

    let state = web::Data::new(AppState::new(
        Arc::new(model),
        config.welcome_message.clone(),
    ));
    let max_body_bytes = config.max_body_bytes;
    let bind_address = config.bind_address();

    info!("🌐 Serveur démarré sur: http://{}", bind_address);
    info!("👷 Workers: {}", config.workers);
    info!("   GET  /         - Accueil");
    info!("   POST /predict  - Prédiction");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
