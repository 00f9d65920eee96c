use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use real_estate_analyzer::config::AppConfig;
use real_estate_analyzer::inference::InferenceService;
use real_estate_analyzer::store::ModelStore;
use real_estate_analyzer::{handlers, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    let store = Arc::new(ModelStore::load(&config)?);
    let state = AppState {
        service: InferenceService::new(store),
        charts: None,
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("Starting analyzer on {}", addr);

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .with_state(state);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app.into_make_service()).await?;

    Ok(())
}
