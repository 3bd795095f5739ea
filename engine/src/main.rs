// Server entry point
use engine::config::settings::AppSettings;
use engine::error::EngineError;
use engine::services::web::{self, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    info!("Starting Fábrica de Ferramentas...");

    let settings = AppSettings::from_env()?;
    let addr = format!("{}:{}", settings.host, settings.port);
    info!(site_name = %settings.site_name, "Server will listen on {}", addr);

    let state = AppState {
        settings: Arc::new(settings),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, web::router(state)).await?;

    Ok(())
}
