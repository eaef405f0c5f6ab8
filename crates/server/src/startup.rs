use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`); fall back to environment variables
/// when the file is missing or invalid.
pub fn load_config() -> AppConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            AppConfig::from_env()
        }
    }
}

/// Connect, create the `students` table if needed, and wrap it in handler state.
pub async fn build_state(cfg: &DatabaseConfig) -> anyhow::Result<ServerState> {
    cfg.validate()?;
    let db = models::db::connect_with_config(cfg).await?;
    models::db::ensure_schema(&db).await?;
    Ok(ServerState::new(db))
}

pub async fn build_app(cfg: &DatabaseConfig) -> anyhow::Result<Router> {
    let state = build_state(cfg).await?;
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg.database).await?;

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    info!(addr = %listener.local_addr()?, "student registry listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received Ctrl+C, draining connections");
        })
        .await?;
    Ok(())
}
