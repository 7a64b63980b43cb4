mod catalog;
mod config;
mod error;
mod recommend;
mod router;
mod state;

use std::sync::Arc;

use axum::serve;
use tracing::{Level, info};

use crate::config::Config;
use crate::router::router;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::load(&config)?);

    info!(
        locations = state.campus.campus().locations().len(),
        stations = state.subway.network().stations().len(),
        "loaded networks"
    );

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("listening on {}", config.addr);

    serve(listener, app).await?;

    Ok(())
}
