use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{
    config::Config, errors::Result, routes::tracking_route::tracking_router, state::AppState,
};

pub mod config;
pub mod consts;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("open_pixel=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    // ! schema must exist before the listener accepts anything
    let state = AppState::init(&config).await?;

    info!("Starting server");

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("Serving pixel at http://{}", listener.local_addr()?);
    axum::serve(
        listener,
        app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Received shutdown signal, stopping server...");
    })
    .await?;

    Ok(())
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(tracking_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
