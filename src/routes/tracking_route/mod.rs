use axum::{Router, routing::get};

use crate::{
    routes::tracking_route::{pixel::pixel, stats::stats},
    state::AppState,
};

pub mod pixel;
pub mod stats;

pub fn tracking_router(config: AppState) -> Router<AppState> {
    Router::new()
        .route("/pixel.png", get(pixel))
        .route("/stats", get(stats))
        .with_state(config)
}
