use axum::{
    extract::{Query, State},
    http::{HeaderValue, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{
    errors::Result,
    models::query::{QueryPairs, StatsQuery},
    state::AppState,
};

/// Pretty printed dump of the most recent opens, newest first.
pub async fn stats(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response> {
    let limit = StatsQuery::from_pairs(&pairs).limit()?;

    let store = state.store.clone();
    let opens = tokio::task::spawn_blocking(move || store.recent(limit)).await??;
    let body = serde_json::to_string_pretty(&opens)?;

    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}
