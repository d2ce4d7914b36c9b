use axum::{
    extract::{Query, State},
    http::{
        HeaderName, HeaderValue,
        header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE, EXPIRES, PRAGMA},
    },
    response::{IntoResponse, Response},
};

use crate::{
    consts::pixel_const::{NO_CACHE, NO_INDEX, PNG_1X1_TRANSPARENT, X_ROBOTS_TAG},
    errors::Result,
    middleware::RequestMeta,
    models::{
        open_event::NewOpenEvent,
        query::{PixelQuery, QueryPairs},
    },
    state::AppState,
    utils::time::time_now,
};

/// Log one open, then serve the transparent pixel. Every fetch is recorded.
pub async fn pixel(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
    meta: RequestMeta,
) -> Result<Response> {
    let query = PixelQuery::from_pairs(&pairs);

    let event = NewOpenEvent {
        user_agent: meta.user_agent,
        client_ip: meta.client_ip,
        country: meta.country,
        referer: meta.referer,
        ..NewOpenEvent::new(time_now(), query.rid, query.mid)
    };

    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.append(&event)).await??;

    Ok(pixel_response())
}

pub fn pixel_response() -> Response {
    let headers = [
        (CONTENT_TYPE, HeaderValue::from_static("image/png")),
        (CONTENT_LENGTH, HeaderValue::from(PNG_1X1_TRANSPARENT.len())),
        (CACHE_CONTROL, HeaderValue::from_static(NO_CACHE)),
        (PRAGMA, HeaderValue::from_static("no-cache")),
        (EXPIRES, HeaderValue::from_static("0")),
        (
            HeaderName::from_static(X_ROBOTS_TAG),
            HeaderValue::from_static(NO_INDEX),
        ),
    ];
    (headers, PNG_1X1_TRANSPARENT).into_response()
}
