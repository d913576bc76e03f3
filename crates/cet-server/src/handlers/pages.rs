//! Content page handlers.
//!
//! Each content route in the route table gets a GET handler that renders its
//! template. Responses carry an `ETag` so browsers can revalidate cheaply.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use cet_site::Route;

use crate::error::ServerError;
use crate::handlers::compute_etag;
use crate::state::AppState;

/// Build the GET handler for a content page route.
pub(crate) fn page_handler(route: &'static Route) -> MethodRouter<Arc<AppState>> {
    get(move |State(state): State<Arc<AppState>>, headers: HeaderMap| async move {
        render_page(&state, route, &headers)
    })
}

/// Render a content page, honoring `If-None-Match`.
fn render_page(
    state: &AppState,
    route: &Route,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let html = state.renderer.render_page(route)?;
    let etag = compute_etag(&state.version, html.as_bytes());

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "public, max-age=60".to_owned()),
        ],
        Html(html),
    )
        .into_response())
}
