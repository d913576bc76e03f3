//! Static file serving.
//!
//! Serves stylesheets and scripts embedded by `cet-assets` under `/static/`.
//! Unknown files fall through to the themed 404 page.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use cet_site::routes::STATIC_PREFIX;

use crate::error::ServerError;
use crate::handlers::compute_etag;
use crate::state::AppState;

/// Create router for static assets.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route(&format!("{STATIC_PREFIX}/{{*path}}"), get(serve_asset))
}

/// Serve an embedded asset.
async fn serve_asset(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let Some(content) = cet_assets::get(&path) else {
        return Err(ServerError::NotFound(format!("{STATIC_PREFIX}/{path}")));
    };

    let etag = compute_etag(&state.version, &content);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, cet_assets::mime_for(&path)),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "public, max-age=3600".to_owned()),
        ],
        content.into_owned(),
    )
        .into_response())
}
