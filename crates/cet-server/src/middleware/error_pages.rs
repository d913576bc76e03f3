//! Themed error pages.
//!
//! Handlers and the panic catcher produce bare error responses tagged with an
//! [`ErrorPage`] extension. This middleware replaces their body with the
//! rendered error template while keeping the status code.

use std::any::Any;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use cet_site::ErrorPage;

use crate::error::ServerError;
use crate::state::AppState;

/// Render the error template for responses tagged with [`ErrorPage`].
pub(crate) async fn render_error_pages(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    let Some(page) = response.extensions().get::<ErrorPage>().copied() else {
        return response;
    };

    match state.renderer.render_error(page) {
        Ok(html) => (response.status(), Html(html)).into_response(),
        Err(e) => {
            // Fall back to the plain status text
            tracing::error!(error = %e, "Failed to render error page");
            response
        }
    }
}

/// Convert a handler panic into a 500 response.
pub(crate) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };
    ServerError::Panic(detail).into_response()
}
