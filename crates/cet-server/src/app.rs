//! Router construction.
//!
//! Mounts every endpoint of the route table plus static assets, then wraps
//! the whole router in request tracing, panic recovery and themed error
//! pages.

use std::sync::Arc;

use axum::Router;
use axum::routing::{MethodFilter, get, on};
use cet_site::routes::{self, Method, RouteKind};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::error_pages;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    with_fault_handling(site_routes(), state)
}

/// Routes from the route table and static assets, without middleware.
fn site_routes() -> Router<Arc<AppState>> {
    let mut router = Router::new();

    for route in routes::ROUTES {
        let handler = match route.kind {
            RouteKind::Page { .. } => handlers::pages::page_handler(route),
            RouteKind::Contact => get(handlers::contact::show_contact)
                .post(handlers::contact::submit_contact),
            RouteKind::Webhook => on(
                method_filter(route.methods),
                handlers::webhook::handle_webhook,
            ),
        };
        router = router.route(route.path, handler);
    }

    router.merge(static_files::static_router())
}

/// Add the 404 fallback and the middleware stack.
fn with_fault_handling(router: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    router
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn_with_state(
                    Arc::clone(&state),
                    error_pages::render_error_pages,
                ))
                .layer(CatchPanicLayer::custom(error_pages::panic_response)),
        )
        .with_state(state)
}

fn method_filter(methods: &[Method]) -> MethodFilter {
    methods
        .iter()
        .map(|method| match method {
            Method::Get => MethodFilter::GET,
            Method::Post => MethodFilter::POST,
        })
        .reduce(MethodFilter::or)
        .unwrap_or(MethodFilter::GET)
}
