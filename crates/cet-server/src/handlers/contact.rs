//! Contact form handlers.
//!
//! A valid POST is handed to the submission sink and redirected back to the
//! form with a success flash. An invalid POST re-renders the form directly
//! with an error flash and nothing is stored. Bodies that are not form data
//! count as an empty form.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use cet_site::{ContactForm, FlashMessage};

use crate::error::ServerError;
use crate::flash;
use crate::state::AppState;

/// Handle GET /contact.
///
/// Shows any pending flash messages once and clears them.
pub(crate) async fn show_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());
    let (jar, flashes) = flash::take(jar);
    render_form(&state, jar, &flashes)
}

/// Handle POST /contact.
pub(crate) async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ServerError> {
    let form = if is_form_body(&headers) {
        ContactForm::from_urlencoded(&body)
    } else {
        ContactForm::default()
    };
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone());

    match form.validate() {
        Ok(submission) => {
            state.sink.store(&submission).map_err(ServerError::Sink)?;
            let jar = flash::push(jar, submission.acknowledgement());
            Ok((jar, Redirect::to(cet_site::url_for("contact")?)).into_response())
        }
        Err(err) => {
            tracing::debug!(error = %err, "Contact form rejected");
            let (jar, mut flashes) = flash::take(jar);
            flashes.push(err.flash());
            render_form(&state, jar, &flashes)
        }
    }
}

/// Whether the request declares a urlencoded form body.
fn is_form_body(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

fn render_form(
    state: &AppState,
    jar: SignedCookieJar,
    flashes: &[FlashMessage],
) -> Result<Response, ServerError> {
    let html = state.renderer.render_contact(flashes)?;
    Ok((jar, [(header::CACHE_CONTROL, "no-store")], Html(html)).into_response())
}
