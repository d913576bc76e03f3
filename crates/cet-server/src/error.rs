//! Server error type.
//!
//! Errors render as plain responses tagged with an [`ErrorPage`] extension;
//! the error page middleware swaps the body for the site's themed page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cet_site::{ErrorPage, RenderError, SinkError, UrlError};

/// Request handling error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Url(#[from] UrlError),

    #[error("Failed to store contact submission: {0}")]
    Sink(SinkError),

    #[error("Handler panicked: {0}")]
    Panic(String),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Render(_) | Self::Url(_) | Self::Sink(_) | Self::Panic(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self, "Not found");
            ErrorPage::NotFound
        } else {
            tracing::error!(error = %self, "Request failed");
            ErrorPage::InternalError
        };

        let mut response = (status, status.canonical_reason().unwrap_or_default()).into_response();
        response.extensions_mut().insert(page);
        response
    }
}
