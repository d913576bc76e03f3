//! Webhook endpoint.
//!
//! Placeholder for third-party integrations: accepts any GET or POST and
//! acknowledges it without reading the request.

use axum::Json;
use serde::Serialize;

/// Response for the webhook endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct WebhookAck {
    status: &'static str,
}

/// Handle GET/POST /webhooks/webhook.
pub(crate) async fn handle_webhook() -> Json<WebhookAck> {
    Json(WebhookAck { status: "success" })
}
