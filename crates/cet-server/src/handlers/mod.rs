//! HTTP request handlers.

pub(crate) mod contact;
pub(crate) mod pages;
pub(crate) mod webhook;

use axum::http::Uri;
use md5::{Digest, Md5};

use crate::error::ServerError;

/// Fallback for unmatched paths.
pub(crate) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_owned())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
pub(crate) fn compute_etag(version: &str, content: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(version.as_bytes());
    hasher.update(b":");
    hasher.update(content);
    format!("\"{}\"", &hex::encode(hasher.finalize())[..16])
}
