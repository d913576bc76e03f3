//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use cet_site::{SiteRenderer, SubmissionSink};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Template renderer with the site catalog.
    pub(crate) renderer: SiteRenderer,
    /// Destination for accepted contact submissions.
    pub(crate) sink: Arc<dyn SubmissionSink>,
    /// Key signing the flash message cookie.
    pub(crate) cookie_key: Key,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

/// Error returned when the cookie signing secret is unusable.
#[derive(Debug, thiserror::Error)]
#[error("Secret key must be at least {min} bytes, got {len}")]
pub(crate) struct SecretKeyError {
    len: usize,
    min: usize,
}

/// Derive the cookie signing key from the configured secret.
pub(crate) fn cookie_key(secret: &str) -> Result<Key, SecretKeyError> {
    if secret.len() < cet_config::MIN_SECRET_KEY_LEN {
        return Err(SecretKeyError {
            len: secret.len(),
            min: cet_config::MIN_SECRET_KEY_LEN,
        });
    }
    Ok(Key::derive_from(secret.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_key_rejects_short_secret() {
        let err = cookie_key("short").unwrap_err();
        assert!(err.to_string().contains("at least 32 bytes"));
    }

    #[test]
    fn test_cookie_key_is_deterministic() {
        let secret = "s".repeat(40);
        let a = cookie_key(&secret).unwrap();
        let b = cookie_key(&secret).unwrap();
        assert_eq!(a.master(), b.master());
    }
}
