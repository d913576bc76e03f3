//! Flash messages carried across a redirect.
//!
//! Messages are stored as percent-encoded JSON in a signed cookie. The next
//! page that displays them consumes the cookie. Cookies with a bad signature
//! are invisible to [`SignedCookieJar::get`] and therefore ignored.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use cet_site::FlashMessage;
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Name of the flash cookie.
pub(crate) const FLASH_COOKIE: &str = "cet_flash";

/// Queue a flash message for the next page view.
pub(crate) fn push(jar: SignedCookieJar, message: FlashMessage) -> SignedCookieJar {
    let mut messages = read(&jar);
    messages.push(message);

    let json = match serde_json::to_string(&messages) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode flash messages");
            return jar;
        }
    };
    let value = utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string();

    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Take all queued flash messages, clearing the cookie.
pub(crate) fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<FlashMessage>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }
    let messages = read(&jar);
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}

/// Decode queued messages without consuming them.
fn read(jar: &SignedCookieJar) -> Vec<FlashMessage> {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return Vec::new();
    };
    let decoded = percent_decode_str(cookie.value()).decode_utf8_lossy();
    serde_json::from_str(&decoded).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Discarding malformed flash cookie");
        Vec::new()
    })
}
