//! HTTP server for the Cuba Educational Travel website.
//!
//! This crate serves the site over axum:
//! - Content pages rendered by `cet-site`
//! - The contact form with flash messages in a signed cookie
//! - The webhook endpoint for third-party integrations
//! - Embedded stylesheets and scripts under `/static/`
//!
//! # Quick Start
//!
//! ```ignore
//! use cet_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 5600,
//!         secret_key: std::env::var("SECRET_KEY").unwrap(),
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► TraceLayer ──► error pages ──► CatchPanic ──► Router
//!                                                                   │
//!                                  ┌────────────────────────────────┤
//!                                  │                                │
//!                           content pages, /contact          /static/{*path}
//!                                  │                                │
//!                                  └─► SiteRenderer (cet-site)      └─► cet-assets
//! ```

mod app;
mod error;
mod flash;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use cet_catalog::Catalog;
use cet_site::{LogSink, SiteRenderer};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Secret used to sign the flash message cookie.
    pub secret_key: String,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let server = cet_config::ServerConfig::default();
        Self {
            host: server.host,
            port: server.port,
            secret_key: cet_config::DEFAULT_SECRET_KEY.to_owned(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the secret key is too short, the address is invalid,
/// or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.secret_key == cet_config::DEFAULT_SECRET_KEY {
        tracing::warn!("Using the built-in secret key; set SECRET_KEY in production");
    }

    let state = Arc::new(AppState {
        renderer: SiteRenderer::new(Catalog::builtin()),
        sink: Arc::new(LogSink),
        cookie_key: state::cookie_key(&config.secret_key)?,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a handler the server runs until killed
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from CET config.
///
/// # Arguments
///
/// * `config` - CET configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &cet_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        secret_key: config.site.secret_key.clone(),
        version,
    }
}
