//! Routes, page rendering and contact intake for the CET website.
//!
//! This crate provides:
//! - [`routes`]: the endpoint table and `url_for` resolution
//! - [`SiteRenderer`]: template rendering with the [`GlobalContext`]
//! - [`ContactForm`]: contact form validation and flash messages
//!
//! It has no HTTP dependency; `cet-server` maps requests onto it.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cet_catalog::Catalog;
//! use cet_site::{SiteRenderer, routes};
//!
//! let renderer = SiteRenderer::new(Catalog::builtin());
//! let faqs = routes::route("resources_faqs").unwrap();
//! let html = renderer.render_page(faqs)?;
//! # Ok(())
//! # }
//! ```

pub mod contact;
mod context;
mod renderer;
pub mod routes;

pub use contact::{
    ContactError, ContactForm, ContactSubmission, FlashCategory, FlashMessage, LogSink, SinkError,
    SubmissionSink,
};
pub use context::{GlobalContext, PageVars};
pub use renderer::{ErrorPage, RenderError, SiteRenderer};
pub use routes::{Method, PageLocals, Route, RouteKind, UrlError, url_for};
