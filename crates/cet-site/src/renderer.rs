//! Template rendering.
//!
//! [`SiteRenderer`] owns the `minijinja` environment. Templates come from the
//! embedded asset set and are compiled lazily on first use. Every render
//! receives the [`GlobalContext`] merged with the page's own variables.

use cet_catalog::Catalog;
use minijinja::value::{Kwargs, Value};
use minijinja::{Environment, ErrorKind};

use crate::contact::FlashMessage;
use crate::context::{GlobalContext, PageVars, RenderContext};
use crate::routes::{self, CONTACT_TEMPLATE, PageLocals, Route, STATIC_ENDPOINT};

/// Error returned when rendering a page fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template does not exist in the asset set.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
    /// Route does not render a content page.
    #[error("Route {0} is not a content page")]
    NotAPage(&'static str),
    /// Template failed to compile or evaluate.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Error page variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPage {
    NotFound,
    InternalError,
}

impl ErrorPage {
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::NotFound => "errors/404.html",
            Self::InternalError => "errors/500.html",
        }
    }
}

/// Renders site templates with the global context.
pub struct SiteRenderer {
    env: Environment<'static>,
    catalog: Catalog,
}

impl SiteRenderer {
    /// Create a renderer over the embedded templates.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(cet_assets::template(name)));
        env.add_function("url_for", url_for);
        Self { env, catalog }
    }

    /// Render a content page route.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::NotAPage` for contact and webhook routes, or a
    /// template error.
    pub fn render_page(&self, route: &Route) -> Result<String, RenderError> {
        let (template, locals) = route.page().ok_or(RenderError::NotAPage(route.endpoint))?;
        let vars = match locals {
            PageLocals::None => PageVars::default(),
            PageLocals::Themes => PageVars {
                themes: Some(self.catalog.themes()),
                ..Default::default()
            },
            PageLocals::Faqs => PageVars {
                faqs: Some(self.catalog.faqs()),
                ..Default::default()
            },
        };
        self.render(template, vars)
    }

    /// Render the contact form with the given flash messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_contact(&self, flashes: &[FlashMessage]) -> Result<String, RenderError> {
        self.render(
            CONTACT_TEMPLATE,
            PageVars {
                flashes,
                ..Default::default()
            },
        )
    }

    /// Render an error page.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_error(&self, page: ErrorPage) -> Result<String, RenderError> {
        self.render(page.template(), PageVars::default())
    }

    /// Render a template with the global context and page variables.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::TemplateNotFound` if the template does not exist,
    /// or `RenderError::Template` if it fails to evaluate.
    pub fn render(&self, template: &str, vars: PageVars<'_>) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(template).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                RenderError::TemplateNotFound(template.to_owned())
            } else {
                RenderError::Template(e)
            }
        })?;
        let context = RenderContext {
            global: GlobalContext::now(&self.catalog),
            vars,
        };
        Ok(tmpl.render(context)?)
    }
}

/// `url_for(endpoint, **kwargs)` template function.
///
/// `url_for('static', filename='css/site.css')` builds asset URLs; any other
/// endpoint resolves through the route table. URLs are marked safe so the
/// autoescaper leaves their slashes alone.
fn url_for(endpoint: &str, kwargs: Kwargs) -> Result<Value, minijinja::Error> {
    let url = if endpoint == STATIC_ENDPOINT {
        let filename: &str = kwargs.get("filename")?;
        routes::static_url(filename)
    } else {
        routes::url_for(endpoint)
            .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))?
            .to_owned()
    };
    kwargs.assert_all_used()?;
    Ok(Value::from_safe_string(url))
}
