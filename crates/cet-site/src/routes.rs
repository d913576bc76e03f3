//! Route table and URL building.
//!
//! Every endpoint the site exposes is listed once in [`ROUTES`], in the order
//! it is mounted. Templates and redirects refer to endpoints by name and
//! resolve them with [`url_for`], so paths live in exactly one place.

use std::fmt;

/// Endpoint name templates use for static assets.
pub const STATIC_ENDPOINT: &str = "static";

/// URL prefix for static assets.
pub const STATIC_PREFIX: &str = "/static";

/// Template for the contact form.
pub const CONTACT_TEMPLATE: &str = "contact.html";

/// HTTP method accepted by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page-local variables supplied on top of the global context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLocals {
    None,
    /// Trip themes (`themes`).
    Themes,
    /// FAQ entries (`faqs`).
    Faqs,
}

/// What a route does when it is hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// Static content page rendered from a template.
    Page {
        template: &'static str,
        locals: PageLocals,
    },
    /// Contact form (GET shows it, POST submits it).
    Contact,
    /// Webhook stub.
    Webhook,
}

/// A single endpoint of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// Endpoint name used by `url_for`.
    pub endpoint: &'static str,
    /// URL path.
    pub path: &'static str,
    /// Accepted methods.
    pub methods: &'static [Method],
    /// Human-readable title.
    pub title: &'static str,
    pub kind: RouteKind,
}

impl Route {
    /// Template and locals if this route is a content page.
    #[must_use]
    pub fn page(&self) -> Option<(&'static str, PageLocals)> {
        match self.kind {
            RouteKind::Page { template, locals } => Some((template, locals)),
            RouteKind::Contact | RouteKind::Webhook => None,
        }
    }
}

const GET: &[Method] = &[Method::Get];
const GET_POST: &[Method] = &[Method::Get, Method::Post];

const fn page(
    endpoint: &'static str,
    path: &'static str,
    title: &'static str,
    template: &'static str,
    locals: PageLocals,
) -> Route {
    Route {
        endpoint,
        path,
        methods: GET,
        title,
        kind: RouteKind::Page { template, locals },
    }
}

/// All site endpoints in mount order.
pub const ROUTES: &[Route] = &[
    page("index", "/", "Homepage", "index.html", PageLocals::None),
    page(
        "travel_people_to_people",
        "/cuba-travel/people-to-people",
        "People to People Programs",
        "cuba_travel/people_to_people.html",
        PageLocals::None,
    ),
    page(
        "travel_private",
        "/cuba-travel/private-trips",
        "Private Trips",
        "cuba_travel/private_trips.html",
        PageLocals::Themes,
    ),
    page(
        "travel_academic",
        "/cuba-travel/academic-programs",
        "Academic Programs",
        "cuba_travel/academic_programs.html",
        PageLocals::None,
    ),
    page(
        "travel_luxury",
        "/cuba-travel/cet-luxury",
        "CET Luxury",
        "cuba_travel/cet_luxury.html",
        PageLocals::None,
    ),
    page(
        "travel_corporate",
        "/cuba-travel/corporate-travel",
        "Corporate Travel",
        "cuba_travel/corporate_travel.html",
        PageLocals::None,
    ),
    page(
        "travel_events",
        "/cuba-travel/events-in-cuba",
        "Events in Cuba",
        "cuba_travel/events_cuba.html",
        PageLocals::None,
    ),
    page(
        "about_story",
        "/about/the-cet-story",
        "The CET Story",
        "about/story.html",
        PageLocals::None,
    ),
    page(
        "about_impact",
        "/about/impact",
        "Our Impact",
        "about/impact.html",
        PageLocals::None,
    ),
    page(
        "about_news",
        "/about/in-the-news",
        "In the News",
        "about/news.html",
        PageLocals::None,
    ),
    page(
        "about_testimonials",
        "/about/testimonials",
        "Testimonials",
        "about/testimonials.html",
        PageLocals::None,
    ),
    page(
        "resources_business",
        "/resources/business-in-cuba",
        "Business in Cuba",
        "resources/business.html",
        PageLocals::None,
    ),
    page(
        "resources_faqs",
        "/resources/faqs",
        "FAQs",
        "resources/faqs.html",
        PageLocals::Faqs,
    ),
    page(
        "newsletter",
        "/resources/newsletter",
        "Newsletter",
        "resources/newsletter.html",
        PageLocals::None,
    ),
    Route {
        endpoint: "contact",
        path: "/contact",
        methods: GET_POST,
        title: "Contact Us",
        kind: RouteKind::Contact,
    },
    page("blog", "/blog", "The Cuba Blog", "blog.html", PageLocals::None),
    Route {
        endpoint: "handle_webhook",
        path: "/webhooks/webhook",
        methods: GET_POST,
        title: "Webhook",
        kind: RouteKind::Webhook,
    },
];

/// Error returned when an endpoint cannot be resolved to a URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),
}

/// Look up a route by endpoint name.
#[must_use]
pub fn route(endpoint: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.endpoint == endpoint)
}

/// Iterate content page routes.
pub fn pages() -> impl Iterator<Item = &'static Route> {
    ROUTES.iter().filter(|r| r.page().is_some())
}

/// Resolve an endpoint name to its URL path.
///
/// # Errors
///
/// Returns `UrlError::UnknownEndpoint` if no route has that name.
pub fn url_for(endpoint: &str) -> Result<&'static str, UrlError> {
    route(endpoint)
        .map(|r| r.path)
        .ok_or_else(|| UrlError::UnknownEndpoint(endpoint.to_owned()))
}

/// URL of a static asset (`filename` relative to the static root).
#[must_use]
pub fn static_url(filename: &str) -> String {
    format!("{STATIC_PREFIX}/{}", filename.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cet_catalog::Catalog;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_url_for_known_endpoints() {
        assert_eq!(url_for("index"), Ok("/"));
        assert_eq!(url_for("travel_private"), Ok("/cuba-travel/private-trips"));
        assert_eq!(url_for("contact"), Ok("/contact"));
        assert_eq!(url_for("handle_webhook"), Ok("/webhooks/webhook"));
    }

    #[test]
    fn test_url_for_unknown_endpoint() {
        assert_eq!(
            url_for("shop"),
            Err(UrlError::UnknownEndpoint("shop".to_owned()))
        );
    }

    #[test]
    fn test_static_url() {
        assert_eq!(static_url("css/site.css"), "/static/css/site.css");
        assert_eq!(static_url("/js/main.js"), "/static/js/main.js");
    }

    #[test]
    fn test_endpoints_and_paths_unique() {
        let endpoints: HashSet<_> = ROUTES.iter().map(|r| r.endpoint).collect();
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(endpoints.len(), ROUTES.len());
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn test_page_count() {
        // home + 6 travel + 4 about + 3 resources + blog
        assert_eq!(pages().count(), 15);
    }

    #[test]
    fn test_page_locals() {
        let locals = |endpoint| route(endpoint).and_then(Route::page).map(|(_, l)| l);
        assert_eq!(locals("travel_private"), Some(PageLocals::Themes));
        assert_eq!(locals("resources_faqs"), Some(PageLocals::Faqs));
        assert_eq!(locals("index"), Some(PageLocals::None));
        assert_eq!(locals("contact"), None);
    }

    #[test]
    fn test_page_templates_exist() {
        for route in pages() {
            let (template, _) = route.page().unwrap();
            assert!(
                cet_assets::template(template).is_some(),
                "missing template {template} for {}",
                route.endpoint
            );
        }
        assert!(cet_assets::template(CONTACT_TEMPLATE).is_some());
    }

    #[test]
    fn test_navigation_links_resolve() {
        for link in Catalog::builtin().navigation().links() {
            assert!(
                url_for(link.endpoint).is_ok(),
                "navigation link {} points at unknown endpoint {}",
                link.name,
                link.endpoint
            );
        }
    }

    #[test]
    fn test_methods() {
        assert_eq!(route("contact").unwrap().methods, &[Method::Get, Method::Post]);
        assert_eq!(route("blog").unwrap().methods, &[Method::Get]);
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
