//! Global template context.
//!
//! Every page render receives the company profile, the navigation tree, the
//! testimonial list and the current calendar year. The year is read from the
//! clock on each render, so a long-running process rolls over on January 1st.

use cet_catalog::{
    Catalog, CompanyProfile, FaqEntry, NavigationTitles, NavigationTree, Testimonial, ThemeList,
};
use chrono::{Datelike, Local};
use serde::Serialize;

use crate::contact::FlashMessage;

/// Variables injected into every template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GlobalContext {
    pub company_info: &'static CompanyProfile,
    pub navigation: NavigationTree,
    /// Menu headings, keyed like `navigation`.
    pub navigation_titles: NavigationTitles,
    pub testimonials: &'static [Testimonial],
    pub current_year: i32,
}

impl GlobalContext {
    /// Build the context for the current calendar year.
    #[must_use]
    pub fn now(catalog: &Catalog) -> Self {
        Self::for_year(catalog, Local::now().year())
    }

    /// Build the context for a given year.
    #[must_use]
    pub fn for_year(catalog: &Catalog, current_year: i32) -> Self {
        Self {
            company_info: catalog.company(),
            navigation: *catalog.navigation(),
            navigation_titles: catalog.navigation().titles(),
            testimonials: catalog.testimonials(),
            current_year,
        }
    }
}

/// Page-local variables layered on top of [`GlobalContext`].
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct PageVars<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<ThemeList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faqs: Option<&'static [FaqEntry]>,
    /// Flash messages shown above the page content.
    pub flashes: &'a [FlashMessage],
}

/// Full template context: globals plus page locals.
#[derive(Serialize)]
pub(crate) struct RenderContext<'a> {
    #[serde(flatten)]
    pub(crate) global: GlobalContext,
    #[serde(flatten)]
    pub(crate) vars: PageVars<'a>,
}
