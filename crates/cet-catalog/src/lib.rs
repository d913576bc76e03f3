//! Static content catalog for the CET website.
//!
//! The catalog holds the read-only data every page draws from:
//! - [`CompanyProfile`]: name, contact details, mission
//! - [`NavigationTree`]: menu sections and their links
//! - [`Testimonial`] and [`FaqEntry`] lists
//! - the trip [`ThemeList`] used by the private trips page
//!
//! All data is compiled into the binary. There is no write path.
//!
//! # Example
//!
//! ```
//! use cet_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let travel = catalog.navigation().section("cuba_travel").unwrap();
//! assert_eq!(travel.links[0].name, "People to People");
//! ```

mod content;
mod model;

pub use model::{
    CompanyProfile, FaqEntry, NavLink, NavSection, NavigationTitles, NavigationTree, Testimonial,
    ThemeList,
};

/// Read-only view over the site content.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    company: &'static CompanyProfile,
    navigation: NavigationTree,
    testimonials: &'static [Testimonial],
    faqs: &'static [FaqEntry],
    themes: ThemeList,
}

impl Catalog {
    /// The site's built-in content.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            company: &content::COMPANY,
            navigation: content::NAVIGATION,
            testimonials: content::TESTIMONIALS,
            faqs: content::FAQS,
            themes: content::THEMES,
        }
    }

    #[must_use]
    pub fn company(&self) -> &'static CompanyProfile {
        self.company
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationTree {
        &self.navigation
    }

    /// Testimonials in display order.
    #[must_use]
    pub fn testimonials(&self) -> &'static [Testimonial] {
        self.testimonials
    }

    /// FAQ entries in display order.
    #[must_use]
    pub fn faqs(&self) -> &'static [FaqEntry] {
        self.faqs
    }

    /// Trip themes in display order.
    #[must_use]
    pub fn themes(&self) -> ThemeList {
        self.themes
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_company_profile() {
        let company = Catalog::builtin().company();
        assert_eq!(company.abbreviation, "CET");
        assert_eq!(company.email, "info@cubaeducationaltravel.com");
        assert_eq!(company.founded, "2009");
    }

    #[test]
    fn test_navigation_section_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<_> = catalog.navigation().sections().iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["cuba_travel", "about_cet", "resources"]);
    }

    #[test]
    fn test_navigation_link_order() {
        let catalog = Catalog::builtin();
        let about = catalog.navigation().section("about_cet").unwrap();
        let names: Vec<_> = about.links.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec!["The CET Story", "Impact", "In the News", "Testimonials"]
        );
    }

    #[test]
    fn test_navigation_unknown_section() {
        assert!(Catalog::builtin().navigation().section("shop").is_none());
    }

    #[test]
    fn test_navigation_serializes_as_ordered_map() {
        let json = serde_json::to_string(Catalog::builtin().navigation()).unwrap();

        let travel = json.find("\"cuba_travel\"").unwrap();
        let about = json.find("\"about_cet\"").unwrap();
        let resources = json.find("\"resources\"").unwrap();
        assert!(travel < about && about < resources);
        assert!(json.contains(r#"{"name":"Private Trips","url":"travel_private"}"#));
    }

    #[test]
    fn test_navigation_titles_serialize_by_key() {
        let json = serde_json::to_value(Catalog::builtin().navigation().titles()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cuba_travel": "Cuba Travel",
                "about_cet": "About CET",
                "resources": "Resources",
            })
        );
    }

    #[test]
    fn test_collection_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.testimonials().len(), 7);
        assert_eq!(catalog.faqs().len(), 8);
        assert_eq!(catalog.themes().len(), 9);
        assert_eq!(catalog.navigation().links().count(), 14);
    }

    #[test]
    fn test_display_order_preserved() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.testimonials()[0].name, "Richard Feinberg");
        assert_eq!(catalog.testimonials()[6].name, "Mario Recchia");
        assert_eq!(
            catalog.faqs()[0].question,
            "Is travel to Cuba legal for US citizens?"
        );
        assert_eq!(catalog.themes().first(), Some(&"agriculture"));
        assert_eq!(catalog.themes().last(), Some(&"sports"));
    }
}
