//! Catalog record types.
//!
//! Every record borrows `'static` data: the catalog is compiled into the
//! binary and never changes while the process runs.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Company profile shown in headers, footers and the about pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    pub founder: &'static str,
    pub legal_status: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    /// Founding year as displayed (e.g. "2009").
    pub founded: &'static str,
}

/// A single navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display name.
    pub name: &'static str,
    /// Route endpoint the link points at (resolved to a path with `url_for`).
    #[serde(rename = "url")]
    pub endpoint: &'static str,
}

/// A keyed group of navigation links, e.g. the "Cuba Travel" dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Lookup key (e.g. `cuba_travel`).
    pub key: &'static str,
    /// Menu heading.
    pub title: &'static str,
    /// Links in display order.
    pub links: &'static [NavLink],
}

/// Navigation menu: sections in display order.
///
/// Serializes as a map from section key to its link list, preserving
/// section order, so templates can address `navigation.cuba_travel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTree {
    sections: &'static [NavSection],
}

impl NavigationTree {
    /// Create a navigation tree from sections in display order.
    #[must_use]
    pub const fn new(sections: &'static [NavSection]) -> Self {
        Self { sections }
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &'static [NavSection] {
        self.sections
    }

    /// Look up a section by key.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&'static NavSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Iterate every link across all sections, in display order.
    pub fn links(&self) -> impl Iterator<Item = &'static NavLink> {
        self.sections.iter().flat_map(|s| s.links.iter())
    }

    /// Section headings keyed like the tree itself.
    #[must_use]
    pub const fn titles(&self) -> NavigationTitles {
        NavigationTitles {
            sections: self.sections,
        }
    }
}

/// Menu headings of a [`NavigationTree`].
///
/// Serializes as a map from section key to title, so templates can write
/// `navigation_titles.cuba_travel` next to `navigation.cuba_travel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTitles {
    sections: &'static [NavSection],
}

impl Serialize for NavigationTitles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in self.sections {
            map.serialize_entry(section.key, section.title)?;
        }
        map.end()
    }
}

impl Serialize for NavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in self.sections {
            map.serialize_entry(section.key, section.links)?;
        }
        map.end()
    }
}

/// Customer quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    /// Role or affiliation of the person quoted.
    pub title: &'static str,
    pub quote: &'static str,
}

/// Frequently asked question with its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Trip theme names offered for private trips, in display order.
pub type ThemeList = &'static [&'static str];
