//! The navigation tree: the document the public front-end loads at startup.
//!
//! Ordering is part of the data contract: categories and the links inside
//! them are displayed exactly in the order they appear here, which mirrors
//! their stored `order` values (ascending, id as tie-breaker).

use serde::{Deserialize, Serialize};

/// A single bookmark-like link shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationLink {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: u32,
}

/// A named grouping of navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationCategory {
    pub id: String,
    pub name: String,
    pub order: u32,
    pub links: Vec<NavigationLink>,
}

/// The full navigation document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfig {
    pub categories: Vec<NavigationCategory>,
}

impl NavigationConfig {
    /// Total number of links across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.links.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.links.is_empty())
    }
}
