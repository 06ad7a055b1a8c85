//! Category ids and their display names.

use serde::Deserialize;
use std::collections::HashMap;

use super::deserialize_id;

/// Categories offered by the setup form: `(id, name)`.
pub const SETUP_CATEGORIES: [(&str, &str); 4] = [
    ("9", "General Knowledge"),
    ("10", "Entertainment: Books"),
    ("21", "Sports"),
    ("26", "Celebrities"),
];

/// Name of a setup-form category, if the form offers it.
pub fn setup_category_name(id: &str) -> Option<&'static str> {
    SETUP_CATEGORIES
        .iter()
        .find(|(category_id, _)| *category_id == id)
        .map(|(_, name)| *name)
}

/// One entry of the provider's `trivia_categories` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Lookup from category id to display name. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDirectory {
    names: HashMap<String, String>,
}

impl CategoryDirectory {
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let names = categories
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();
        Self { names }
    }

    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }
}
