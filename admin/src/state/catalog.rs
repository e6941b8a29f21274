//! Reference lists (categories, colors, sizes) backing the form selects.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Category, Color, Size};

/// A `<select>` option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Reference rows fetched on page mount.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub categories: Vec<Category>,
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn category_options(&self) -> Vec<SelectOption> {
        self.categories
            .iter()
            .map(|c| SelectOption { label: c.cat_name.clone(), value: c.cat_id.clone() })
            .collect()
    }

    pub fn color_options(&self) -> Vec<SelectOption> {
        self.colors
            .iter()
            .map(|c| SelectOption { label: c.col_name.clone(), value: c.col_code.clone() })
            .collect()
    }

    pub fn size_options(&self) -> Vec<SelectOption> {
        self.sizes
            .iter()
            .map(|s| SelectOption { label: s.size_name.clone(), value: s.size_id.clone() })
            .collect()
    }

    /// Record a failed list fetch; the first failure wins.
    pub fn record_error(&mut self, list: &str, error: &str) {
        if self.error.is_none() {
            self.error = Some(format!("failed to load {list}: {error}"));
        }
    }
}
