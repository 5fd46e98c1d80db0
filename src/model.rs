//! Data model for scraped book records
//!
//! The scrape stage builds a [`CategoryIndex`] mapping each category label to
//! the books found under it, in site listing order. The analysis stage works
//! over the flattened one-row-per-book view produced by [`flatten`].
//!
//! Fields that could not be extracted from a detail page are carried as
//! `None` (serialized as JSON `null`) all the way into the analysis stage.
//! Substitution to zero / empty text happens only through the accessors on
//! [`FlatRow`], so missing-value counts can still be taken on the original
//! state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scraped book listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title from the detail page's main heading
    pub title: String,

    /// Price in the site's currency; `None` if the price element was absent
    pub price: Option<f64>,

    /// Units in stock; `None` if no stock count could be extracted
    pub availability: Option<u32>,

    /// Description from the page's meta tag; `None` if absent or blank
    pub description: Option<String>,
}

/// Mapping from category label to its books, in site category order.
///
/// `IndexMap` keeps insertion order through serialization and back, so the
/// flattened row order is reproducible across runs.
pub type CategoryIndex = IndexMap<String, Vec<BookRecord>>;

/// One row of the flattened analysis table
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    /// Category the book was listed under
    pub category: String,
    pub title: String,
    pub price: Option<f64>,
    pub availability: Option<u32>,
    pub description: Option<String>,
}

impl FlatRow {
    /// Price with the unknown sentinel substituted by zero
    pub fn price_filled(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Availability with the unknown sentinel substituted by zero
    pub fn availability_filled(&self) -> u32 {
        self.availability.unwrap_or(0)
    }

    /// Description with the unknown sentinel substituted by empty text
    pub fn description_filled(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Flattens a category index into one row per book.
///
/// Categories appear in index order, books within a category in listing
/// order, so `rows.len()` always equals the sum of the per-category list
/// lengths.
pub fn flatten(index: &CategoryIndex) -> Vec<FlatRow> {
    let mut rows = Vec::with_capacity(index.values().map(Vec::len).sum());

    for (category, books) in index {
        for book in books {
            rows.push(FlatRow {
                category: category.clone(),
                title: book.title.clone(),
                price: book.price,
                availability: book.availability,
                description: book.description.clone(),
            });
        }
    }

    rows
}
