//! Data models for search responses and the exported dataset.

use serde::{Deserialize, Serialize};

/// One page of search results as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    /// Listings on this page, in API order
    pub results: Vec<Item>,
}

impl SearchPage {
    /// Returns the number of listings on this page.
    pub fn count(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the page carries no listings.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A single marketplace listing from a search response.
///
/// Only the fields this crate reads are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    /// Listing identifier (e.g. "MLA123456789")
    pub id: String,
    /// Listing title
    pub title: String,
    /// Listed price in the site currency
    pub price: f64,
    /// Product domain classification (e.g. "MLA-TELEVISIONS")
    pub domain_id: String,
    /// Listing condition ("new" or "used")
    pub condition: String,
    /// Structured descriptors attached to the listing
    pub attributes: Vec<Attribute>,
}

/// A key/value descriptor attached to a listing (brand, color, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    /// Attribute key (e.g. "BRAND")
    pub id: String,
    /// Human-readable value; the API sends null for some attributes
    pub value_name: Option<String>,
}

/// The projected record written to the output dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub item_id: String,
    pub title: String,
    pub price: f64,
    pub domain_id: String,
    /// Brand from the listing attributes; empty in the output when absent
    pub brand: Option<String>,
}
