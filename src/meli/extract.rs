//! Field extraction from search result items.

use crate::meli::models::{Attribute, Item, Record};

/// Attribute key the brand is stored under.
const BRAND_ATTRIBUTE: &str = "BRAND";

/// Projects the dataset fields out of a listing.
///
/// Returns `None` when the listing's condition does not equal
/// `condition` (exact, case-sensitive). Matching listings are copied
/// verbatim into a [`Record`], with the brand looked up from the
/// attribute list.
pub fn extract(item: &Item, condition: &str) -> Option<Record> {
    if item.condition != condition {
        return None;
    }

    Some(Record {
        item_id: item.id.clone(),
        title: item.title.clone(),
        price: item.price,
        domain_id: item.domain_id.clone(),
        brand: find_brand(&item.attributes),
    })
}

/// Returns the value of the first BRAND attribute, if any.
pub fn find_brand(attributes: &[Attribute]) -> Option<String> {
    attributes
        .iter()
        .find(|attribute| attribute.id == BRAND_ATTRIBUTE)
        .and_then(|attribute| attribute.value_name.clone())
}
