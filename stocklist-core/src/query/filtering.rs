//! Predicate cascade translating filter state into the retained subset.

use stocklist_model::{CategorySelection, EnrichedProduct, OwnerSelection};

use super::types::ProductFilters;

/// Apply the name, category, and owner predicates in sequence.
///
/// All three must hold for a product to be retained. Order-preserving and
/// non-mutating; an empty result is the caller's "no matches" signal.
pub fn filter_products(
    products: &[EnrichedProduct],
    filters: &ProductFilters,
) -> Vec<EnrichedProduct> {
    let needle = filters.query.to_lowercase();

    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .filter(|product| match &filters.category {
            CategorySelection::All => true,
            CategorySelection::Title(title) => product.category.title == *title,
        })
        .filter(|product| match &filters.owner {
            OwnerSelection::All => true,
            OwnerSelection::Name(name) => product.owner.name == *name,
        })
        .cloned()
        .collect()
}
