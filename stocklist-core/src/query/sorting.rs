//! Comparator-driven ordering of enriched products.

use std::cmp::Ordering;

use stocklist_model::{EnrichedProduct, SortDirection, SortKey};

use super::types::SortSpec;

/// Compare two products by the given key and direction.
///
/// String keys compare case-insensitively via Unicode lowercasing.
/// Descending reverses the [`Ordering`], which is exact operand-swap
/// symmetry; equal pairs stay equal in both directions.
pub fn compare_products(
    a: &EnrichedProduct,
    b: &EnrichedProduct,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ord = match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Product => compare_folded(&a.name, &b.name),
        SortKey::Category => {
            compare_folded(&a.category.title, &b.category.title)
        }
        SortKey::User => compare_folded(&a.owner.name, &b.owner.name),
    };

    if direction == SortDirection::Descending {
        ord.reverse()
    } else {
        ord
    }
}

/// Sort a product slice in place using the provided spec.
///
/// The sort is stable; an inactive spec (missing key or direction) leaves
/// the slice untouched, so the filtered order survives the "unsorted" leg
/// of the header toggle.
pub fn sort_products_slice(items: &mut [EnrichedProduct], spec: &SortSpec) {
    if let (Some(key), Some(direction)) = (spec.key, spec.direction) {
        items.sort_by(|a, b| compare_products(a, b, key, direction));
    }
}

/// Return a freshly ordered copy; the input is never reordered.
///
/// Callers may keep a reference to the pre-sort list.
pub fn sorted_products(
    products: &[EnrichedProduct],
    spec: &SortSpec,
) -> Vec<EnrichedProduct> {
    let mut sorted = products.to_vec();
    sort_products_slice(&mut sorted, spec);
    sorted
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
