use serde::{Deserialize, Serialize};
use stocklist_model::{
    CategorySelection, OwnerSelection, SortDirection, SortKey,
};

/// Main query structure consumed by [`crate::Catalog::browse`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductQuery {
    pub filters: ProductFilters,
    pub sort: SortSpec,
}

/// Product filtering options; the default matches everything.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductFilters {
    /// Case-insensitive substring match against the product name.
    /// Empty matches everything.
    pub query: String,
    pub category: CategorySelection,
    pub owner: OwnerSelection,
}

impl ProductFilters {
    /// True when every predicate passes everything.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.category.is_all() && self.owner.is_all()
    }
}

/// Sort specification for queries.
///
/// Key and direction are independent; leaving either unset keeps the
/// filtered order (the header toggle's "unsorted" leg).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction: Some(direction),
        }
    }

    /// Both key and direction present, i.e. the comparator will order pairs.
    pub fn is_active(&self) -> bool {
        self.key.is_some() && self.direction.is_some()
    }
}
