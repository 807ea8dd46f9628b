use stocklist_model::{
    CategorySelection, OwnerSelection, SortDirection, SortKey,
};

use super::types::{ProductQuery, SortSpec};

/// Fluent API for building product queries
#[derive(Debug, Clone)]
pub struct ProductQueryBuilder {
    query: ProductQuery,
}

impl ProductQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self {
            query: ProductQuery::default(),
        }
    }

    // === Filter methods ===

    /// Case-insensitive name search
    pub fn named(mut self, text: impl Into<String>) -> Self {
        self.query.filters.query = text.into();
        self
    }

    /// Keep only products in the category with the given title
    pub fn in_category(mut self, title: impl Into<String>) -> Self {
        self.query.filters.category = CategorySelection::Title(title.into());
        self
    }

    /// Keep products from every category
    pub fn any_category(mut self) -> Self {
        self.query.filters.category = CategorySelection::All;
        self
    }

    /// Keep only products whose category belongs to the named owner
    pub fn owned_by(mut self, name: impl Into<String>) -> Self {
        self.query.filters.owner = OwnerSelection::Name(name.into());
        self
    }

    /// Keep products from every owner
    pub fn any_owner(mut self) -> Self {
        self.query.filters.owner = OwnerSelection::All;
        self
    }

    // === Sort methods ===

    /// Set sort key and direction
    pub fn sort_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.query.sort = SortSpec::new(key, direction);
        self
    }

    /// Clear the sort, keeping the filtered order
    pub fn unsorted(mut self) -> Self {
        self.query.sort = SortSpec::default();
        self
    }

    // === Build method ===

    /// Build the final query
    pub fn build(self) -> ProductQuery {
        self.query
    }
}

impl Default for ProductQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// === Convenience constructors ===

impl ProductQuery {
    /// Create a simple name search query
    pub fn search(text: impl Into<String>) -> Self {
        ProductQueryBuilder::new().named(text).build()
    }

    /// Create a single-category browse query
    pub fn in_category(title: impl Into<String>) -> Self {
        ProductQueryBuilder::new().in_category(title).build()
    }

    /// Create a single-owner browse query
    pub fn owned_by(name: impl Into<String>) -> Self {
        ProductQueryBuilder::new().owned_by(name).build()
    }
}
