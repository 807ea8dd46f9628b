//! Catalog composition root.

use stocklist_model::{Category, EnrichedProduct, Product, User};

use crate::enrich::enrich_products;
use crate::error::Result;
use crate::query::{ProductQuery, filter_products, sort_products_slice};

/// The loaded catalog: source collections plus the enriched product list.
///
/// Built once at startup from externally supplied collections; browsing is
/// a pure pass over the enriched list and returns freshly allocated
/// output each time.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    /// Join the collections and build the catalog.
    ///
    /// Fails if any product references a missing category or any category
    /// references a missing owner.
    pub fn build(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self> {
        let enriched = enrich_products(&products, &categories, &users)?;
        Ok(Self {
            users,
            categories,
            products: enriched,
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The enriched products in load order.
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    /// Filter then sort; returns a fresh sequence.
    ///
    /// An empty result is the "no matching products" signal the view
    /// layer branches on.
    pub fn browse(&self, query: &ProductQuery) -> Vec<EnrichedProduct> {
        let mut matched = filter_products(&self.products, &query.filters);
        sort_products_slice(&mut matched, &query.sort);

        tracing::debug!(
            total = self.products.len(),
            matched = matched.len(),
            "browse pass"
        );

        matched
    }
}
