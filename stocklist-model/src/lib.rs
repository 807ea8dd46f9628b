//! Core data model definitions shared across Stocklist crates.
#![allow(missing_docs)]

pub mod category;
pub mod enriched;
pub mod filter_types;
pub mod ids;
pub mod prelude;
pub mod product;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use category::Category;
pub use enriched::EnrichedProduct;
pub use filter_types::{
    CategorySelection, OwnerSelection, SortDirection, SortKey,
};
pub use ids::{CategoryId, ProductId, UserId};
pub use product::Product;
pub use user::{Sex, User};
