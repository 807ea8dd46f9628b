//! Query surface snapshot for presentation layers.

pub use super::builder::ProductQueryBuilder;
pub use super::filtering::filter_products;
pub use super::sorting::{
    compare_products, sort_products_slice, sorted_products,
};
pub use super::toggle::{SortIndicator, SortToggle};
pub use super::types::{ProductFilters, ProductQuery, SortSpec};
