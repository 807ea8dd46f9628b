pub mod builder;
pub mod filtering;
pub mod prelude;
pub mod sorting;
pub mod toggle;
pub mod types;

pub use builder::ProductQueryBuilder;
pub use filtering::filter_products;
pub use sorting::{compare_products, sort_products_slice, sorted_products};
pub use toggle::{SortIndicator, SortToggle};
pub use types::*;
