use stocklist_model::{CategoryId, ProductId, UserId};
use thiserror::Error;

/// Errors produced while building or loading a catalog.
///
/// Filtering, sorting, and the toggle are total functions and never fail;
/// the fallible surface is enrichment and dataset loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
