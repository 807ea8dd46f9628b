//! # Stocklist Core
//!
//! Core library for the Stocklist catalog browser: entity enrichment and
//! the filter-and-sort pipeline over users, categories, and products.
//!
//! ## Overview
//!
//! Three components run in dependency order:
//!
//! - **Enrichment** joins the flat source collections into
//!   [`EnrichedProduct`](stocklist_model::EnrichedProduct) records carrying
//!   their resolved category and owner inline.
//! - **Filtering** applies the name, category, and owner predicates in
//!   sequence, preserving order.
//! - **Sorting** orders the filtered list by a caller-selected key and
//!   direction, returning a fresh sequence and leaving the input untouched.
//!
//! The whole pass is synchronous, allocation-fresh, and idempotent; there
//! is no cache and no shared mutable state.
//!
//! ## Architecture
//!
//! - [`enrich`]: the entity joiner
//! - [`query`]: filter predicates, sort comparators, the query builder,
//!   and the header sort toggle
//! - [`catalog`]: the composition root holding the loaded collections
//! - [`dataset`]: JSON dataset document loading
//! - [`demo`]: a small referentially intact sample catalog
//!
//! ## Example
//!
//! ```
//! use stocklist_core::demo;
//! use stocklist_core::model::{SortDirection, SortKey};
//! use stocklist_core::query::ProductQueryBuilder;
//!
//! # fn main() -> stocklist_core::Result<()> {
//! let catalog = demo::catalog()?;
//!
//! let query = ProductQueryBuilder::new()
//!     .named("an")
//!     .sort_by(SortKey::Product, SortDirection::Ascending)
//!     .build();
//!
//! let rows = catalog.browse(&query);
//! assert!(rows.iter().all(|p| p.name.to_lowercase().contains("an")));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod catalog;
pub mod dataset;
pub mod demo;
pub mod enrich;
pub mod error;
pub mod query;

pub use catalog::Catalog;
pub use dataset::Dataset;
pub use enrich::enrich_products;
pub use error::{CatalogError, Result};

/// Re-export of the model crate for downstream convenience.
pub use stocklist_model as model;

pub use query::prelude as query_prelude;
