//! On-disk dataset document for the catalog collections.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stocklist_model::{Category, Product, User};

use crate::catalog::Catalog;
use crate::error::Result;

/// The JSON document holding the three source collections.
///
/// Record keys are camelCase (`categoryId`, `ownerId`) to stay compatible
/// with the upstream data files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Join the collections into a browsable catalog.
    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::build(self.users, self.categories, self.products)
    }
}
