use super::ids::{CategoryId, ProductId};

/// A flat product record as loaded from the source collections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}
