use super::category::Category;
use super::ids::ProductId;
use super::product::Product;
use super::user::User;

/// A product joined with its resolved category and the category's owner.
///
/// Derived and disposable: recomputed on every enrichment pass, never
/// cached or mutated. Identity is the source product id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// The user owning the product's category, not a direct product link.
    pub owner: User,
}

impl EnrichedProduct {
    /// Combine a flat product with its already-resolved category and owner.
    pub fn from_parts(product: &Product, category: Category, owner: User) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category,
            owner,
        }
    }
}
