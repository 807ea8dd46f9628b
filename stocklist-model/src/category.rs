use super::ids::{CategoryId, UserId};

/// A catalog category.
///
/// The title doubles as display text and as the filter/sort key; there is
/// no separate internal key. Ownership of products is transitive through
/// the category's `owner_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Icon glyph shown next to the title, e.g. an emoji.
    pub icon: String,
    pub owner_id: UserId,
}
