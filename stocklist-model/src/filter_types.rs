use std::fmt;

/// Columns of the product table that support ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKey {
    /// Numeric product id
    Id,
    /// Product name
    Product,
    /// Resolved category title
    Category,
    /// Resolved owner name
    User,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[Id, Product, Category, User]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Product => "Product",
            SortKey::Category => "Category",
            SortKey::User => "User",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort order for an active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn all() -> &'static [SortDirection] {
        use SortDirection::*;
        &[Ascending, Descending]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category filter selection: everything, or one category by title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CategorySelection {
    #[default]
    All,
    /// Exact (case-sensitive) category title
    Title(String),
}

impl CategorySelection {
    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => write!(f, "All"),
            CategorySelection::Title(title) => write!(f, "{title}"),
        }
    }
}

/// Owner filter selection: everything, or one owner by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OwnerSelection {
    #[default]
    All,
    /// Exact owner display name
    Name(String),
}

impl OwnerSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, OwnerSelection::All)
    }
}

impl fmt::Display for OwnerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerSelection::All => write!(f, "All"),
            OwnerSelection::Name(name) => write!(f, "{name}"),
        }
    }
}
