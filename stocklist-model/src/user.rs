use std::fmt;

use super::ids::UserId;

/// A person who owns one or more catalog categories.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Carried for display styling only; the pipeline never reads it.
    pub sex: Sex,
}

/// Sex marker on a user record, serialized as `"m"` / `"f"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Male,
    #[cfg_attr(feature = "serde", serde(rename = "f"))]
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "m"),
            Sex::Female => write!(f, "f"),
        }
    }
}
