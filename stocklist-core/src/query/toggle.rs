//! Per-column sort direction toggle for table headers.

use stocklist_model::{SortDirection, SortKey};

use super::types::SortSpec;

/// Icon state for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Three-state sort toggle held by the view layer.
///
/// Clicking the active column cycles unsorted -> ascending -> descending ->
/// unsorted; clicking a different column selects it and restarts at
/// ascending. The sort engine itself stays stateless and only consumes the
/// resulting [`SortSpec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortToggle {
    key: Option<SortKey>,
    direction: Option<SortDirection>,
}

impl SortToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the toggle for a header click.
    pub fn click(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = match self.direction {
                None => Some(SortDirection::Ascending),
                Some(SortDirection::Ascending) => {
                    Some(SortDirection::Descending)
                }
                Some(SortDirection::Descending) => None,
            };
        } else {
            self.key = Some(key);
            self.direction = Some(SortDirection::Ascending);
        }
    }

    /// Icon state for the given column; inactive columns read unsorted.
    pub fn indicator(&self, key: SortKey) -> SortIndicator {
        if self.key != Some(key) {
            return SortIndicator::Unsorted;
        }

        match self.direction {
            Some(SortDirection::Ascending) => SortIndicator::Ascending,
            Some(SortDirection::Descending) => SortIndicator::Descending,
            None => SortIndicator::Unsorted,
        }
    }

    /// The pair consumed by the sort engine.
    pub fn spec(&self) -> SortSpec {
        SortSpec {
            key: self.key,
            direction: self.direction,
        }
    }
}
