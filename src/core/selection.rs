use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::types::{CellValue, ColumnId};

/// The user's active filter constraints, one allowed-value set per dimension.
///
/// An absent dimension imposes no constraint. Empty sets are never stored:
/// setting a dimension to no values clears it, so "nothing picked" and
/// "not filtered" are the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSelection", into = "RawSelection")]
pub struct Selection {
    constraints: IndexMap<ColumnId, IndexSet<CellValue>>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the allowed values for one dimension.
    #[must_use]
    pub fn with_values<C, I, V>(mut self, column: C, values: I) -> Self
    where
        C: Into<ColumnId>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.set(column, values);
        self
    }

    /// Replaces the allowed values for one dimension.
    pub fn set<C, I, V>(&mut self, column: C, values: I)
    where
        C: Into<ColumnId>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let column = column.into();
        let values: IndexSet<CellValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.constraints.shift_remove(&column);
        } else {
            self.constraints.insert(column, values);
        }
    }

    /// Removes any constraint on one dimension.
    pub fn clear(&mut self, column: &str) {
        self.constraints.shift_remove(column);
    }

    #[must_use]
    pub fn allowed(&self, column: &str) -> Option<&IndexSet<CellValue>> {
        self.constraints.get(column)
    }

    /// Iterates active constraints in insertion order.
    pub fn constraints(&self) -> impl Iterator<Item = (&ColumnId, &IndexSet<CellValue>)> {
        self.constraints
            .iter()
            .filter(|(_, allowed)| !allowed.is_empty())
    }

    #[must_use]
    pub fn dimension_count(&self) -> usize {
        self.constraints().count()
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.dimension_count() == 0
    }
}

type RawSelection = IndexMap<ColumnId, IndexSet<CellValue>>;

// Decoded payloads go through `set` so empty sets never get stored.
impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        let mut selection = Self::new();
        for (column, values) in raw {
            selection.set(column, values);
        }
        selection
    }
}

impl From<Selection> for RawSelection {
    fn from(selection: Selection) -> Self {
        selection.constraints
    }
}
