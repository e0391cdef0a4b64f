use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::filter::FilteredView;
use crate::core::types::{CellValue, ColumnId};
use crate::error::FacetResult;

/// Count and share of one category within a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: CellValue,
    pub count: usize,
    /// Share of the distribution total in `0..=100`.
    pub percentage: f64,
}

/// Per-category breakdown of one column over a filtered view.
///
/// Entries follow first-seen order within the view, so two charts built from
/// the same distribution always agree on category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub column: ColumnId,
    pub entries: Vec<CategoryCount>,
    pub total: usize,
}

impl Distribution {
    #[must_use]
    pub fn empty(column: ColumnId) -> Self {
        Self {
            column,
            entries: Vec::new(),
            total: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn get(&self, category: &CellValue) -> Option<&CategoryCount> {
        self.entries.iter().find(|entry| &entry.category == category)
    }
}

/// Computes the value-frequency distribution of `column` over `view`.
///
/// Missing cells form their own category. An empty view yields an empty
/// distribution.
pub fn distribute(view: &FilteredView<'_>, column: &str) -> FacetResult<Distribution> {
    let dataset = view.dataset();
    let index = dataset.resolve(column)?;
    let column = dataset.column_id(index).clone();

    let total = view.len();
    if total == 0 {
        return Ok(Distribution::empty(column));
    }

    let mut counts: IndexMap<&CellValue, usize> = IndexMap::new();
    for value in view.values(index) {
        *counts.entry(value).or_insert(0) += 1;
    }

    let total_f = total as f64;
    let entries = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.clone(),
            count,
            percentage: count as f64 / total_f * 100.0,
        })
        .collect();

    Ok(Distribution {
        column,
        entries,
        total,
    })
}
