use indexmap::IndexSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::dataset::Dataset;
use crate::core::selection::Selection;
use crate::core::types::{CellValue, ColumnIndex};
use crate::error::FacetResult;

/// Order-preserving subset of dataset rows matching a selection.
///
/// The view borrows the dataset and only records row positions, so building
/// one never copies cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    rows: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// View over every row of `dataset`, in order.
    #[must_use]
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            rows: (0..dataset.row_count()).collect(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positions of the included rows in the source dataset.
    #[must_use]
    pub fn row_indices(&self) -> &[usize] {
        &self.rows
    }

    /// Iterates the values of one column across the included rows.
    pub fn values(&self, column: ColumnIndex) -> impl Iterator<Item = &'a CellValue> + '_ {
        let dataset = self.dataset;
        self.rows
            .iter()
            .filter_map(move |&row| dataset.cell(row, column))
    }
}

/// Applies a selection to a dataset.
///
/// A row is kept iff, for every constrained dimension, its value is one of
/// the allowed values. Row order is preserved. Constraining on a column the
/// dataset does not have fails with `UnknownColumn`; constraining on values
/// that never occur just yields an empty view.
pub fn apply_selection<'a>(
    dataset: &'a Dataset,
    selection: &Selection,
) -> FacetResult<FilteredView<'a>> {
    let mut resolved: SmallVec<[(ColumnIndex, &IndexSet<CellValue>); 4]> = SmallVec::new();
    for (column, allowed) in selection.constraints() {
        resolved.push((dataset.resolve(column.as_str())?, allowed));
    }

    if resolved.is_empty() {
        return Ok(FilteredView::all(dataset));
    }

    let rows: Vec<usize> = (0..dataset.row_count())
        .filter(|&row| {
            resolved.iter().all(|(column, allowed)| {
                dataset
                    .cell(row, *column)
                    .is_some_and(|value| allowed.contains(value))
            })
        })
        .collect();

    trace!(
        dimensions = resolved.len(),
        matched = rows.len(),
        total = dataset.row_count(),
        "applied selection"
    );
    Ok(FilteredView { dataset, rows })
}

/// Distinct values of one column in first-seen order.
///
/// These are the choices a multi-select control offers for a filter
/// dimension. The missing category is included when present.
pub fn filter_options(dataset: &Dataset, column: &str) -> FacetResult<Vec<CellValue>> {
    let index = dataset.resolve(column)?;
    let seen: IndexSet<&CellValue> = (0..dataset.row_count())
        .filter_map(|row| dataset.cell(row, index))
        .collect();
    Ok(seen.into_iter().cloned().collect())
}
