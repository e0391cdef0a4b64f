use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::core::types::{CellValue, ColumnId, ColumnIndex};
use crate::error::{FacetError, FacetResult};

/// Immutable snapshot of parsed survey records.
///
/// Rows are stored positionally against an insertion-ordered schema so every
/// row is guaranteed to carry exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: IndexSet<ColumnId>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Builds a dataset from a column list and positional rows.
    pub fn new(columns: Vec<ColumnId>, rows: Vec<Vec<CellValue>>) -> FacetResult<Self> {
        let columns = collect_schema(columns)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns.len() {
                return Err(FacetError::RowWidthMismatch {
                    row,
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }
        }

        debug!(
            columns = columns.len(),
            rows = rows.len(),
            "dataset built from positional rows"
        );
        Ok(Self { columns, rows })
    }

    /// Builds a dataset from keyed records.
    ///
    /// The first record's key order defines the schema. Keys absent from a
    /// later record are filled with [`CellValue::Missing`]; keys the first
    /// record did not carry are rejected. With no records the schema is empty;
    /// use [`Dataset::from_records_with_columns`] when it must survive zero rows.
    pub fn from_records<K, V>(records: Vec<IndexMap<K, V>>) -> FacetResult<Self>
    where
        K: Into<ColumnId>,
        V: Into<CellValue>,
    {
        let mut records = records.into_iter();
        let Some(first) = records.next() else {
            return Ok(Self {
                columns: IndexSet::new(),
                rows: Vec::new(),
            });
        };

        let mut columns = IndexSet::with_capacity(first.len());
        let mut first_row = Vec::with_capacity(first.len());
        for (key, value) in first {
            let column = key.into();
            if columns.contains(&column) {
                return Err(FacetError::DuplicateColumn {
                    column: column.to_string(),
                });
            }
            columns.insert(column);
            first_row.push(value.into());
        }

        let rows = vec![first_row];
        Self::extend_keyed(columns, rows, records.enumerate().map(|(i, r)| (i + 1, r)))
    }

    /// Builds a dataset from keyed records against an explicit schema.
    ///
    /// Same filling and rejection rules as [`Dataset::from_records`], but the
    /// columns exist even when `records` is empty.
    pub fn from_records_with_columns<K, V>(
        columns: Vec<ColumnId>,
        records: Vec<IndexMap<K, V>>,
    ) -> FacetResult<Self>
    where
        K: Into<ColumnId>,
        V: Into<CellValue>,
    {
        let columns = collect_schema(columns)?;
        let rows = Vec::with_capacity(records.len());
        Self::extend_keyed(columns, rows, records.into_iter().enumerate())
    }

    fn extend_keyed<K, V>(
        columns: IndexSet<ColumnId>,
        mut rows: Vec<Vec<CellValue>>,
        records: impl Iterator<Item = (usize, IndexMap<K, V>)>,
    ) -> FacetResult<Self>
    where
        K: Into<ColumnId>,
        V: Into<CellValue>,
    {
        let mut filled_cells = 0usize;
        for (row, record) in records {
            let mut cells = vec![CellValue::Missing; columns.len()];
            let mut seen = vec![false; columns.len()];
            for (key, value) in record {
                let column = key.into();
                let Some(index) = columns.get_index_of(&column) else {
                    return Err(FacetError::UnexpectedColumn {
                        row,
                        column: column.to_string(),
                    });
                };
                cells[index] = value.into();
                seen[index] = true;
            }
            filled_cells += seen.iter().filter(|present| !**present).count();
            rows.push(cells);
        }

        if filled_cells > 0 {
            warn!(
                filled_cells,
                "records missing schema columns were filled with missing values"
            );
        }
        debug!(
            columns = columns.len(),
            rows = rows.len(),
            "dataset built from records"
        );
        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &ColumnId> {
        self.columns.iter()
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    /// Validates a column identifier against the schema.
    pub fn resolve(&self, column: &str) -> FacetResult<ColumnIndex> {
        self.columns
            .get_index_of(column)
            .map(ColumnIndex)
            .ok_or_else(|| FacetError::unknown_column(column))
    }

    #[must_use]
    pub fn column_id(&self, index: ColumnIndex) -> &ColumnId {
        &self.columns[index.0]
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cells of one row in schema order.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns one cell. `None` only when `row` is out of range.
    #[must_use]
    pub fn cell(&self, row: usize, column: ColumnIndex) -> Option<&CellValue> {
        self.rows.get(row)?.get(column.0)
    }

    /// Returns one row as a keyed record.
    #[must_use]
    pub fn record(&self, row: usize) -> Option<IndexMap<&ColumnId, &CellValue>> {
        let cells = self.rows.get(row)?;
        Some(self.columns.iter().zip(cells).collect())
    }
}

fn collect_schema(columns: Vec<ColumnId>) -> FacetResult<IndexSet<ColumnId>> {
    let mut schema = IndexSet::with_capacity(columns.len());
    for column in columns {
        if schema.contains(&column) {
            return Err(FacetError::DuplicateColumn {
                column: column.to_string(),
            });
        }
        schema.insert(column);
    }
    Ok(schema)
}
