use thiserror::Error;

pub type FacetResult<T> = Result<T, FacetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    #[error("unknown column: `{column}`")]
    UnknownColumn { column: String },

    #[error("duplicate column: `{column}`")]
    DuplicateColumn { column: String },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} has column `{column}` outside the dataset schema")]
    UnexpectedColumn { row: usize, column: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl FacetError {
    pub(crate) fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }
}
