use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Display label used for the explicit missing-value category.
pub const MISSING_LABEL: &str = "(missing)";

/// One scalar cell of a survey record.
///
/// Values are normalized on construction: `NaN` and blank text both become
/// [`CellValue::Missing`], so a blank answer is always counted in the same
/// category no matter how the ingestion layer spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged, from = "RawCell")]
pub enum CellValue {
    Missing,
    Number(OrderedFloat<f64>),
    Text(String),
}

impl CellValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Text(value)
        }
    }

    /// `NaN` becomes missing and `-0.0` folds into `0.0`.
    #[must_use]
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else if value == 0.0 {
            Self::Number(OrderedFloat(0.0))
        } else {
            Self::Number(OrderedFloat(value))
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Human-readable category label.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str(MISSING_LABEL),
            Self::Text(text) => f.write_str(text),
            Self::Number(OrderedFloat(value)) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{value:.0}")
                } else {
                    write!(f, "{value}")
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::number(value as f64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

// Deserialization goes through the raw shape so normalization always applies.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Null(()),
    Number(f64),
    Text(String),
}

impl From<RawCell> for CellValue {
    fn from(raw: RawCell) -> Self {
        match raw {
            RawCell::Null(()) => Self::Missing,
            RawCell::Number(value) => Self::number(value),
            RawCell::Text(value) => Self::text(value),
        }
    }
}

/// Caller-supplied column identifier.
///
/// Identifiers are opaque; they only gain meaning once resolved against a
/// [`Dataset`](crate::core::Dataset) schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColumnId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::borrow::Borrow<str> for ColumnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Schema position of a column that was validated against a dataset.
///
/// Only [`Dataset::resolve`](crate::core::Dataset::resolve) hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnIndex(pub(crate) usize);

impl ColumnIndex {
    #[must_use]
    pub fn position(self) -> usize {
        self.0
    }
}
