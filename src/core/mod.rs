pub mod dataset;
pub mod distribution;
pub mod filter;
pub mod selection;
pub mod types;

pub use dataset::Dataset;
pub use distribution::{CategoryCount, Distribution, distribute};
pub use filter::{FilteredView, apply_selection, filter_options};
pub use selection::Selection;
pub use types::{CellValue, ColumnId, ColumnIndex, MISSING_LABEL};
