//! survey-facets: selection filtering and categorical distributions for
//! multi-panel survey dashboards.
//!
//! The pipeline is pure and recomputed per selection change:
//! `Dataset` → [`core::apply_selection`] → [`core::distribute`] →
//! [`render::to_proportion_spec`] / [`render::to_count_spec`] → a
//! [`render::ChartRenderer`] supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, DashboardFrame};
pub use error::{FacetError, FacetResult};
