mod dashboard;
mod dashboard_config;
mod json_contract;

pub use dashboard::{Dashboard, DashboardFrame, FilterControl};
pub use dashboard_config::{DashboardConfig, FilterDimension, PanelConfig};
pub use json_contract::{DASHBOARD_FRAME_JSON_SCHEMA_V1, DashboardFrameJsonContractV1};
