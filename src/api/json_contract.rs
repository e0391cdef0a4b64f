use serde::{Deserialize, Serialize};

use crate::error::{FacetError, FacetResult};

use super::DashboardFrame;

pub const DASHBOARD_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: DashboardFrame,
}

impl DashboardFrame {
    pub fn to_json_pretty(&self) -> FacetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            FacetError::InvalidData(format!("failed to serialize dashboard frame: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> FacetResult<String> {
        let payload = DashboardFrameJsonContractV1 {
            schema_version: DASHBOARD_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            FacetError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Parses either a bare frame or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> FacetResult<Self> {
        if let Ok(frame) = serde_json::from_str::<DashboardFrame>(input) {
            return Ok(frame);
        }
        let payload: DashboardFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            FacetError::InvalidData(format!("failed to parse dashboard frame json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_FRAME_JSON_SCHEMA_V1 {
            return Err(FacetError::InvalidData(format!(
                "unsupported dashboard frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
