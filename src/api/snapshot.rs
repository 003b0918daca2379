use serde::Serialize;

use crate::error::{GridError, GridResult};

use super::GridState;

pub const GRID_STATE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct GridStateJsonContractV1<'a> {
    pub schema_version: u32,
    pub state: &'a GridState,
}

impl GridState {
    /// Serializes the state to pretty JSON for debugging and regression fixtures.
    pub fn to_json_pretty(&self) -> GridResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GridError::InvalidData(format!("failed to serialize grid state: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> GridResult<String> {
        let payload = GridStateJsonContractV1 {
            schema_version: GRID_STATE_JSON_SCHEMA_V1,
            state: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GridError::InvalidData(format!("failed to serialize grid state contract v1: {e}"))
        })
    }
}
