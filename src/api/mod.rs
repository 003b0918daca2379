//! Public grid controller API.

mod grid;
mod grid_config;
mod grid_state;
mod plugin_registry;
mod snapshot;

pub use grid::Grid;
pub use grid_config::{AxisUpdate, GridConfig, GridUpdate};
pub use grid_state::GridState;
pub use snapshot::{GRID_STATE_JSON_SCHEMA_V1, GridStateJsonContractV1};
