//! plot-grid: renderer-agnostic chart grid engine.
//!
//! The crate turns a logical view state (pan offset, zoom scale, value domain)
//! and the pixel size of a drawing surface into grid lines, ticks and labels
//! expressed in a 0..1 ratio space. Renderers only read the resulting
//! [`GridState`](api::GridState) snapshot.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Grid, GridConfig, GridState, GridUpdate};
pub use error::{GridError, GridResult};
