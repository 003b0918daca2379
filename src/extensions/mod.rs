//! Observer extensions attached to a [`Grid`](crate::api::Grid).

pub mod plugins;

pub use plugins::{GridEvent, GridPlugin};
