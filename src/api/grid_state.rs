use serde::Serialize;

use crate::core::{AxisState, Orientation, Shape};

/// Snapshot of every axis after an update.
///
/// `x` and `y` are always present (a disabled axis carries empty arrays);
/// the radial pair only when enabled. Replaced wholesale on every update.
#[derive(Debug, Clone, Serialize)]
pub struct GridState {
    pub shape: Shape,
    pub x: AxisState,
    pub y: AxisState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<AxisState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<AxisState>,
}

impl GridState {
    #[must_use]
    pub fn axis(&self, orientation: Orientation) -> Option<&AxisState> {
        match orientation {
            Orientation::X => Some(&self.x),
            Orientation::Y => Some(&self.y),
            Orientation::R => self.r.as_ref(),
            Orientation::A => self.a.as_ref(),
        }
    }

    /// Present axis states in x, y, r, a order.
    pub fn axes(&self) -> impl Iterator<Item = &AxisState> + '_ {
        Orientation::ALL
            .into_iter()
            .filter_map(|orientation| self.axis(orientation))
    }

    /// Present axes that are not disabled.
    pub fn enabled_axes(&self) -> impl Iterator<Item = &AxisState> + '_ {
        self.axes().filter(|state| !state.disabled)
    }
}
