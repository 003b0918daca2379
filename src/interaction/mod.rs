//! Pan/zoom arithmetic applied by the grid to an already-computed gesture
//! delta.
//!
//! Pointer and wheel capture stay with the host; the grid only consumes an
//! [`InteractionDelta`].

use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp;
use crate::core::{Coordinate, Orientation, Shape};

/// Largest zoom step per delta, as a fraction of the surface height.
pub const MAX_ZOOM_FRACTION: f64 = 0.75;

/// One pan/zoom gesture step in surface pixels.
///
/// `dx`/`dy` move the view, `dz` zooms (negative zooms in), `x`/`y` is the
/// cursor position zooming pivots around.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionDelta {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub x: f64,
    pub y: f64,
}

impl InteractionDelta {
    #[must_use]
    pub const fn new(dx: f64, dy: f64, dz: f64, x: f64, y: f64) -> Self {
        Self { dx, dy, dz, x, y }
    }

    #[must_use]
    pub const fn pan(dx: f64, dy: f64) -> Self {
        Self::new(dx, dy, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn zoom(dz: f64, x: f64, y: f64) -> Self {
        Self::new(0.0, 0.0, dz, x, y)
    }

    /// Same delta with non-finite components zeroed.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let finite = |value: f64| if value.is_finite() { value } else { 0.0 };
        Self::new(
            finite(self.dx),
            finite(self.dy),
            finite(self.dz),
            finite(self.x),
            finite(self.y),
        )
    }
}

/// Relative zoom of a wheel delta, bounded to ±[`MAX_ZOOM_FRACTION`].
#[must_use]
pub fn zoom_factor(dz: f64, height: f64) -> f64 {
    if !dz.is_finite() || !height.is_finite() || height <= 0.0 {
        return 0.0;
    }
    let limit = height * MAX_ZOOM_FRACTION;
    clamp(-dz, -limit, limit) / height
}

/// View of one axis after an interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewChange {
    pub offset: f64,
    pub scale: f64,
}

/// Applies `delta` to one axis.
///
/// Zoom keeps the value under the cursor in place. Axes with zoom disabled
/// still take the new scale but are not re-centred on the cursor. Radial
/// axes only zoom around their origin and ignore panning.
#[must_use]
pub fn apply_delta(coordinate: &Coordinate, shape: Shape, delta: InteractionDelta) -> ViewChange {
    let delta = delta.sanitized();
    let previous = coordinate.scale;
    let mut view = ViewChange {
        offset: coordinate.offset,
        scale: previous,
    };

    let zoom = zoom_factor(delta.dz, shape.height);
    if zoom != 0.0 {
        let scale = clamp(
            previous * (1.0 - zoom),
            coordinate.min_zoom,
            coordinate.max_zoom,
        );
        if coordinate.zoom {
            let origin = clamp(coordinate.origin, 0.0, 1.0);
            let cursor = match coordinate.orientation {
                Orientation::X if shape.width > 0.0 => delta.x / shape.width,
                Orientation::Y if shape.height > 0.0 => 1.0 - delta.y / shape.height,
                _ => origin,
            };
            let extent = shape.extent(coordinate.orientation);
            view.offset -= extent * (scale - previous) * (cursor - origin);
        }
        view.scale = scale;
    }

    if coordinate.pan {
        match coordinate.orientation {
            Orientation::X => view.offset -= previous * delta.dx,
            Orientation::Y => view.offset += previous * delta.dy,
            Orientation::R | Orientation::A => {}
        }
    }
    view
}
