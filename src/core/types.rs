use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Pixel size of the drawing surface, supplied by the host on every recompute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub width: f64,
    pub height: f64,
}

impl Shape {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn validate(self) -> GridResult<Self> {
        if !self.is_valid() {
            return Err(GridError::InvalidShape {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Pixel extent driven by the given axis orientation.
    #[must_use]
    pub fn extent(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::X => self.width,
            Orientation::Y => self.height,
            Orientation::R => self.width.min(self.height) / 2.0,
            Orientation::A => std::f64::consts::PI * self.width.min(self.height),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(300.0, 150.0)
    }
}

/// Which dimension of the surface an axis drives.
///
/// `X` is the primary orientation and `Y` the cross orientation of a
/// cartesian grid. `R` (radius) and `A` (angle) form the radial pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    X,
    Y,
    R,
    A,
}

impl Orientation {
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::R, Self::A];

    /// Axis paired with this one: x with y, radius with angle.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
            Self::R => Self::A,
            Self::A => Self::R,
        }
    }

    /// Position in [`Orientation::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::R => "r",
            Self::A => "a",
        }
    }
}

/// Inset of the drawing area: top, right, bottom, left, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl From<[f64; 4]> for Padding {
    fn from(value: [f64; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}
