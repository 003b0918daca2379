use std::f64::consts::TAU;

use super::Orientation;

impl Orientation {
    /// Maps `value` to 0..1 within `[offset, offset + range]`.
    ///
    /// The cross (`Y`) orientation is flipped so that growing values move
    /// toward the top of a y-down surface.
    #[must_use]
    pub fn ratio(self, value: f64, offset: f64, range: f64) -> f64 {
        let t = (value - offset) / range;
        match self {
            Self::Y => 1.0 - t,
            Self::X | Self::R | Self::A => t,
        }
    }

    /// Ratio-space segment `[x1, y1, x2, y2]` drawn for ratio `t`.
    ///
    /// Cartesian lines span the full cross dimension. A radius line is encoded
    /// as the horizontal diameter of its ring; an angle line is the spoke from
    /// the centre at `t` turns.
    #[must_use]
    pub fn segment(self, t: f64) -> [f64; 4] {
        match self {
            Self::X => [t, 0.0, t, 1.0],
            Self::Y => [0.0, t, 1.0, t],
            Self::R => [0.5 - t / 2.0, 0.5, 0.5 + t / 2.0, 0.5],
            Self::A => {
                let angle = t * TAU;
                [0.5, 0.5, 0.5 + 0.5 * angle.cos(), 0.5 - 0.5 * angle.sin()]
            }
        }
    }
}
