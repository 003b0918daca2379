use serde::Serialize;

use crate::core::{Color, Orientation};
use crate::error::{GridError, GridResult};

/// Line segment in 0..1 ratio space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Scales the segment into pixel space of a `width × height` surface.
    #[must_use]
    pub fn to_pixels(self, width: f64, height: f64) -> Self {
        Self::new(
            self.x1 * width,
            self.y1 * height,
            self.x2 * width,
            self.y2 * height,
        )
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|value| value.is_finite())
    }

    pub fn validate(self) -> GridResult<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(GridError::InvalidData(
                "segment coordinates must be finite".to_owned(),
            ))
        }
    }
}

impl From<[f64; 4]> for Segment {
    fn from(value: [f64; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

/// Segments sharing one stroke, drawn in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeBatch {
    pub color: Color,
    pub width: f64,
    pub segments: Vec<Segment>,
}

impl StrokeBatch {
    pub fn validate(&self) -> GridResult<()> {
        self.color.validate()?;
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(GridError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.segments.iter().try_for_each(|segment| segment.validate())
    }
}

/// Label text anchored where its line meets the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub orientation: Orientation,
    pub text: String,
    /// Anchor in ratio space.
    pub x: f64,
    pub y: f64,
    /// Pixel offset from the anchor to the text origin.
    pub dx: f64,
    pub dy: f64,
    pub color: Color,
    pub font_size: f64,
    pub font_family: String,
}

impl LabelAnchor {
    pub fn validate(&self) -> GridResult<()> {
        self.color.validate()?;
        if ![self.x, self.y, self.dx, self.dy]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(GridError::InvalidData(
                "label position must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(GridError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
