//! Scaling policies: where grid lines fall and how they are ticked and labelled.

mod linear;
mod logarithmic;
mod time;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

pub use linear::Linear;
pub use logarithmic::Logarithmic;
pub use time::{Time, TimeStep, TimeUnit};

use crate::core::coordinate::{LabelFormat, LabelSource, LineColor, LineSource, TickSource};
use crate::core::{AxisState, CoordinateOptions};
use crate::error::GridError;

/// Upper bound on generated lines per axis.
pub(crate) const MAX_GENERATED_LINES: f64 = 10_000.0;

/// Line/tick/label generation for one kind of axis progression.
///
/// Every method is a pure function of the axis state. Degenerate states
/// (zero or non-finite range, empty surface) produce empty sequences.
pub trait ScalingPolicy: Sync {
    /// Line positions in axis value units, ascending.
    fn lines(&self, state: &AxisState) -> Vec<f64>;

    fn is_major_line(&self, value: f64, state: &AxisState) -> bool;

    fn is_label(&self, value: f64, state: &AxisState) -> bool;

    /// Label text for a line position, ignoring any custom formatter.
    fn label_text(&self, value: f64, state: &AxisState) -> String;

    /// Value shown to a custom formatter for a line position.
    fn display_value(&self, value: f64) -> f64 {
        value
    }

    /// Major lines get the full tick length, minor lines half of it.
    fn ticks(&self, state: &AxisState) -> Vec<Option<f64>> {
        let tick = state.coordinate.tick;
        if !tick.is_finite() || tick <= 0.0 {
            return vec![None; state.lines.len()];
        }
        state
            .lines
            .iter()
            .map(|value| {
                if self.is_major_line(*value, state) {
                    Some(tick)
                } else {
                    Some(tick / 2.0)
                }
            })
            .collect()
    }

    fn labels(&self, state: &AxisState) -> Vec<Option<String>> {
        state
            .lines
            .iter()
            .map(|value| {
                self.is_label(*value, state)
                    .then(|| self.format_label(*value, state))
            })
            .collect()
    }

    /// Label text honouring the coordinate's custom formatter.
    fn format_label(&self, value: f64, state: &AxisState) -> String {
        match &state.coordinate.format {
            LabelFormat::Auto => self.label_text(value, state),
            LabelFormat::Custom(format) => format(self.display_value(value)),
        }
    }
}

/// Named scaling policy of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingKind {
    #[default]
    Linear,
    Logarithmic,
    Time,
}

impl ScalingKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Time => "time",
        }
    }

    #[must_use]
    pub fn policy(self) -> &'static dyn ScalingPolicy {
        match self {
            Self::Linear => &Linear,
            Self::Logarithmic => &Logarithmic,
            Self::Time => &Time,
        }
    }

    /// Options a coordinate takes over when switching to this policy.
    #[must_use]
    pub fn defaults(self) -> CoordinateOptions {
        let generated = CoordinateOptions {
            lines: Some(LineSource::Policy),
            ticks: Some(TickSource::Policy),
            labels: Some(LabelSource::Policy),
            line_color: Some(LineColor::default()),
            ..CoordinateOptions::default()
        };
        match self {
            Self::Linear => CoordinateOptions {
                steps: Some(smallvec![1.0, 2.0, 5.0]),
                distance: Some(13.0),
                ..generated
            },
            Self::Logarithmic => CoordinateOptions {
                scale: Some(0.01),
                offset: Some(0.0),
                min_zoom: Some(1e-4),
                max_zoom: Some(1.0),
                steps: Some(smallvec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
                distance: Some(20.0),
                ..generated
            },
            Self::Time => CoordinateOptions {
                scale: Some(60.0),
                min_zoom: Some(1e-3),
                max_zoom: Some(1e8),
                steps: Some(smallvec![1.0, 2.0, 5.0]),
                distance: Some(120.0),
                ..generated
            },
        }
    }
}

impl fmt::Display for ScalingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalingKind {
    type Err = GridError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            "time" => Ok(Self::Time),
            other => Err(GridError::UnknownScaling(other.to_owned())),
        }
    }
}

/// Axis extent and range when line generation is meaningful.
pub(crate) fn usable_span(state: &AxisState) -> Option<(f64, f64)> {
    let extent = state.extent();
    let range = state.range;
    let usable = extent.is_finite()
        && extent > 0.0
        && range.is_finite()
        && range > 0.0
        && state.offset.is_finite()
        && (state.offset + range).is_finite();
    usable.then_some((extent, range))
}

/// Multiples of `step` in `[start, end)`, or nothing when there would be too many.
pub(crate) fn multiples_in(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let first = (start / step).ceil();
    let last = (end / step).ceil() - 1.0;
    let count = last - first + 1.0;
    if !count.is_finite() || count <= 0.0 || count > MAX_GENERATED_LINES {
        return Vec::new();
    }
    (0..count as usize)
        .map(|index| (first + index as f64) * step)
        .collect()
}
