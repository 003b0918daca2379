use crate::core::AxisState;
use crate::core::primitives::{format_decimal, is_multiple, nice_step, step_precision};

use super::{ScalingPolicy, multiples_in, usable_span};

/// Minimum pixel distance between two labels.
pub const LABEL_MIN_SPACING_PX: f64 = 50.0;

const LABEL_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Evenly spaced lines on 1-2-5 decades.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Linear {
    /// Distance between consecutive lines, in value units.
    #[must_use]
    pub fn step(state: &AxisState) -> Option<f64> {
        let (extent, range) = usable_span(state)?;
        nice_step(
            range * state.coordinate.distance / extent,
            &state.coordinate.steps,
        )
    }

    /// Distance between consecutive labels, a multiple of [`Linear::step`].
    #[must_use]
    pub fn label_step(state: &AxisState) -> Option<f64> {
        let (extent, range) = usable_span(state)?;
        let step = Self::step(state)?;
        let px_per_unit = extent / range;
        let label_step = LABEL_MULTIPLIERS
            .iter()
            .map(|multiplier| step * multiplier)
            .find(|candidate| candidate * px_per_unit >= LABEL_MIN_SPACING_PX)
            .unwrap_or(step * LABEL_MULTIPLIERS[LABEL_MULTIPLIERS.len() - 1]);
        Some(label_step)
    }
}

fn tolerance(step: f64) -> f64 {
    step * 1e-6
}

impl ScalingPolicy for Linear {
    fn lines(&self, state: &AxisState) -> Vec<f64> {
        match Self::step(state) {
            Some(step) => multiples_in(state.offset, state.offset + state.range, step),
            None => Vec::new(),
        }
    }

    fn is_major_line(&self, value: f64, state: &AxisState) -> bool {
        let Some(step) = Self::step(state) else {
            return false;
        };
        let decade = 10f64.powi(step.log10().floor() as i32 + 1);
        is_multiple(value, decade, tolerance(step))
    }

    fn is_label(&self, value: f64, state: &AxisState) -> bool {
        match (Self::step(state), Self::label_step(state)) {
            (Some(step), Some(label_step)) => is_multiple(value, label_step, tolerance(step)),
            _ => false,
        }
    }

    fn label_text(&self, value: f64, state: &AxisState) -> String {
        let precision = Self::step(state).map_or(0, step_precision);
        format_decimal(value, precision)
    }
}
