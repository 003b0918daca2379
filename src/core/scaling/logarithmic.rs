use smallvec::SmallVec;

use crate::core::AxisState;
use crate::core::primitives::{format_decimal, nearly_equal, nice_step_ceil, step_precision};

use super::{MAX_GENERATED_LINES, ScalingPolicy, multiples_in, usable_span};

/// Decade width in pixels above which 2× and 5× lines get labels too.
pub const MINOR_LABEL_DECADE_PX: f64 = 200.0;

/// Exponents beyond this are printed in scientific notation.
const PLAIN_EXPONENT_LIMIT: i32 = 4;

/// Lines on powers of ten, with mantissa subdivisions when decades are wide.
///
/// Values are log10 units: the line at `v` stands for `10^v`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logarithmic;

impl Logarithmic {
    /// Pixel width of one decade.
    #[must_use]
    pub fn decade_px(state: &AxisState) -> Option<f64> {
        let (extent, range) = usable_span(state)?;
        Some(extent / range)
    }

    /// Mantissas drawn inside every decade, or `None` when decades are too
    /// narrow and lines skip whole decades instead.
    fn mantissas(state: &AxisState, decade_px: f64) -> Option<SmallVec<[f64; 9]>> {
        let distance = state.coordinate.distance.max(0.0);
        if decade_px < distance {
            return None;
        }
        let mut candidates: SmallVec<[f64; 9]> = state
            .coordinate
            .steps
            .iter()
            .copied()
            .filter(|step| step.is_finite() && *step > 1.0 && *step < 10.0)
            .collect();
        candidates.sort_by(f64::total_cmp);

        let mut picked: SmallVec<[f64; 9]> = SmallVec::new();
        picked.push(1.0);
        let mut last_px = 0.0;
        for mantissa in candidates {
            let position = mantissa.log10() * decade_px;
            if position - last_px >= distance && decade_px - position >= distance {
                picked.push(mantissa);
                last_px = position;
            }
        }
        Some(picked)
    }

    fn mantissa(value: f64) -> f64 {
        10f64.powf(value - value.floor())
    }
}

impl ScalingPolicy for Logarithmic {
    fn lines(&self, state: &AxisState) -> Vec<f64> {
        let Some(decade_px) = Self::decade_px(state) else {
            return Vec::new();
        };
        let start = state.offset;
        let end = state.offset + state.range;

        let Some(mantissas) = Self::mantissas(state, decade_px) else {
            return nice_step_ceil(state.coordinate.distance / decade_px, &[1.0, 2.0, 5.0])
                .map(|every| multiples_in(start, end, every.round().max(1.0)))
                .unwrap_or_default();
        };

        let first = start.floor();
        let decades = end.ceil() - first + 1.0;
        if decades * mantissas.len() as f64 > MAX_GENERATED_LINES {
            return Vec::new();
        }
        (0..decades as usize)
            .flat_map(|index| {
                let decade = first + index as f64;
                mantissas.iter().map(move |mantissa| decade + mantissa.log10())
            })
            .filter(|value| *value >= start && *value < end)
            .collect()
    }

    fn is_major_line(&self, value: f64, _state: &AxisState) -> bool {
        nearly_equal(value, value.round())
    }

    fn is_label(&self, value: f64, state: &AxisState) -> bool {
        if self.is_major_line(value, state) {
            return true;
        }
        let wide = Self::decade_px(state).is_some_and(|px| px >= MINOR_LABEL_DECADE_PX);
        let mantissa = Self::mantissa(value);
        wide && (nearly_equal(mantissa, 2.0) || nearly_equal(mantissa, 5.0))
    }

    fn label_text(&self, value: f64, _state: &AxisState) -> String {
        let snapped = if nearly_equal(value, value.round()) {
            value.round()
        } else {
            value
        };
        let exponent = snapped.floor() as i32;
        let mantissa = Self::mantissa(snapped);
        let mantissa = if nearly_equal(mantissa, mantissa.round()) {
            mantissa.round()
        } else {
            mantissa
        };
        if exponent.abs() > PLAIN_EXPONENT_LIMIT {
            return format!("{mantissa}e{exponent}");
        }
        let precision = (-exponent).max(0) as u32 + step_precision(mantissa);
        format_decimal(mantissa * 10f64.powi(exponent), precision)
    }

    fn display_value(&self, value: f64) -> f64 {
        10f64.powf(value)
    }
}
