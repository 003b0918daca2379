use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Largest decimal precision used when formatting labels.
const MAX_LABEL_PRECISION: u32 = 12;

/// Clamps `value` into `[lo, hi]`; the lower bound wins when the bounds cross.
///
/// Unlike `f64::clamp` this never panics, which matters for axes whose
/// visible range is wider than their value domain.
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

#[must_use]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= scale * 1e-9
}

/// Whether `value` is an integer multiple of `step`, within `eps`.
#[must_use]
pub fn is_multiple(value: f64, step: f64, eps: f64) -> bool {
    if !value.is_finite() || !step.is_finite() || step <= 0.0 {
        return false;
    }
    let remainder = (value / step).round() * step - value;
    remainder.abs() <= eps
}

fn step_candidates(target: f64, steps: &[f64]) -> impl Iterator<Item = f64> + '_ {
    let exponent = target.log10().floor() as i32;
    (exponent - 1..=exponent + 1).flat_map(move |power| {
        let base = 10f64.powi(power);
        steps
            .iter()
            .copied()
            .filter(|step| step.is_finite() && *step > 0.0)
            .map(move |step| step * base)
    })
}

/// Picks the `steps × 10^k` candidate nearest to `target` in log space.
///
/// Returns `None` for non-finite or non-positive targets, or when `steps`
/// holds no usable candidate.
#[must_use]
pub fn nice_step(target: f64, steps: &[f64]) -> Option<f64> {
    if !target.is_finite() || target <= 0.0 {
        return None;
    }
    let log_target = target.ln();
    step_candidates(target, steps).min_by(|left, right| {
        let left_error = (left.ln() - log_target).abs();
        let right_error = (right.ln() - log_target).abs();
        left_error
            .total_cmp(&right_error)
            .then(left.total_cmp(right))
    })
}

/// Picks the smallest `steps × 10^k` candidate that is not below `target`.
#[must_use]
pub fn nice_step_ceil(target: f64, steps: &[f64]) -> Option<f64> {
    if !target.is_finite() || target <= 0.0 {
        return None;
    }
    let floor = target * (1.0 - 1e-9);
    step_candidates(target, steps)
        .filter(|candidate| *candidate >= floor)
        .min_by(f64::total_cmp)
}

/// Number of decimals needed to print multiples of `step` exactly.
#[must_use]
pub fn step_precision(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (0..=MAX_LABEL_PRECISION)
        .find(|precision| {
            let scaled = step * 10f64.powi(*precision as i32);
            (scaled - scaled.round()).abs() <= scaled.abs().max(1.0) * 1e-9
        })
        .unwrap_or(MAX_LABEL_PRECISION)
}

/// Formats `value` rounded to `precision` decimals, without trailing zeros or
/// binary float noise (`0.30000000000000004` prints as `0.3`).
#[must_use]
pub fn format_decimal(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp(precision.min(MAX_LABEL_PRECISION))
            .normalize()
            .to_string(),
        None => format!("{value:e}"),
    }
}
