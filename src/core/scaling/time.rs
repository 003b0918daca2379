use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::AxisState;
use crate::core::primitives::{format_decimal, nice_step};

use super::{MAX_GENERATED_LINES, ScalingPolicy, multiples_in, usable_span};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
/// Average Gregorian month, used only to rank calendar steps.
const MONTH: f64 = 2_629_746.0;
/// Average Gregorian year, used only to rank calendar steps.
const YEAR: f64 = 31_556_952.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    const fn seconds(self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => MINUTE,
            Self::Hour => HOUR,
            Self::Day => DAY,
            Self::Month => MONTH,
            Self::Year => YEAR,
        }
    }

    const fn is_calendar(self) -> bool {
        matches!(self, Self::Month | Self::Year)
    }
}

/// One rung of the time step ladder, e.g. 15 minutes or 3 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeStep {
    pub count: u32,
    pub unit: TimeUnit,
}

impl TimeStep {
    #[must_use]
    pub const fn new(count: u32, unit: TimeUnit) -> Self {
        Self { count, unit }
    }

    /// Nominal length in seconds.
    #[must_use]
    pub fn seconds(self) -> f64 {
        f64::from(self.count) * self.unit.seconds()
    }
}

const LADDER: [TimeStep; 23] = [
    TimeStep::new(1, TimeUnit::Second),
    TimeStep::new(2, TimeUnit::Second),
    TimeStep::new(5, TimeUnit::Second),
    TimeStep::new(10, TimeUnit::Second),
    TimeStep::new(15, TimeUnit::Second),
    TimeStep::new(30, TimeUnit::Second),
    TimeStep::new(1, TimeUnit::Minute),
    TimeStep::new(2, TimeUnit::Minute),
    TimeStep::new(5, TimeUnit::Minute),
    TimeStep::new(10, TimeUnit::Minute),
    TimeStep::new(15, TimeUnit::Minute),
    TimeStep::new(30, TimeUnit::Minute),
    TimeStep::new(1, TimeUnit::Hour),
    TimeStep::new(2, TimeUnit::Hour),
    TimeStep::new(3, TimeUnit::Hour),
    TimeStep::new(6, TimeUnit::Hour),
    TimeStep::new(12, TimeUnit::Hour),
    TimeStep::new(1, TimeUnit::Day),
    TimeStep::new(2, TimeUnit::Day),
    TimeStep::new(7, TimeUnit::Day),
    TimeStep::new(1, TimeUnit::Month),
    TimeStep::new(3, TimeUnit::Month),
    TimeStep::new(6, TimeUnit::Month),
];

/// Calendar-aware lines over unix seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time;

impl Time {
    /// Ladder step nearest, in log space, to `distance` pixels of axis.
    #[must_use]
    pub fn step(state: &AxisState) -> Option<TimeStep> {
        let (extent, range) = usable_span(state)?;
        Self::step_for(range * state.coordinate.distance / extent)
    }

    /// Ladder step nearest to `target` seconds.
    #[must_use]
    pub fn step_for(target: f64) -> Option<TimeStep> {
        if !target.is_finite() || target <= 0.0 {
            return None;
        }
        if target >= YEAR {
            let years = nice_step(target / YEAR, &[1.0, 2.0, 5.0])?.max(1.0);
            if years > f64::from(u32::MAX) {
                return None;
            }
            return Some(TimeStep::new(years.round() as u32, TimeUnit::Year));
        }
        let log_target = target.ln();
        LADDER
            .iter()
            .chain(std::iter::once(&TimeStep::new(1, TimeUnit::Year)))
            .copied()
            .min_by(|left, right| {
                let left_error = (left.seconds().ln() - log_target).abs();
                let right_error = (right.seconds().ln() - log_target).abs();
                left_error.total_cmp(&right_error)
            })
    }

    fn calendar_lines(start: f64, end: f64, step: TimeStep) -> Vec<f64> {
        let Some(first) = to_datetime(start) else {
            return Vec::new();
        };
        let count = i64::from(step.count.max(1));
        let months_per_step = match step.unit {
            TimeUnit::Year => count * 12,
            _ => count,
        };
        let month_index = i64::from(first.year()) * 12 + i64::from(first.month0());
        let mut index = month_index - month_index.rem_euclid(months_per_step);

        let mut lines = Vec::new();
        while let Some(timestamp) = month_start(index) {
            if timestamp >= end || lines.len() as f64 >= MAX_GENERATED_LINES {
                break;
            }
            if timestamp >= start {
                lines.push(timestamp);
            }
            index += months_per_step;
        }
        lines
    }
}

fn to_datetime(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(value.floor() as i64, 0)
}

/// Unix seconds of midnight UTC on the first day of `index` (`year * 12 + month0`).
fn month_start(index: i64) -> Option<f64> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    let midnight = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp() as f64)
}

impl ScalingPolicy for Time {
    fn lines(&self, state: &AxisState) -> Vec<f64> {
        let Some(step) = Self::step(state) else {
            return Vec::new();
        };
        let start = state.offset;
        let end = state.offset + state.range;
        if step.unit.is_calendar() {
            Self::calendar_lines(start, end, step)
        } else {
            multiples_in(start, end, step.seconds())
        }
    }

    fn is_major_line(&self, value: f64, state: &AxisState) -> bool {
        let (Some(step), Some(time)) = (Self::step(state), to_datetime(value)) else {
            return false;
        };
        let midnight = time.num_seconds_from_midnight() == 0;
        match step.unit {
            TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour => midnight,
            TimeUnit::Day => midnight && time.day() == 1,
            TimeUnit::Month => midnight && time.day() == 1 && time.month() == 1,
            TimeUnit::Year => time.year() % 10 == 0,
        }
    }

    fn is_label(&self, _value: f64, state: &AxisState) -> bool {
        Self::step(state).is_some()
    }

    fn label_text(&self, value: f64, state: &AxisState) -> String {
        let (Some(step), Some(time)) = (Self::step(state), to_datetime(value)) else {
            return format_decimal(value, 0);
        };
        let major = self.is_major_line(value, state);
        let pattern = match (step.unit, major) {
            (TimeUnit::Second, false) => "%H:%M:%S",
            (TimeUnit::Minute | TimeUnit::Hour, false) => "%H:%M",
            (TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour, true) => "%b %d",
            (TimeUnit::Day, false) => "%b %d",
            (TimeUnit::Day, true) | (TimeUnit::Month, false) => "%b %Y",
            (TimeUnit::Month, true) | (TimeUnit::Year, _) => "%Y",
        };
        time.format(pattern).to_string()
    }
}
