//! Turns a [`Coordinate`] and a surface [`Shape`] into a render-ready
//! [`AxisState`].
//!
//! Resolution never fails: bad colors, units or padding degrade to defaults
//! with a warning, and degenerate geometry yields an axis without lines.

use std::sync::Arc;

use tracing::{trace, warn};

use crate::core::coordinate::{
    FontSize, LabelSource, LineColor, LineSource, Setting, StyleColor, TickSource,
};
use crate::core::primitives::clamp;
use crate::core::{AxisState, Color, Coordinate, Padding, Shape, StyleResolver};

/// Alpha factor applied to minor lines under [`LineColor::Graded`].
pub const MINOR_ALPHA: f64 = 0.5;

/// Font size used when the configured one cannot be resolved (11pt).
pub const FALLBACK_FONT_PX: f64 = 11.0 * 96.0 / 72.0;

/// Computes the full state of one axis.
pub fn calc_coordinate(
    coordinate: Arc<Coordinate>,
    shape: Shape,
    resolver: &dyn StyleResolver,
) -> AxisState {
    let mut state = AxisState::pending(Arc::clone(&coordinate), shape);
    let axis = coordinate.orientation.name();

    state.range = coordinate.get_range(shape);
    state.offset = clamp(
        coordinate.offset - state.range * clamp(coordinate.origin, 0.0, 1.0),
        coordinate.min.max(-f64::MAX + 1.0),
        coordinate.max.min(f64::MAX) - state.range,
    );
    if coordinate.disabled {
        return state;
    }

    state.color = resolve_literal(resolver, &coordinate.color, axis, "color");
    state.axis_color = resolve_style(resolver, &coordinate.axis_color, state.color, axis);
    state.label_color = state.color;
    if coordinate.axis_width == 0.0 {
        state.axis_width = coordinate.line_width;
    }
    state.padding = resolve_padding(&coordinate.padding, &state);
    state.font_size = resolve_font_size(resolver, &coordinate.font_size, axis);

    let extent = shape.extent(coordinate.orientation);
    if !(state.range.is_finite() && state.range > 0.0 && extent > 0.0) {
        trace!(axis, range = state.range, "degenerate axis range, no lines");
        return state;
    }

    let policy = coordinate.scaling.policy();
    state.lines = match &coordinate.lines {
        LineSource::Off => Vec::new(),
        LineSource::Policy => policy.lines(&state),
        LineSource::Fixed(lines) => lines.clone(),
        LineSource::Computed(lines) => lines.call(&state),
    };
    let len = state.lines.len();

    let line_colors = match &coordinate.line_color {
        LineColor::Off => vec![None; len],
        LineColor::Uniform(style) => vec![resolve_style(resolver, style, state.color, axis); len],
        LineColor::Graded(style) => {
            let major = resolve_style(resolver, style, state.color, axis);
            let minor = major.map(|color| resolver.apply_alpha(color, color.alpha * MINOR_ALPHA));
            state
                .lines
                .iter()
                .map(|value| {
                    if policy.is_major_line(*value, &state) {
                        major
                    } else {
                        minor
                    }
                })
                .collect()
        }
        LineColor::Fixed(literals) => fit(
            literals
                .iter()
                .map(|literal| {
                    literal
                        .as_deref()
                        .and_then(|text| resolve_literal(resolver, text, axis, "line color"))
                })
                .collect(),
            len,
        ),
        LineColor::Computed(colors) => fit(colors.call(&state), len),
    };

    let ticks = match &coordinate.ticks {
        TickSource::Off | TickSource::Keyed(_) => vec![None; len],
        TickSource::Policy => fit(policy.ticks(&state), len),
        TickSource::AxisWidth => vec![Some(2.0 * state.axis_width); len],
        TickSource::Length(length) => vec![Some(*length); len],
        TickSource::Fixed(ticks) => fit(ticks.clone(), len),
        TickSource::Computed(ticks) => fit(ticks.call(&state), len),
    };

    let labels = match &coordinate.labels {
        LabelSource::Off | LabelSource::Keyed(_) => vec![None; len],
        LabelSource::Policy => fit(policy.labels(&state), len),
        LabelSource::Fixed(labels) => fit(labels.clone(), len),
        LabelSource::Computed(labels) => fit(labels.call(&state), len),
    };

    let lines = std::mem::take(&mut state.lines);
    let rows = lines.into_iter().zip(line_colors).zip(ticks).zip(labels);
    for (((value, color), tick), label) in rows {
        if value.is_finite() {
            state.lines.push(value);
            state.line_colors.push(color);
            state.ticks.push(tick);
            state.labels.push(label);
        }
    }

    if let TickSource::Keyed(keyed) = &coordinate.ticks {
        for (value, length) in keyed.iter().filter(|(value, _)| value.is_finite()) {
            state.lines.push(value.into_inner());
            state.line_colors.push(None);
            state.ticks.push(Some(*length));
            state.labels.push(None);
        }
    }
    if let LabelSource::Keyed(keyed) = &coordinate.labels {
        for (value, text) in keyed.iter().filter(|(value, _)| value.is_finite()) {
            state.lines.push(value.into_inner());
            state.line_colors.push(None);
            state.ticks.push(None);
            state.labels.push(Some(text.clone()));
        }
    }

    trace!(
        axis,
        scaling = coordinate.scaling.name(),
        offset = state.offset,
        range = state.range,
        lines = state.lines.len(),
        "axis state computed"
    );
    state
}

fn fit<T: Clone>(mut values: Vec<Option<T>>, len: usize) -> Vec<Option<T>> {
    values.resize(len, None);
    values
}

fn resolve_literal(
    resolver: &dyn StyleResolver,
    literal: &str,
    axis: &'static str,
    field: &'static str,
) -> Option<Color> {
    match resolver.resolve_color(literal) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!(axis, field, error = %err, "dropping unresolvable color");
            None
        }
    }
}

fn resolve_style(
    resolver: &dyn StyleResolver,
    style: &StyleColor,
    base: Option<Color>,
    axis: &'static str,
) -> Option<Color> {
    match style {
        StyleColor::Off => None,
        StyleColor::Alpha(alpha) => base.map(|color| resolver.apply_alpha(color, *alpha)),
        StyleColor::Literal(literal) => resolve_literal(resolver, literal, axis, "style color"),
    }
}

fn resolve_padding(padding: &Setting<Padding>, state: &AxisState) -> Padding {
    let resolved = match padding {
        Setting::Constant(padding) => *padding,
        Setting::Computed(padding) => padding.call(state),
    };
    if resolved.is_finite() {
        resolved
    } else {
        warn!(axis = state.orientation.name(), ?resolved, "ignoring non-finite padding");
        Padding::default()
    }
}

fn resolve_font_size(
    resolver: &dyn StyleResolver,
    font_size: &FontSize,
    axis: &'static str,
) -> f64 {
    let resolved = match font_size {
        FontSize::Px(px) => Ok(*px),
        FontSize::Css(literal) => resolver
            .parse_unit(literal)
            .and_then(|(value, unit)| Ok(value * resolver.unit_to_pixels(&unit)?)),
    };
    match resolved {
        Ok(px) if px.is_finite() && px > 0.0 => px,
        Ok(px) => {
            warn!(axis, px, "font size out of range, using 11pt");
            FALLBACK_FONT_PX
        }
        Err(err) => {
            warn!(axis, error = %err, "unresolvable font size, using 11pt");
            FALLBACK_FONT_PX
        }
    }
}
