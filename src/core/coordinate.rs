//! Per-axis configuration.
//!
//! A [`Coordinate`] holds the view state, limits, style and generation policy
//! of one axis. Partial updates travel as [`CoordinateOptions`] and are merged
//! in a fixed order: explicit options over the scaling policy defaults over
//! whatever the coordinate already holds.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::scaling::ScalingKind;
use crate::core::{AxisState, Color, Orientation, Padding, Shape};

/// Callback evaluated against the in-progress axis state.
pub struct Computed<T>(Arc<dyn Fn(&AxisState) -> T + Send + Sync>);

impl<T> Computed<T> {
    pub fn new(f: impl Fn(&AxisState) -> T + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, state: &AxisState) -> T {
        (self.0)(state)
    }
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Computed(..)")
    }
}

/// Extra entries keyed by axis value, kept in insertion order.
pub type KeyedValues<T> = IndexMap<OrderedFloat<f64>, T>;

/// Where grid line positions come from.
#[derive(Debug, Clone, Default)]
pub enum LineSource {
    Off,
    #[default]
    Policy,
    Fixed(Vec<f64>),
    Computed(Computed<Vec<f64>>),
}

/// Where tick lengths (pixels, `None` = no tick) come from.
#[derive(Debug, Clone, Default)]
pub enum TickSource {
    Off,
    #[default]
    Policy,
    /// Every line gets a tick twice the axis width.
    AxisWidth,
    Length(f64),
    Fixed(Vec<Option<f64>>),
    /// Ticks at explicit values, appended after the regular lines.
    Keyed(KeyedValues<f64>),
    Computed(Computed<Vec<Option<f64>>>),
}

/// Where label strings come from.
#[derive(Debug, Clone, Default)]
pub enum LabelSource {
    Off,
    #[default]
    Policy,
    Fixed(Vec<Option<String>>),
    /// Labels at explicit values, appended after the regular lines.
    Keyed(KeyedValues<String>),
    Computed(Computed<Vec<Option<String>>>),
}

/// A single style color: an alpha applied to the coordinate color, a literal
/// color spec, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleColor {
    Off,
    Alpha(f64),
    Literal(String),
}

/// Per-line color policy.
#[derive(Debug, Clone)]
pub enum LineColor {
    Off,
    /// Same color for every line.
    Uniform(StyleColor),
    /// Major lines get the color, minor lines half its alpha.
    Graded(StyleColor),
    Fixed(Vec<Option<String>>),
    Computed(Computed<Vec<Option<Color>>>),
}

impl Default for LineColor {
    fn default() -> Self {
        Self::Graded(StyleColor::Alpha(0.4))
    }
}

/// Value that is either fixed or derived from the axis state.
#[derive(Debug, Clone)]
pub enum Setting<T> {
    Constant(T),
    Computed(Computed<T>),
}

/// Font size in pixels or as a CSS length such as `"11pt"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FontSize {
    Px(f64),
    Css(String),
}

/// Label text formatter.
#[derive(Clone, Default)]
pub enum LabelFormat {
    /// Scaling policy formatting.
    #[default]
    Auto,
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl LabelFormat {
    pub fn custom(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }
}

impl fmt::Debug for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Configuration and view state of one axis.
#[derive(Debug, Clone)]
pub struct Coordinate {
    pub orientation: Orientation,
    pub scaling: ScalingKind,
    pub name: String,
    pub units: String,

    pub offset: f64,
    pub scale: f64,
    pub origin: f64,
    pub min: f64,
    pub max: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub pan: bool,
    pub zoom: bool,
    pub disabled: bool,

    pub color: String,
    pub line_color: LineColor,
    pub line_width: f64,
    pub axis: bool,
    pub axis_origin: f64,
    pub axis_color: StyleColor,
    /// Falls back to `line_width` when zero.
    pub axis_width: f64,
    pub tick: f64,
    pub tick_align: f64,
    pub padding: Setting<Padding>,
    pub font_size: FontSize,
    pub font_family: String,

    pub lines: LineSource,
    pub ticks: TickSource,
    pub labels: LabelSource,
    /// Target pixel spacing between generated lines.
    pub distance: f64,
    /// Candidate step mantissas used by the scaling policy.
    pub steps: SmallVec<[f64; 9]>,
    pub format: LabelFormat,
}

impl Coordinate {
    /// Built-in defaults overlaid with the linear policy defaults.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        let mut coordinate = Self {
            orientation,
            scaling: ScalingKind::Linear,
            name: String::new(),
            units: String::new(),
            offset: 0.0,
            scale: 1.0,
            origin: 0.5,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            min_zoom: 0.01,
            max_zoom: 10.0,
            min_scale: 1.192_092_90e-13,
            max_scale: f64::MAX,
            pan: true,
            zoom: true,
            disabled: false,
            color: "rgb(0,0,0,1)".to_owned(),
            line_color: LineColor::default(),
            line_width: 1.0,
            axis: true,
            axis_origin: 0.0,
            axis_color: StyleColor::Alpha(0.8),
            axis_width: 1.5,
            tick: 8.0,
            tick_align: 0.5,
            padding: Setting::Constant(Padding::default()),
            font_size: FontSize::Css("11pt".to_owned()),
            font_family: "sans-serif".to_owned(),
            lines: LineSource::Policy,
            ticks: TickSource::Policy,
            labels: LabelSource::Policy,
            distance: 13.0,
            steps: SmallVec::new(),
            format: LabelFormat::Auto,
        };
        coordinate.apply_scaling_defaults(ScalingKind::Linear);
        coordinate
    }

    /// Visible span in value units for the given surface.
    #[must_use]
    pub fn get_range(&self, shape: Shape) -> f64 {
        shape.extent(self.orientation) * self.scale
    }

    /// Position of `value` within the visible range of `state`, as 0..1.
    #[must_use]
    pub fn get_ratio(&self, value: f64, state: &AxisState) -> f64 {
        self.orientation.ratio(value, state.offset, state.range)
    }

    /// One ratio-space segment `[x1, y1, x2, y2]` per value.
    #[must_use]
    pub fn get_coords(&self, values: &[f64], state: &AxisState) -> Vec<[f64; 4]> {
        values
            .iter()
            .map(|value| self.orientation.segment(self.get_ratio(*value, state)))
            .collect()
    }

    /// Label text for `value`: the custom formatter if set, otherwise the
    /// scaling policy's formatting at the step of `state`.
    #[must_use]
    pub fn format(&self, value: f64, state: &AxisState) -> String {
        self.scaling.policy().format_label(value, state)
    }

    /// Switches the scaling policy and takes over its option defaults.
    pub fn apply_scaling_defaults(&mut self, kind: ScalingKind) {
        self.scaling = kind;
        self.apply(&kind.defaults());
    }

    /// Merges a partial update. A `scaling` name swaps in that policy's
    /// defaults before the rest of the options; an unknown name keeps the
    /// current policy.
    pub fn merge(&mut self, options: &CoordinateOptions) {
        if let Some(name) = &options.scaling {
            match name.parse::<ScalingKind>() {
                Ok(kind) => self.apply_scaling_defaults(kind),
                Err(err) => warn!(
                    axis = self.orientation.name(),
                    error = %err,
                    current = self.scaling.name(),
                    "keeping previous scaling policy"
                ),
            }
        }
        self.apply(options);
    }

    fn apply(&mut self, options: &CoordinateOptions) {
        let target: &mut Self = self;
        macro_rules! take {
            ($($field:ident),+ $(,)?) => {
                $(if let Some(value) = &options.$field {
                    target.$field = value.clone();
                })+
            };
        }
        take!(
            name,
            units,
            offset,
            scale,
            origin,
            min,
            max,
            min_zoom,
            max_zoom,
            min_scale,
            max_scale,
            pan,
            zoom,
            disabled,
            color,
            line_color,
            line_width,
            axis,
            axis_origin,
            axis_color,
            axis_width,
            tick,
            tick_align,
            padding,
            font_size,
            font_family,
            lines,
            ticks,
            labels,
            distance,
            steps,
            format,
        );
    }
}

/// Partial coordinate update. `None` fields leave the target untouched.
#[derive(Debug, Clone, Default)]
pub struct CoordinateOptions {
    /// Scaling policy name (`"linear"`, `"logarithmic"`, `"time"`).
    pub scaling: Option<String>,
    pub name: Option<String>,
    pub units: Option<String>,
    pub offset: Option<f64>,
    pub scale: Option<f64>,
    pub origin: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub min_scale: Option<f64>,
    pub max_scale: Option<f64>,
    pub pan: Option<bool>,
    pub zoom: Option<bool>,
    pub disabled: Option<bool>,
    pub color: Option<String>,
    pub line_color: Option<LineColor>,
    pub line_width: Option<f64>,
    pub axis: Option<bool>,
    pub axis_origin: Option<f64>,
    pub axis_color: Option<StyleColor>,
    pub axis_width: Option<f64>,
    pub tick: Option<f64>,
    pub tick_align: Option<f64>,
    pub padding: Option<Setting<Padding>>,
    pub font_size: Option<FontSize>,
    pub font_family: Option<String>,
    pub lines: Option<LineSource>,
    pub ticks: Option<TickSource>,
    pub labels: Option<LabelSource>,
    pub distance: Option<f64>,
    pub steps: Option<SmallVec<[f64; 9]>>,
    pub format: Option<LabelFormat>,
}

impl CoordinateOptions {
    #[must_use]
    pub fn with_scaling(mut self, kind: ScalingKind) -> Self {
        self.scaling = Some(kind.name().to_owned());
        self
    }

    #[must_use]
    pub fn with_view(mut self, offset: f64, scale: f64) -> Self {
        self.offset = Some(offset);
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Sets the value-domain clamp bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = Some(min_zoom);
        self.max_zoom = Some(max_zoom);
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, pan: bool, zoom: bool) -> Self {
        self.pan = Some(pan);
        self.zoom = Some(zoom);
        self
    }

    #[must_use]
    pub fn with_lines(mut self, lines: LineSource) -> Self {
        self.lines = Some(lines);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickSource) -> Self {
        self.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelSource) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, line_color: LineColor) -> Self {
        self.line_color = Some(line_color);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Setting<Padding>) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = Some(font_size);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LabelFormat) -> Self {
        self.format = Some(format);
        self
    }
}
