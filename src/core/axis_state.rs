use std::sync::Arc;

use serde::Serialize;

use crate::core::primitives::{clamp, nearly_equal};
use crate::core::{Color, Coordinate, Orientation, Padding, Shape};

/// Summary of the paired axis, linked after both states are computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OppositeAxis {
    pub orientation: Orientation,
    pub disabled: bool,
    pub offset: f64,
    pub range: f64,
    /// Value on this axis where the opposite axis line sits.
    pub axis_origin: f64,
}

impl OppositeAxis {
    #[must_use]
    pub fn of(state: &AxisState) -> Self {
        Self {
            orientation: state.orientation,
            disabled: state.disabled,
            offset: state.offset,
            range: state.range,
            axis_origin: state.coordinate.axis_origin,
        }
    }

    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        self.orientation.ratio(value, self.offset, self.range)
    }
}

/// Render-ready snapshot of one axis.
///
/// `lines`, `line_colors`, `ticks` and `labels` are index-aligned: entry `i`
/// of each describes the line at `lines[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct AxisState {
    #[serde(skip)]
    pub coordinate: Arc<Coordinate>,
    pub orientation: Orientation,
    pub disabled: bool,
    pub shape: Shape,
    pub opposite: Option<OppositeAxis>,

    pub range: f64,
    pub offset: f64,
    pub scale: f64,

    pub color: Option<Color>,
    pub axis_color: Option<Color>,
    pub axis_width: f64,
    pub line_width: f64,
    pub tick_align: f64,
    pub label_color: Option<Color>,
    pub padding: Padding,
    pub font_size: f64,
    pub font_family: String,

    pub lines: Vec<f64>,
    pub line_colors: Vec<Option<Color>>,
    pub ticks: Vec<Option<f64>>,
    pub labels: Vec<Option<String>>,
}

impl AxisState {
    /// Empty state for `coordinate`, filled in by the calculator.
    #[must_use]
    pub fn pending(coordinate: Arc<Coordinate>, shape: Shape) -> Self {
        Self {
            orientation: coordinate.orientation,
            disabled: coordinate.disabled,
            shape,
            opposite: None,
            range: 0.0,
            offset: 0.0,
            scale: coordinate.scale,
            color: None,
            axis_color: None,
            axis_width: coordinate.axis_width,
            line_width: coordinate.line_width,
            tick_align: coordinate.tick_align,
            label_color: None,
            padding: Padding::default(),
            font_size: 0.0,
            font_family: coordinate.font_family.clone(),
            lines: Vec::new(),
            line_colors: Vec::new(),
            ticks: Vec::new(),
            labels: Vec::new(),
            coordinate,
        }
    }

    /// Pixel extent of the surface along this axis.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.shape.extent(self.orientation)
    }

    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        self.coordinate.get_ratio(value, self)
    }

    #[must_use]
    pub fn coords(&self, values: &[f64]) -> Vec<[f64; 4]> {
        self.coordinate.get_coords(values, self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        let len = self.lines.len();
        self.line_colors.len() == len && self.ticks.len() == len && self.labels.len() == len
    }

    /// Where this axis' lines cross its axis line, as a 0..1 position along
    /// each line.
    #[must_use]
    pub fn axis_ratio(&self) -> Option<f64> {
        let opposite = self.opposite?;
        let ratio = opposite.ratio(self.coordinate.axis_origin);
        ratio.is_finite().then(|| clamp(ratio, 0.0, 1.0))
    }

    /// Ratio-space segment of the axis line, if it is drawn.
    #[must_use]
    pub fn axis_line(&self) -> Option<[f64; 4]> {
        if self.disabled || !self.coordinate.axis || self.axis_color.is_none() {
            return None;
        }
        let opposite = self.opposite?;
        let ratio = opposite.ratio(self.coordinate.axis_origin);
        ratio
            .is_finite()
            .then(|| opposite.orientation.segment(ratio))
    }

    /// Whether the label at `index` would sit on the opposite axis' origin.
    ///
    /// Only the cross axis yields: its origin label collides with the label
    /// the primary axis draws at the same spot.
    #[must_use]
    pub fn is_origin_label(&self, index: usize) -> bool {
        let Some(opposite) = self.opposite else {
            return false;
        };
        self.orientation == Orientation::Y
            && !opposite.disabled
            && self
                .lines
                .get(index)
                .is_some_and(|value| nearly_equal(*value, opposite.axis_origin))
    }

    /// Labels a renderer should draw, with their line index.
    pub fn visible_labels(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(index, label)| label.as_deref().map(|text| (index, text)))
            .filter(|(index, _)| !self.is_origin_label(*index))
    }
}
