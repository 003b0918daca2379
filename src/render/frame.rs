use serde::Serialize;

use crate::api::GridState;
use crate::core::{AxisState, Orientation, Shape};
use crate::error::{GridError, GridResult};
use crate::render::{LabelAnchor, Segment, StrokeBatch};

/// Draw-ready geometry of one enabled axis, in ratio space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisFrame {
    pub orientation: Orientation,
    /// Grid lines grouped by color.
    pub lines: Vec<StrokeBatch>,
    pub ticks: Option<StrokeBatch>,
    pub axis: Option<StrokeBatch>,
    pub labels: Vec<LabelAnchor>,
}

impl AxisFrame {
    /// Builds the frame of one axis; disabled axes have none.
    #[must_use]
    pub fn from_axis(state: &AxisState) -> Option<Self> {
        if state.disabled {
            return None;
        }
        let segments: Vec<Segment> = state
            .coords(&state.lines)
            .into_iter()
            .map(Segment::from)
            .collect();
        Some(Self {
            orientation: state.orientation,
            lines: line_batches(state, &segments),
            ticks: tick_batch(state, &segments),
            axis: axis_batch(state),
            labels: label_anchors(state, &segments),
        })
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.iter().map(|batch| batch.segments.len()).sum()
    }

    pub fn validate(&self) -> GridResult<()> {
        self.lines.iter().try_for_each(StrokeBatch::validate)?;
        self.ticks.iter().try_for_each(StrokeBatch::validate)?;
        self.axis.iter().try_for_each(StrokeBatch::validate)?;
        self.labels.iter().try_for_each(LabelAnchor::validate)
    }
}

/// Backend-agnostic scene for one grid draw pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridFrame {
    pub shape: Shape,
    pub axes: Vec<AxisFrame>,
}

impl GridFrame {
    #[must_use]
    pub fn from_state(state: &GridState) -> Self {
        Self {
            shape: state.shape,
            axes: state.axes().filter_map(AxisFrame::from_axis).collect(),
        }
    }

    #[must_use]
    pub fn axis(&self, orientation: Orientation) -> Option<&AxisFrame> {
        self.axes.iter().find(|axis| axis.orientation == orientation)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.axes.iter().map(AxisFrame::line_count).sum()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.axes.iter().map(|axis| axis.labels.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0 && self.label_count() == 0
    }

    pub fn validate(&self) -> GridResult<()> {
        if !self.shape.is_valid() {
            return Err(GridError::InvalidShape {
                width: self.shape.width,
                height: self.shape.height,
            });
        }
        self.axes.iter().try_for_each(AxisFrame::validate)
    }
}

fn line_batches(state: &AxisState, segments: &[Segment]) -> Vec<StrokeBatch> {
    if !state.line_width.is_finite() || state.line_width <= 0.0 {
        return Vec::new();
    }
    let mut batches: Vec<StrokeBatch> = Vec::new();
    for (segment, color) in segments.iter().zip(&state.line_colors) {
        let Some(color) = color.filter(|_| segment.is_finite()) else {
            continue;
        };
        match batches.iter_mut().find(|batch| batch.color == color) {
            Some(batch) => batch.segments.push(*segment),
            None => batches.push(StrokeBatch {
                color,
                width: state.line_width,
                segments: vec![*segment],
            }),
        }
    }
    batches
}

/// Point where a line meets the axis, and the line's unit direction.
fn anchor(segment: Segment, axis_ratio: f64) -> Option<([f64; 2], [f64; 2])> {
    let dx = segment.x2 - segment.x1;
    let dy = segment.y2 - segment.y1;
    let length = dx.hypot(dy);
    if !length.is_finite() || length == 0.0 {
        return None;
    }
    Some((
        [segment.x1 + dx * axis_ratio, segment.y1 + dy * axis_ratio],
        [dx / length, dy / length],
    ))
}

fn tick_batch(state: &AxisState, segments: &[Segment]) -> Option<StrokeBatch> {
    let color = state.axis_color?;
    let width = state.shape.width - state.padding.horizontal();
    let height = state.shape.height - state.padding.vertical();
    if width <= 0.0 || height <= 0.0 || state.axis_width <= 0.0 {
        return None;
    }
    let axis_ratio = state.axis_ratio().unwrap_or(0.0);
    let align = state.tick_align;
    let ticks: Vec<Segment> = segments
        .iter()
        .zip(&state.ticks)
        .filter_map(|(segment, tick)| {
            let tick = tick.filter(|tick| tick.is_finite() && *tick > 0.0)?;
            let ([x, y], [nx, ny]) = anchor(*segment, axis_ratio)?;
            let (tx, ty) = (nx * tick / width, ny * tick / height);
            Some(Segment::new(
                x + tx * align,
                y + ty * align,
                x - tx * (1.0 - align),
                y - ty * (1.0 - align),
            ))
        })
        .collect();
    (!ticks.is_empty()).then(|| StrokeBatch {
        color,
        width: state.axis_width,
        segments: ticks,
    })
}

fn axis_batch(state: &AxisState) -> Option<StrokeBatch> {
    let color = state.axis_color?;
    let line = state.axis_line()?;
    (state.axis_width > 0.0).then(|| StrokeBatch {
        color,
        width: state.axis_width,
        segments: vec![Segment::from(line)],
    })
}

fn label_anchors(state: &AxisState, segments: &[Segment]) -> Vec<LabelAnchor> {
    let Some(color) = state.label_color else {
        return Vec::new();
    };
    let axis_ratio = state.axis_ratio().unwrap_or(0.0);
    let indent = state.axis_width + 1.5;
    let text_offset = if state.tick_align < 0.5 {
        -state.font_size - state.axis_width * 2.0
    } else {
        state.axis_width
    };
    state
        .visible_labels()
        .filter_map(|(index, text)| {
            let ([x, y], _) = anchor(*segments.get(index)?, axis_ratio)?;
            Some(LabelAnchor {
                orientation: state.orientation,
                text: text.to_owned(),
                x,
                y,
                dx: indent,
                dy: text_offset,
                color,
                font_size: state.font_size,
                font_family: state.font_family.clone(),
            })
        })
        .collect()
}
