pub mod axis_state;
pub mod calculator;
pub mod coordinate;
pub mod orientation;
pub mod primitives;
pub mod scaling;
pub mod style;
pub mod types;

pub use axis_state::{AxisState, OppositeAxis};
pub use calculator::calc_coordinate;
pub use coordinate::{
    Computed, Coordinate, CoordinateOptions, FontSize, KeyedValues, LabelFormat, LabelSource,
    LineColor, LineSource, Setting, StyleColor, TickSource,
};
pub use scaling::{ScalingKind, ScalingPolicy};
pub use style::{Color, CssStyleResolver, StyleResolver};
pub use types::{Orientation, Padding, Shape};
