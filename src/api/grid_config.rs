use crate::core::{CoordinateOptions, Orientation, Shape};

/// Update for one axis: a plain on/off toggle or a partial option set.
#[derive(Debug, Clone)]
pub enum AxisUpdate {
    Enabled(bool),
    Options(CoordinateOptions),
}

impl AxisUpdate {
    /// Options this update merges into the coordinate.
    #[must_use]
    pub fn to_options(&self) -> CoordinateOptions {
        match self {
            Self::Enabled(enabled) => CoordinateOptions {
                disabled: Some(!enabled),
                ..CoordinateOptions::default()
            },
            Self::Options(options) => options.clone(),
        }
    }

    /// Whether the axis is on after construction with this update.
    #[must_use]
    pub fn enables(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Options(options) => options.disabled != Some(true),
        }
    }
}

impl From<bool> for AxisUpdate {
    fn from(value: bool) -> Self {
        Self::Enabled(value)
    }
}

impl From<CoordinateOptions> for AxisUpdate {
    fn from(value: CoordinateOptions) -> Self {
        Self::Options(value)
    }
}

/// Partial grid update. Axes left as `None` keep their configuration.
#[derive(Debug, Clone, Default)]
pub struct GridUpdate {
    pub x: Option<AxisUpdate>,
    pub y: Option<AxisUpdate>,
    pub r: Option<AxisUpdate>,
    pub a: Option<AxisUpdate>,
}

impl GridUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_axis(mut self, orientation: Orientation, update: impl Into<AxisUpdate>) -> Self {
        *self.slot_mut(orientation) = Some(update.into());
        self
    }

    #[must_use]
    pub fn with_x(self, update: impl Into<AxisUpdate>) -> Self {
        self.with_axis(Orientation::X, update)
    }

    #[must_use]
    pub fn with_y(self, update: impl Into<AxisUpdate>) -> Self {
        self.with_axis(Orientation::Y, update)
    }

    #[must_use]
    pub fn with_r(self, update: impl Into<AxisUpdate>) -> Self {
        self.with_axis(Orientation::R, update)
    }

    #[must_use]
    pub fn with_a(self, update: impl Into<AxisUpdate>) -> Self {
        self.with_axis(Orientation::A, update)
    }

    #[must_use]
    pub fn axis(&self, orientation: Orientation) -> Option<&AxisUpdate> {
        match orientation {
            Orientation::X => self.x.as_ref(),
            Orientation::Y => self.y.as_ref(),
            Orientation::R => self.r.as_ref(),
            Orientation::A => self.a.as_ref(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Orientation::ALL
            .iter()
            .all(|orientation| self.axis(*orientation).is_none())
    }

    fn slot_mut(&mut self, orientation: Orientation) -> &mut Option<AxisUpdate> {
        match orientation {
            Orientation::X => &mut self.x,
            Orientation::Y => &mut self.y,
            Orientation::R => &mut self.r,
            Orientation::A => &mut self.a,
        }
    }
}

/// Construction-time grid configuration.
///
/// With no axis configured the grid starts as a plain x/y grid. Axes that are
/// not mentioned start disabled.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub shape: Shape,
    pub axes: GridUpdate,
    pub interactions: bool,
}

impl GridConfig {
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            axes: GridUpdate::default(),
            interactions: true,
        }
    }

    #[must_use]
    pub fn with_axis(mut self, orientation: Orientation, update: impl Into<AxisUpdate>) -> Self {
        self.axes = self.axes.with_axis(orientation, update);
        self
    }

    #[must_use]
    pub fn with_interactions(mut self, interactions: bool) -> Self {
        self.interactions = interactions;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Shape::default())
    }
}
