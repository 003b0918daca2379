use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::primitives::clamp;
use crate::core::{
    AxisState, Coordinate, CoordinateOptions, CssStyleResolver, OppositeAxis, Orientation, Shape,
    StyleResolver, calc_coordinate,
};
use crate::error::GridResult;
use crate::extensions::{GridEvent, GridPlugin};
use crate::interaction::{InteractionDelta, apply_delta};
use crate::render::Renderer;

use super::{GridConfig, GridState, GridUpdate};

/// Owner of the axis coordinates and the current [`GridState`].
///
/// Every update runs synchronously: options are merged, view limits are
/// enforced, all axis states are recomputed and cross-linked, and plugins are
/// notified before the call returns.
pub struct Grid<R: Renderer> {
    pub(super) renderer: R,
    pub(super) shape: Shape,
    pub(super) coordinates: [Arc<Coordinate>; 4],
    pub(super) state: GridState,
    pub(super) resolver: Box<dyn StyleResolver>,
    pub(super) plugins: Vec<Box<dyn GridPlugin>>,
    pub(super) interactions: bool,
}

impl<R: Renderer> Grid<R> {
    pub fn new(renderer: R, config: GridConfig) -> GridResult<Self> {
        let shape = config.shape.validate()?;
        let default_axes = config.axes.is_empty();
        let coordinates = Orientation::ALL.map(|orientation| {
            let mut coordinate = Coordinate::new(orientation);
            coordinate.disabled = true;
            match config.axes.axis(orientation) {
                Some(update) => {
                    coordinate.merge(&update.to_options());
                    coordinate.disabled = !update.enables();
                }
                None if default_axes => {
                    coordinate.disabled = !matches!(orientation, Orientation::X | Orientation::Y);
                }
                None => {}
            }
            Arc::new(coordinate)
        });

        let resolver: Box<dyn StyleResolver> = Box::new(CssStyleResolver);
        let state = compute_state(&coordinates, shape, resolver.as_ref());
        let mut grid = Self {
            renderer,
            shape,
            coordinates,
            state,
            resolver,
            plugins: Vec::new(),
            interactions: config.interactions,
        };
        grid.refresh();
        Ok(grid)
    }

    /// Replaces the color/unit resolver and recomputes.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl StyleResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self.refresh();
        self
    }

    /// Merges `options`, re-clamps every enabled axis and recomputes all
    /// states.
    pub fn update(&mut self, options: GridUpdate) -> &mut Self {
        for orientation in Orientation::ALL {
            if let Some(update) = options.axis(orientation) {
                let coordinate = Arc::make_mut(&mut self.coordinates[orientation.index()]);
                coordinate.merge(&update.to_options());
            }
        }

        for coordinate in &mut self.coordinates {
            if coordinate.disabled {
                continue;
            }
            let coordinate = Arc::make_mut(coordinate);
            enforce_limits(coordinate, self.shape);
        }

        self.state = compute_state(&self.coordinates, self.shape, self.resolver.as_ref());
        debug!(
            width = self.shape.width,
            height = self.shape.height,
            x_lines = self.state.x.len(),
            y_lines = self.state.y.len(),
            "grid updated"
        );
        self.emit(&GridEvent::Update { options });
        self
    }

    /// Recomputes with the current configuration.
    pub fn refresh(&mut self) -> &mut Self {
        self.update(GridUpdate::default())
    }

    /// Applies a new surface size and recomputes.
    pub fn resize(&mut self, shape: Shape) -> GridResult<&mut Self> {
        self.shape = shape.validate()?;
        Ok(self.refresh())
    }

    /// Turns a pan/zoom delta into offset/scale updates for every enabled
    /// axis. Ignored while interactions are off.
    pub fn apply_interaction(&mut self, delta: InteractionDelta) -> &mut Self {
        if !self.interactions {
            debug!(?delta, "interactions disabled, ignoring delta");
            return self;
        }

        let mut update = GridUpdate::default();
        for coordinate in self.coordinates.iter().filter(|coordinate| !coordinate.disabled) {
            let view = apply_delta(coordinate, self.shape, delta);
            if !view.offset.is_finite() || !view.scale.is_finite() {
                warn!(
                    axis = coordinate.orientation.name(),
                    offset = view.offset,
                    scale = view.scale,
                    "dropping non-finite interaction result"
                );
                continue;
            }
            update = update.with_axis(
                coordinate.orientation,
                CoordinateOptions::default().with_view(view.offset, view.scale),
            );
        }

        self.update(update);
        self.emit(&GridEvent::Interact { delta });
        self
    }

    pub fn set_interactions(&mut self, interactions: bool) {
        self.interactions = interactions;
    }

    #[must_use]
    pub fn interactions(&self) -> bool {
        self.interactions
    }

    #[must_use]
    pub fn state(&self) -> &GridState {
        &self.state
    }

    #[must_use]
    pub fn coordinate(&self, orientation: Orientation) -> &Coordinate {
        &self.coordinates[orientation.index()]
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Hands the current state to the renderer.
    pub fn render(&mut self) -> GridResult<()> {
        self.renderer.render(&self.state)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Keeps scale inside its zoom and scale limits and offset inside the value
/// domain.
fn enforce_limits(coordinate: &mut Coordinate, shape: Shape) {
    coordinate.scale = clamp(
        coordinate.scale,
        coordinate.min_zoom.max(coordinate.min_scale),
        coordinate.max_zoom.min(coordinate.max_scale),
    );
    let range = coordinate.get_range(shape);
    coordinate.offset = clamp(
        coordinate.offset,
        coordinate.min,
        (coordinate.max - range).max(coordinate.min),
    );
}

fn compute_state(
    coordinates: &[Arc<Coordinate>; 4],
    shape: Shape,
    resolver: &dyn StyleResolver,
) -> GridState {
    let [mut x, mut y, mut r, mut a] = coordinates
        .each_ref()
        .map(|coordinate| calc_coordinate(Arc::clone(coordinate), shape, resolver));
    link(&mut x, &mut y);
    link(&mut r, &mut a);
    GridState {
        shape,
        x,
        y,
        r: (!r.disabled).then_some(r),
        a: (!a.disabled).then_some(a),
    }
}

fn link(first: &mut AxisState, second: &mut AxisState) {
    first.opposite = Some(OppositeAxis::of(second));
    second.opposite = Some(OppositeAxis::of(first));
}
