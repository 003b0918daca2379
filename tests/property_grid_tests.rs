use std::sync::Arc;

use plot_grid::api::{Grid, GridConfig, GridUpdate};
use plot_grid::core::{
    AxisState, Coordinate, CoordinateOptions, CssStyleResolver, Orientation, ScalingKind, Shape,
    calc_coordinate,
};
use plot_grid::interaction::InteractionDelta;
use plot_grid::render::NullRenderer;
use proptest::prelude::*;

fn scaling_kind() -> impl Strategy<Value = ScalingKind> {
    prop_oneof![
        Just(ScalingKind::Linear),
        Just(ScalingKind::Logarithmic),
        Just(ScalingKind::Time),
    ]
}

fn compute(coordinate: Coordinate, width: f64) -> AxisState {
    calc_coordinate(Arc::new(coordinate), Shape::new(width, 100.0), &CssStyleResolver)
}

proptest! {
    #[test]
    fn origin_value_maps_to_origin_ratio(
        offset in -1_000_000.0f64..1_000_000.0,
        scale in 0.01f64..100.0,
        origin in 0.0f64..=1.0,
        width in 100.0f64..2_000.0
    ) {
        let mut coordinate = Coordinate::new(Orientation::X);
        coordinate.merge(
            &CoordinateOptions::default()
                .with_view(offset, scale)
                .with_origin(origin),
        );
        let state = compute(coordinate, width);
        prop_assert!((state.ratio(offset) - origin).abs() <= 1e-6);
    }

    #[test]
    fn axis_arrays_stay_aligned(
        kind in scaling_kind(),
        offset in -1_000_000.0f64..1_000_000.0,
        scale in 0.0001f64..1_000.0,
        width in 0.0f64..2_000.0
    ) {
        let mut coordinate = Coordinate::new(Orientation::X);
        coordinate.apply_scaling_defaults(kind);
        coordinate.merge(&CoordinateOptions::default().with_view(offset, scale));
        let state = compute(coordinate, width);
        prop_assert!(state.is_aligned());
        prop_assert!(state.lines.iter().all(|value| value.is_finite()));
    }

    #[test]
    fn linear_lines_stay_inside_the_visible_range(
        offset in -1_000_000.0f64..1_000_000.0,
        scale in 0.001f64..1_000.0,
        width in 1.0f64..2_000.0
    ) {
        let mut coordinate = Coordinate::new(Orientation::X);
        coordinate.merge(&CoordinateOptions::default().with_view(offset, scale));
        let state = compute(coordinate, width);
        let tolerance = (state.range + state.offset.abs()) * 1e-9;
        for value in &state.lines {
            prop_assert!(*value >= state.offset - tolerance);
            prop_assert!(*value < state.offset + state.range + tolerance);
        }
    }

    #[test]
    fn update_clamping_is_idempotent(
        min in -1_000.0f64..0.0,
        span in 0.0f64..5_000.0,
        offset in -10_000.0f64..10_000.0,
        scale in 0.001f64..50.0
    ) {
        let mut grid = Grid::new(NullRenderer::default(), GridConfig::new(Shape::new(320.0, 240.0)))
            .expect("grid init");
        grid.update(GridUpdate::new().with_x(
            CoordinateOptions::default()
                .with_bounds(min, min + span)
                .with_view(offset, scale),
        ));
        let once = grid.coordinate(Orientation::X).clone();
        grid.refresh();
        let twice = grid.coordinate(Orientation::X);
        prop_assert_eq!(once.offset, twice.offset);
        prop_assert_eq!(once.scale, twice.scale);
    }

    #[test]
    fn zoom_preserves_value_under_cursor(
        dz in -60.0f64..60.0,
        cursor_x in 0.0f64..400.0,
        offset in -1_000.0f64..1_000.0
    ) {
        let mut grid = Grid::new(NullRenderer::default(), GridConfig::new(Shape::new(400.0, 200.0)))
            .expect("grid init");
        grid.update(GridUpdate::new().with_x(CoordinateOptions::default().with_view(offset, 1.0)));
        let before = grid.state().x.clone();
        let ratio = cursor_x / 400.0;
        let value = before.offset + ratio * before.range;

        grid.apply_interaction(InteractionDelta::zoom(dz, cursor_x, 100.0));

        let after = &grid.state().x;
        prop_assert!((after.ratio(value) - ratio).abs() <= 1e-9);
    }
}
