use approx::assert_relative_eq;
use plot_grid::api::{Grid, GridConfig, GridUpdate};
use plot_grid::core::{
    Color, CoordinateOptions, LineColor, LineSource, Orientation, Shape, StyleColor,
};
use plot_grid::GridError;
use plot_grid::render::{GridFrame, NullRenderer, Renderer, Segment};

fn grid(shape: Shape) -> Grid<NullRenderer> {
    Grid::new(NullRenderer::default(), GridConfig::new(shape)).expect("grid init")
}

#[test]
fn frame_contains_every_enabled_axis() {
    let grid = grid(Shape::new(300.0, 150.0));
    let frame = GridFrame::from_state(grid.state());
    frame.validate().expect("valid frame");
    assert_eq!(frame.axes.len(), 2);
    assert_eq!(frame.axis(Orientation::X).expect("x frame").line_count(), 30);
    assert_eq!(frame.axis(Orientation::Y).expect("y frame").line_count(), 15);
    assert!(frame.axis(Orientation::R).is_none());
}

#[test]
fn cartesian_lines_span_the_cross_dimension() {
    let grid = grid(Shape::new(300.0, 150.0));
    let frame = GridFrame::from_state(grid.state());
    let x = frame.axis(Orientation::X).expect("x frame");
    for segment in x.lines.iter().flat_map(|batch| &batch.segments) {
        assert_eq!(segment.x1, segment.x2);
        assert_eq!((segment.y1, segment.y2), (0.0, 1.0));
    }
    let y = frame.axis(Orientation::Y).expect("y frame");
    for segment in y.lines.iter().flat_map(|batch| &batch.segments) {
        assert_eq!(segment.y1, segment.y2);
        assert_eq!((segment.x1, segment.x2), (0.0, 1.0));
    }
}

#[test]
fn graded_lines_are_batched_by_color() {
    let grid = grid(Shape::new(300.0, 150.0));
    let frame = GridFrame::from_state(grid.state());
    let x = frame.axis(Orientation::X).expect("x frame");
    assert_eq!(x.lines.len(), 2);
    assert_eq!(x.line_count(), 30);

    let mut grid = grid;
    grid.update(GridUpdate::new().with_x(
        CoordinateOptions::default()
            .with_line_color(LineColor::Uniform(StyleColor::Literal("#336699".to_owned()))),
    ));
    let frame = GridFrame::from_state(grid.state());
    let x = frame.axis(Orientation::X).expect("x frame");
    assert_eq!(x.lines.len(), 1);
    assert_eq!(x.lines[0].color, Color::rgb(0.2, 0.4, 0.6));
}

#[test]
fn ticks_cross_the_axis_line_with_alignment() {
    let grid = grid(Shape::new(300.0, 150.0));
    let frame = GridFrame::from_state(grid.state());
    let x = frame.axis(Orientation::X).expect("x frame");
    let ticks = x.ticks.as_ref().expect("x ticks");
    assert_eq!(ticks.segments.len(), 30);
    assert_relative_eq!(ticks.width, 1.5);

    let state = &grid.state().x;
    let major = state
        .lines
        .iter()
        .position(|value| *value == 0.0)
        .expect("line at zero");
    let tick = ticks.segments[major];
    assert_relative_eq!(tick.x1, 0.5);
    assert_relative_eq!(tick.y1, 0.5 + 4.0 / 150.0);
    assert_relative_eq!(tick.y2, 0.5 - 4.0 / 150.0);
}

#[test]
fn axis_line_sits_on_the_opposite_origin() {
    let grid = grid(Shape::new(300.0, 150.0));
    let frame = GridFrame::from_state(grid.state());
    let x_axis = frame
        .axis(Orientation::X)
        .and_then(|axis| axis.axis.as_ref())
        .expect("x axis line");
    assert_eq!(x_axis.segments, vec![Segment::new(0.0, 0.5, 1.0, 0.5)]);

    let y_axis = frame
        .axis(Orientation::Y)
        .and_then(|axis| axis.axis.as_ref())
        .expect("y axis line");
    assert_eq!(y_axis.segments, vec![Segment::new(0.5, 0.0, 0.5, 1.0)]);
}

#[test]
fn cross_axis_skips_label_at_shared_origin() {
    let grid = grid(Shape::new(300.0, 150.0));
    let frame = GridFrame::from_state(grid.state());

    let x_labels: Vec<&str> = frame
        .axis(Orientation::X)
        .expect("x frame")
        .labels
        .iter()
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(x_labels, vec!["-150", "-100", "-50", "0", "50", "100"]);

    let y_labels: Vec<&str> = frame
        .axis(Orientation::Y)
        .expect("y frame")
        .labels
        .iter()
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(y_labels, vec!["-50", "50"]);
    assert_eq!(frame.label_count(), 8);
}

#[test]
fn disabled_axis_is_excluded_from_frame() {
    let mut grid = grid(Shape::new(300.0, 150.0));
    grid.update(GridUpdate::new().with_y(false));
    let frame = GridFrame::from_state(grid.state());
    assert_eq!(frame.axes.len(), 1);
    assert!(frame.axis(Orientation::Y).is_none());

    let x = frame.axis(Orientation::X).expect("x frame");
    assert!(x.labels.iter().any(|label| label.text == "0"));
}

#[test]
fn radial_frame_encodes_rings_and_spokes() {
    let config = GridConfig::new(Shape::new(200.0, 200.0))
        .with_axis(Orientation::R, true)
        .with_axis(Orientation::A, true);
    let grid = Grid::new(NullRenderer::default(), config).expect("grid init");
    let frame = GridFrame::from_state(grid.state());
    frame.validate().expect("valid radial frame");

    let rings = frame.axis(Orientation::R).expect("radius frame");
    for segment in rings.lines.iter().flat_map(|batch| &batch.segments) {
        assert_eq!((segment.y1, segment.y2), (0.5, 0.5));
        assert_relative_eq!(segment.x1 + segment.x2, 1.0, epsilon = 1e-12);
    }
    let spokes = frame.axis(Orientation::A).expect("angle frame");
    for segment in spokes.lines.iter().flat_map(|batch| &batch.segments) {
        assert_eq!((segment.x1, segment.y1), (0.5, 0.5));
    }
}

#[test]
fn segments_scale_to_pixels() {
    let segment = Segment::new(0.25, 0.0, 0.25, 1.0).to_pixels(400.0, 200.0);
    assert_eq!(segment, Segment::new(100.0, 0.0, 100.0, 200.0));
    assert!(Segment::new(f64::NAN, 0.0, 0.0, 0.0).validate().is_err());
}

#[test]
fn snapshot_serializes_without_coordinate_internals() {
    let grid = grid(Shape::new(300.0, 150.0));
    let json = grid.state().to_json_pretty().expect("json");
    assert!(json.contains("\"x\""));
    assert!(json.contains("\"lines\""));
    assert!(!json.contains("\"coordinate\""));
    assert!(!json.contains("\"r\""));

    let contract = grid.state().to_json_contract_v1_pretty().expect("contract json");
    assert!(contract.contains("\"schema_version\": 1"));
}

#[test]
fn degenerate_axis_does_not_block_the_other_axis() {
    let mut grid = grid(Shape::new(0.0, 100.0));
    grid.update(
        GridUpdate::new()
            .with_x(CoordinateOptions::default().with_lines(LineSource::Fixed(vec![1.0, 2.0]))),
    );
    assert!(grid.state().x.lines.is_empty());

    grid.render().expect("render with an empty x range");
    let renderer = grid.renderer();
    assert_eq!(renderer.render_count, 1);
    assert!(renderer.last_line_count > 0);

    let frame = GridFrame::from_state(grid.state());
    assert_eq!(frame.axis(Orientation::X).expect("x frame").line_count(), 0);
    assert!(frame.axis(Orientation::Y).expect("y frame").line_count() > 0);
}

#[test]
fn non_finite_segments_are_left_out_of_the_frame() {
    let grid = grid(Shape::new(300.0, 150.0));
    let mut state = grid.state().clone();
    let before = GridFrame::from_state(&state)
        .axis(Orientation::X)
        .expect("x frame")
        .line_count();

    let color = state.x.color;
    state.x.lines.push(f64::INFINITY);
    state.x.line_colors.push(color);
    state.x.ticks.push(Some(4.0));
    state.x.labels.push(Some("inf".to_owned()));

    let frame = GridFrame::from_state(&state);
    frame.validate().expect("finite frame");
    let x = frame.axis(Orientation::X).expect("x frame");
    assert_eq!(x.line_count(), before);
    assert!(x.labels.iter().all(|label| label.text != "inf"));
}

#[test]
fn invalid_frames_surface_as_render_errors() {
    let grid = grid(Shape::new(300.0, 150.0));
    let mut state = grid.state().clone();
    state.x.font_size = f64::NAN;

    let mut renderer = NullRenderer::default();
    let result = renderer.render(&state);
    assert!(matches!(result, Err(GridError::Render(_))));
    assert_eq!(renderer.render_count, 0);
}
