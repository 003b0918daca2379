use std::str::FromStr;
use std::sync::Arc;

use approx::assert_relative_eq;
use chrono::{DateTime, Datelike, Timelike, Utc};
use plot_grid::GridError;
use plot_grid::core::scaling::{Linear, Logarithmic, Time, TimeStep, TimeUnit};
use plot_grid::core::{
    AxisState, Coordinate, CoordinateOptions, CssStyleResolver, LabelFormat, Orientation,
    ScalingKind, ScalingPolicy, Shape, calc_coordinate,
};

fn axis(kind: ScalingKind, options: CoordinateOptions, shape: Shape) -> AxisState {
    let mut coordinate = Coordinate::new(Orientation::X);
    coordinate.apply_scaling_defaults(kind);
    coordinate.merge(&options);
    calc_coordinate(Arc::new(coordinate), shape, &CssStyleResolver)
}

fn from_zero(scale: f64) -> CoordinateOptions {
    CoordinateOptions::default()
        .with_view(0.0, scale)
        .with_origin(0.0)
}

#[test]
fn scaling_names_parse_with_aliases() {
    assert_eq!(ScalingKind::from_str("linear").expect("linear"), ScalingKind::Linear);
    assert_eq!(ScalingKind::from_str("log").expect("log"), ScalingKind::Logarithmic);
    assert_eq!(
        ScalingKind::from_str(" Logarithmic ").expect("logarithmic"),
        ScalingKind::Logarithmic
    );
    assert_eq!(ScalingKind::from_str("time").expect("time"), ScalingKind::Time);
    assert!(matches!(
        ScalingKind::from_str("polar"),
        Err(GridError::UnknownScaling(name)) if name == "polar"
    ));
}

#[test]
fn policy_defaults_are_applied_on_switch() {
    let mut coordinate = Coordinate::new(Orientation::X);
    assert_eq!(coordinate.distance, 13.0);
    assert_eq!(coordinate.steps.as_slice(), &[1.0, 2.0, 5.0]);

    coordinate.apply_scaling_defaults(ScalingKind::Logarithmic);
    assert_eq!(coordinate.scale, 0.01);
    assert_eq!(coordinate.min_zoom, 1e-4);
    assert_eq!(coordinate.max_zoom, 1.0);
    assert_eq!(coordinate.distance, 20.0);
    assert_eq!(coordinate.steps.len(), 9);

    coordinate.apply_scaling_defaults(ScalingKind::Time);
    assert_eq!(coordinate.scale, 60.0);
    assert_eq!(coordinate.min_zoom, 1e-3);
    assert_eq!(coordinate.max_zoom, 1e8);
    assert_eq!(coordinate.distance, 120.0);
}

#[test]
fn linear_step_snaps_to_one_two_five_decades() {
    let state = axis(ScalingKind::Linear, from_zero(1.0), Shape::new(100.0, 100.0));
    assert_eq!(Linear::step(&state), Some(10.0));
    assert_eq!(Linear::label_step(&state), Some(50.0));
    assert_eq!(state.len(), 10);

    let state = axis(ScalingKind::Linear, from_zero(0.01), Shape::new(400.0, 100.0));
    assert_relative_eq!(Linear::step(&state).expect("step"), 0.1);
    assert_eq!(state.lines.first().copied(), Some(0.0));
    assert!(state.lines.iter().all(|value| *value < 4.0));
    let labels: Vec<&str> = state.labels.iter().flatten().map(String::as_str).collect();
    assert_eq!(labels, vec!["0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5"]);
}

#[test]
fn linear_labels_are_free_of_float_noise() {
    let state = axis(ScalingKind::Linear, from_zero(0.001), Shape::new(1000.0, 100.0));
    let step = Linear::step(&state).expect("step");
    assert_relative_eq!(step, 0.01);
    assert!(
        state
            .labels
            .iter()
            .flatten()
            .all(|label| label.len() <= 4),
        "labels: {:?}",
        state.labels
    );
}

#[test]
fn logarithmic_lines_subdivide_wide_decades() {
    let state = axis(ScalingKind::Logarithmic, from_zero(0.01), Shape::new(300.0, 100.0));
    assert_relative_eq!(state.range, 3.0);
    assert_eq!(Logarithmic::decade_px(&state), Some(100.0));

    let expected = [0.0, 2f64.log10(), 4f64.log10()]
        .iter()
        .flat_map(|mantissa| (0..3).map(move |decade| f64::from(decade) + mantissa))
        .collect::<Vec<_>>();
    assert_eq!(state.len(), expected.len());
    for value in expected {
        assert!(state.lines.iter().any(|line| (line - value).abs() < 1e-9));
    }

    let labels: Vec<&str> = state.labels.iter().flatten().map(String::as_str).collect();
    assert_eq!(labels, vec!["1", "10", "100"]);
    assert_eq!(state.ticks[0], Some(8.0));
    assert_eq!(state.ticks[1], Some(4.0));
}

#[test]
fn logarithmic_lines_skip_narrow_decades() {
    let state = axis(ScalingKind::Logarithmic, from_zero(0.125), Shape::new(240.0, 100.0));
    assert_eq!(Logarithmic::decade_px(&state), Some(8.0));
    assert_eq!(state.lines, vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
    assert_eq!(state.labels[0].as_deref(), Some("1"));
    assert_eq!(state.labels[1].as_deref(), Some("1e5"));
}

#[test]
fn logarithmic_labels_show_fractions_below_one() {
    let state = axis(
        ScalingKind::Logarithmic,
        CoordinateOptions::default()
            .with_view(-2.0, 0.01)
            .with_origin(0.0),
        Shape::new(300.0, 100.0),
    );
    assert_eq!(state.labels[0].as_deref(), Some("0.01"));
    assert_eq!(Logarithmic.label_text(-2.0 + 2f64.log10(), &state), "0.02");
}

#[test]
fn wide_logarithmic_decades_label_two_and_five() {
    let state = axis(ScalingKind::Logarithmic, from_zero(0.002), Shape::new(500.0, 100.0));
    assert_eq!(Logarithmic::decade_px(&state), Some(500.0));
    let labels: Vec<&str> = state.labels.iter().flatten().map(String::as_str).collect();
    assert!(labels.contains(&"1"));
    assert!(labels.contains(&"2"));
    assert!(labels.contains(&"5"));
    assert!(!labels.contains(&"3"));
}

#[test]
fn time_lines_follow_the_hour_ladder() {
    let state = axis(ScalingKind::Time, from_zero(60.0), Shape::new(1200.0, 100.0));
    assert_eq!(Time::step(&state), Some(TimeStep::new(2, TimeUnit::Hour)));
    let expected: Vec<f64> = (0..10).map(|index| f64::from(index) * 7200.0).collect();
    assert_eq!(state.lines, expected);
    assert_eq!(state.labels[0].as_deref(), Some("Jan 01"));
    assert_eq!(state.labels[1].as_deref(), Some("02:00"));
    assert_eq!(state.ticks[0], Some(8.0));
    assert_eq!(state.ticks[1], Some(4.0));
}

#[test]
fn time_month_steps_land_on_calendar_boundaries() {
    let month = 2_629_746.0;
    let state = axis(
        ScalingKind::Time,
        from_zero(month * 10.0 / 1200.0),
        Shape::new(1200.0, 100.0),
    );
    assert_eq!(Time::step(&state), Some(TimeStep::new(1, TimeUnit::Month)));
    assert_eq!(state.lines[0], 0.0);
    assert_eq!(state.lines[1], 31.0 * 86_400.0);
    for value in &state.lines {
        let time = DateTime::<Utc>::from_timestamp(*value as i64, 0).expect("valid timestamp");
        assert_eq!(time.day(), 1);
        assert_eq!(time.num_seconds_from_midnight(), 0);
    }
    assert_eq!(state.labels[0].as_deref(), Some("1970"));
    assert_eq!(state.labels[1].as_deref(), Some("Feb 1970"));
}

#[test]
fn degenerate_ranges_produce_no_lines_for_every_policy() {
    for kind in [ScalingKind::Linear, ScalingKind::Logarithmic, ScalingKind::Time] {
        let state = axis(kind, from_zero(1.0), Shape::new(0.0, 100.0));
        assert!(state.is_empty(), "{kind} on empty surface");
        assert!(state.is_aligned());

        let state = axis(kind, from_zero(f64::INFINITY), Shape::new(100.0, 100.0));
        assert!(state.is_empty(), "{kind} with infinite scale");
        assert!(state.is_aligned());
    }
}

#[test]
fn custom_formatter_receives_display_values() {
    let shout = || LabelFormat::custom(|value| format!("{value}!"));

    let state = axis(
        ScalingKind::Linear,
        from_zero(1.0).with_format(shout()),
        Shape::new(100.0, 100.0),
    );
    assert_eq!(state.labels[0].as_deref(), Some("0!"));

    let state = axis(
        ScalingKind::Logarithmic,
        from_zero(0.01).with_format(shout()),
        Shape::new(300.0, 100.0),
    );
    assert_eq!(state.labels[0].as_deref(), Some("1!"));
}

#[test]
fn coordinate_format_follows_the_scaling_policy() {
    let state = axis(ScalingKind::Logarithmic, from_zero(0.01), Shape::new(300.0, 100.0));
    assert_eq!(state.coordinate.format(2.0, &state), "100");
    assert_eq!(state.coordinate.format(0.0, &state), "1");

    let state = axis(
        ScalingKind::Logarithmic,
        from_zero(0.01).with_format(LabelFormat::custom(|value| format!("<{value}>"))),
        Shape::new(300.0, 100.0),
    );
    assert_eq!(state.coordinate.format(2.0, &state), "<100>");
}
