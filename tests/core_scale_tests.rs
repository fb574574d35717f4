use approx::assert_relative_eq;
use telechart_rs::core::{LinearScale, Sample, SeriesSet, TimeScale, ValueScale};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 720.0).expect("valid scale");
    assert_eq!(scale.span_px(), 720.0);

    let original = 42.5;
    let px = scale.to_pixel(original).expect("to pixel");
    let recovered = scale.to_domain(px).expect("to domain");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn linear_scale_degenerate_domain_renders_flat() {
    let scale = LinearScale::new(7.0, 7.0, 720.0).expect("degenerate domain is accepted");

    assert_eq!(scale.to_pixel(7.0).expect("flat pixel"), 360.0);
    assert_eq!(scale.to_pixel(1_000.0).expect("flat pixel"), 360.0);
    assert_eq!(scale.to_domain(10.0).expect("flat domain"), 7.0);
}

#[test]
fn linear_scale_rejects_invalid_span() {
    assert!(LinearScale::new(0.0, 1.0, 0.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, f64::NAN).is_err());
    assert!(LinearScale::new(f64::INFINITY, 1.0, 100.0).is_err());
}

#[test]
fn time_scale_round_trip_within_tolerance() {
    let scale = TimeScale::new(1_700_000_000_000.0, 1_700_000_600_000.0, 1_200.0)
        .expect("valid scale");

    let original = 1_700_000_123_000.0;
    let px = scale.to_pixel(original).expect("to pixel");
    let recovered = scale.to_time(px).expect("to time");

    assert_relative_eq!(recovered, original, epsilon = 1e-6);
}

#[test]
fn time_scale_anchor_right_shifts_without_resizing() {
    let scale = TimeScale::new(1_000.0, 3_000.0, 720.0).expect("valid scale");

    let anchored = scale.anchored_right(4_500.0);
    assert_eq!(anchored.domain(), (2_500.0, 4_500.0));
    assert_eq!(anchored.domain_width(), 2_000.0);
    // The latest sample sits exactly on the right edge.
    assert_relative_eq!(
        anchored.to_pixel(4_500.0).expect("right edge"),
        720.0,
        epsilon = 1e-9
    );
}

#[test]
fn time_scale_anchor_right_ignores_non_finite_latest() {
    let scale = TimeScale::new(1_000.0, 3_000.0, 720.0).expect("valid scale");
    let anchored = scale.anchored_right(f64::NAN);
    assert_eq!(anchored.domain(), (1_000.0, 3_000.0));
}

#[test]
fn value_scale_is_inverted() {
    let scale = ValueScale::new(10.0, 330.0).expect("valid scale");

    assert_eq!(scale.to_pixel(0.0).expect("bottom"), 330.0);
    assert_eq!(scale.to_pixel(10.0).expect("top"), 0.0);
    assert_relative_eq!(scale.to_value(0.0).expect("invert top"), 10.0, epsilon = 1e-9);
}

#[test]
fn scales_fit_multi_series_extent() {
    let data = SeriesSet::new(vec![
        vec![Sample::new(2_000.0, 1.0), Sample::new(5_000.0, 4.0)],
        vec![Sample::new(1_000.0, 9.0), Sample::new(4_000.0, 2.0)],
    ]);

    let time = TimeScale::from_series(&data, 720.0).expect("time fit");
    assert_eq!(time.domain(), (1_000.0, 5_000.0));
    assert_eq!(time.width_px(), 720.0);

    let value = ValueScale::from_series(&data, 330.0).expect("value fit");
    assert_eq!(value.domain(), (0.0, 9.0));
    assert_eq!(value.height_px(), 330.0);
}
