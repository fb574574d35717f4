use approx::assert_relative_eq;
use telechart_rs::core::{MIN_SCALE_FACTOR, TimeScale, ZoomTransform};

#[test]
fn rescale_matches_inverted_transform_endpoints() {
    // Base domain [0, 1000] over 500px; zooming 2x while panning the view
    // fully right should show the second half of the domain.
    let base = TimeScale::new(0.0, 1_000.0, 500.0).expect("valid scale");
    let transform = ZoomTransform::new(2.0, -500.0);

    let working = base.rescaled(transform).expect("rescale");
    let (start, end) = working.domain();
    assert_relative_eq!(start, 500.0, epsilon = 1e-9);
    assert_relative_eq!(end, 1_000.0, epsilon = 1e-9);
}

#[test]
fn rescale_width_shrinks_by_scale_factor() {
    let base = TimeScale::new(2_000.0, 10_000.0, 720.0).expect("valid scale");

    for scale in [0.5, 1.0, 2.0, 4.0] {
        let working = base
            .rescaled(ZoomTransform::new(scale, -120.0))
            .expect("rescale");
        assert_relative_eq!(
            working.domain_width(),
            base.domain_width() / scale,
            epsilon = 1e-6
        );
    }
}

#[test]
fn rescale_of_identity_is_identity() {
    let base = TimeScale::new(2_000.0, 10_000.0, 720.0).expect("valid scale");
    let working = base
        .rescaled(ZoomTransform::identity())
        .expect("rescale");
    assert_eq!(working.domain(), base.domain());
}

#[test]
fn collapsed_and_negative_scale_factors_clamp() {
    assert_eq!(ZoomTransform::new(0.0, 0.0).scale(), MIN_SCALE_FACTOR);
    assert_eq!(ZoomTransform::new(-3.0, 0.0).scale(), MIN_SCALE_FACTOR);
    assert_eq!(ZoomTransform::new(f64::NAN, 0.0).scale(), 1.0);
    assert_eq!(ZoomTransform::new(1.0, f64::INFINITY).translate_x(), 0.0);
}

#[test]
fn translate_extent_clamps_pans_in_both_directions() {
    let width = 820.0;

    // Zoomed in 2x: pans may only reveal data inside the extent.
    let clamped = ZoomTransform::new(2.0, 125.0).clamped_to_extent(width);
    assert_eq!(clamped.translate_x(), 0.0);
    let clamped = ZoomTransform::new(2.0, -10_000.0).clamped_to_extent(width);
    assert_eq!(clamped.translate_x(), -820.0);

    // In-range pans pass through untouched.
    let passthrough = ZoomTransform::new(2.0, -400.0).clamped_to_extent(width);
    assert_eq!(passthrough.translate_x(), -400.0);
}
