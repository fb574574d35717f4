use approx::assert_relative_eq;
use telechart_rs::ChartError;
use telechart_rs::chart::{ChartConfig, ChartManager};
use telechart_rs::core::{Sample, SeriesSet, Viewport, ZoomTransform};
use telechart_rs::render::{Color, MemorySurface};

fn labels(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| (*entry).to_owned()).collect()
}

fn config(container_id: &str) -> ChartConfig {
    ChartConfig::new(
        container_id,
        labels(&["V", "Time", "S1"]),
        vec![Color::from_hex("#2222ff").expect("valid color")],
    )
    .expect("valid config")
}

fn ramp(start_ms: f64, end_ms: f64) -> SeriesSet {
    SeriesSet::new(vec![vec![
        Sample::new(start_ms, 1.0),
        Sample::new((start_ms + end_ms) / 2.0, 3.0),
        Sample::new(end_ms, 2.0),
    ]])
}

fn two_chart_manager() -> ChartManager<MemorySurface> {
    let surface = MemorySurface::new()
        .with_container("a", Viewport::new(900, 420))
        .with_container("b", Viewport::new(900, 420));
    let mut manager = ChartManager::new(surface);
    manager
        .create_chart(config("a"), ramp(1_000.0, 3_000.0))
        .expect("create chart a");
    manager
        .create_chart(config("b"), ramp(6_000.0, 10_000.0))
        .expect("create chart b");
    manager
}

#[test]
fn zoom_scales_every_chart_but_anchors_each_to_its_own_latest() {
    let mut manager = two_chart_manager();

    manager
        .zoom("a", ZoomTransform::new(2.0, 0.0))
        .expect("zoom");

    let a = manager.chart("a").expect("chart a");
    let (a_start, a_end) = a.x_domain().expect("a domain");
    assert_relative_eq!(a_end - a_start, 1_000.0, epsilon = 1e-6);
    assert_relative_eq!(a_end, 3_000.0, epsilon = 1e-6);

    let b = manager.chart("b").expect("chart b");
    let (b_start, b_end) = b.x_domain().expect("b domain");
    // Same scale factor halves b's domain too, but the right edge is b's
    // own latest timestamp, not a's.
    assert_relative_eq!(b_end - b_start, 2_000.0, epsilon = 1e-6);
    assert_relative_eq!(b_end, 10_000.0, epsilon = 1e-6);
}

#[test]
fn broadcast_redraws_every_sibling_exactly_once() {
    let mut manager = two_chart_manager();
    assert_eq!(manager.surface().commit_count("a"), 1);
    assert_eq!(manager.surface().commit_count("b"), 1);

    manager
        .zoom("a", ZoomTransform::new(2.0, -100.0))
        .expect("zoom");

    assert_eq!(manager.surface().commit_count("a"), 2);
    assert_eq!(manager.surface().commit_count("b"), 2);
}

#[test]
fn siblings_store_the_raw_shared_transform() {
    let mut manager = two_chart_manager();
    let gesture = ZoomTransform::new(2.0, -400.0);

    manager.zoom("a", gesture).expect("zoom");

    let a_zoom = manager.chart("a").expect("chart a").zoom().expect("stored");
    let b_zoom = manager.chart("b").expect("chart b").zoom().expect("stored");
    assert_eq!(a_zoom, gesture);
    assert_eq!(b_zoom, gesture);
}

#[test]
fn zoom_leaves_value_scales_untouched() {
    let mut manager = two_chart_manager();

    let before = manager.chart("a").expect("chart a").y_domain();
    manager
        .zoom("a", ZoomTransform::new(4.0, -250.0))
        .expect("zoom");
    let after = manager.chart("a").expect("chart a").y_domain();

    assert_eq!(before, after);
}

#[test]
fn updates_after_a_zoom_keep_the_zoomed_width() {
    let mut manager = two_chart_manager();

    manager
        .zoom("a", ZoomTransform::new(2.0, 0.0))
        .expect("zoom");
    manager
        .update("a", ramp(1_000.0, 5_000.0))
        .expect("update");

    let a = manager.chart("a").expect("chart a");
    let (start, end) = a.x_domain().expect("a domain");
    // Base span 2000 zoomed 2x stays 1000 wide, anchored to the new latest.
    assert_relative_eq!(end, 5_000.0, epsilon = 1e-6);
    assert_relative_eq!(end - start, 1_000.0, epsilon = 1e-6);
}

#[test]
fn recreating_a_chart_reuses_the_stored_zoom() {
    let mut manager = two_chart_manager();
    let gesture = ZoomTransform::new(2.0, 0.0);
    manager.zoom("a", gesture).expect("zoom");

    manager
        .create_chart(config("a"), ramp(1_000.0, 3_000.0))
        .expect("re-create chart a");

    let a = manager.chart("a").expect("chart a");
    assert_eq!(a.zoom(), Some(gesture));
    let (start, end) = a.x_domain().expect("a domain");
    assert_relative_eq!(end - start, 1_000.0, epsilon = 1e-6);
    assert_relative_eq!(end, 3_000.0, epsilon = 1e-6);
}

#[test]
fn out_of_extent_pan_is_clamped_not_rejected() {
    let mut manager = two_chart_manager();

    manager
        .zoom("a", ZoomTransform::new(1.0, 500.0))
        .expect("zoom");

    let a = manager.chart("a").expect("chart a");
    let stored = a.zoom().expect("stored transform");
    assert_eq!(stored.translate_x(), 0.0);
    assert_eq!(a.x_domain().expect("a domain"), (1_000.0, 3_000.0));
}

#[test]
fn zoom_on_unregistered_chart_errors() {
    let mut manager = two_chart_manager();
    let result = manager.zoom("missing", ZoomTransform::identity());
    assert!(matches!(
        result,
        Err(ChartError::ChartNotRegistered { container_id }) if container_id == "missing"
    ));
}
