//! Axis tick selection, label formatting, and grid-overlay geometry.
//!
//! Builders are pure functions of scale + plot area: the same inputs always
//! append the identical primitive list, and every frame starts empty, so
//! stale ticks cannot accumulate across redraws.

use chrono::{Local, TimeZone};
use smallvec::SmallVec;

use crate::core::{PlotArea, TimeScale, ValueScale};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Target pixel spacing per tick on the horizontal axis.
pub const X_TICK_UNIT_PX: f64 = 100.0;
/// Target pixel spacing per tick on the vertical axis.
pub const Y_TICK_UNIT_PX: f64 = 30.0;

const MIN_TICKS: usize = 3;
const MAX_TICKS: usize = 6;

const TICK_FONT_SIZE_PX: f64 = 10.0;
const X_LABEL_OFFSET_PX: f64 = 14.0;
const Y_LABEL_OFFSET_PX: f64 = 8.0;
const Y_LABEL_BASELINE_NUDGE_PX: f64 = 3.0;

const AXIS_TEXT_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const GRID_COLOR: Color = Color::rgba(0.5, 0.5, 0.5, 0.35);
const AXIS_LINE_COLOR: Color = Color::rgba(0.8, 0.8, 0.8, 0.9);

/// Shown when a timestamp falls outside the representable calendar range.
const OUT_OF_RANGE_LABEL: &str = "--:--:--";

/// `clamp(floor(span / unit), 3, 6)` tick count shared by both axes.
#[must_use]
pub fn tick_count(span_px: f64, unit_px: f64) -> usize {
    if !span_px.is_finite() || span_px <= 0.0 {
        return MIN_TICKS;
    }
    ((span_px / unit_px).floor() as usize).clamp(MIN_TICKS, MAX_TICKS)
}

#[must_use]
pub fn x_tick_count(plot_width_px: f64) -> usize {
    tick_count(plot_width_px, X_TICK_UNIT_PX)
}

#[must_use]
pub fn y_tick_count(plot_height_px: f64) -> usize {
    tick_count(plot_height_px, Y_TICK_UNIT_PX)
}

/// Evenly spaced tick values across a domain, endpoints included.
#[must_use]
pub fn tick_values(domain: (f64, f64), count: usize) -> SmallVec<[f64; 8]> {
    let mut values = SmallVec::new();
    if count == 0 {
        return values;
    }
    if count == 1 {
        values.push(domain.0);
        return values;
    }

    let span = domain.1 - domain.0;
    let denominator = (count - 1) as f64;
    for index in 0..count {
        let ratio = (index as f64) / denominator;
        values.push(domain.0 + span * ratio);
    }
    values
}

/// Formats an epoch-millisecond tick as `HH:MM:SS` local time.
#[must_use]
pub fn format_time_label(time_ms: f64) -> String {
    if !time_ms.is_finite() || time_ms.abs() >= 9e15 {
        return OUT_OF_RANGE_LABEL.to_owned();
    }

    match Local.timestamp_millis_opt(time_ms.round() as i64) {
        chrono::LocalResult::Single(stamp) => stamp.format("%H:%M:%S").to_string(),
        chrono::LocalResult::Ambiguous(stamp, _) => stamp.format("%H:%M:%S").to_string(),
        chrono::LocalResult::None => OUT_OF_RANGE_LABEL.to_owned(),
    }
}

/// Formats a value-axis tick, trimming trailing fraction zeros.
#[must_use]
pub fn format_value_label(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Appends the time axis: full-height gridlines, a baseline, and one
/// `HH:MM:SS` label per tick.
pub fn append_time_axis(
    frame: &mut RenderFrame,
    scale: TimeScale,
    plot: PlotArea,
) -> ChartResult<()> {
    let ticks = tick_values(scale.domain(), x_tick_count(plot.width));
    for tick in ticks {
        let x = plot.origin_x + scale.to_pixel(tick)?;
        frame.lines.push(LinePrimitive::new(
            x,
            plot.origin_y,
            x,
            plot.bottom_edge(),
            1.0,
            GRID_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format_time_label(tick),
            x,
            plot.bottom_edge() + X_LABEL_OFFSET_PX,
            TICK_FONT_SIZE_PX,
            AXIS_TEXT_COLOR,
            TextHAlign::Center,
        ));
    }

    frame.lines.push(LinePrimitive::new(
        plot.origin_x,
        plot.bottom_edge(),
        plot.right_edge(),
        plot.bottom_edge(),
        1.0,
        AXIS_LINE_COLOR,
    ));
    Ok(())
}

/// Appends the value axis: full-width gridlines, a baseline, and one
/// numeric label per tick.
pub fn append_value_axis(
    frame: &mut RenderFrame,
    scale: ValueScale,
    plot: PlotArea,
) -> ChartResult<()> {
    let ticks = tick_values(scale.domain(), y_tick_count(plot.height));
    for tick in ticks {
        let y = plot.origin_y + scale.to_pixel(tick)?;
        frame.lines.push(LinePrimitive::new(
            plot.origin_x,
            y,
            plot.right_edge(),
            y,
            1.0,
            GRID_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format_value_label(tick),
            plot.origin_x - Y_LABEL_OFFSET_PX,
            y + Y_LABEL_BASELINE_NUDGE_PX,
            TICK_FONT_SIZE_PX,
            AXIS_TEXT_COLOR,
            TextHAlign::Right,
        ));
    }

    frame.lines.push(LinePrimitive::new(
        plot.origin_x,
        plot.origin_y,
        plot.origin_x,
        plot.bottom_edge(),
        1.0,
        AXIS_LINE_COLOR,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{format_value_label, tick_count, tick_values, x_tick_count, y_tick_count};

    #[test]
    fn tick_count_clamps_between_three_and_six() {
        assert_eq!(tick_count(100.0, 100.0), 3);
        assert_eq!(x_tick_count(450.0), 4);
        assert_eq!(x_tick_count(2_000.0), 6);
        assert_eq!(y_tick_count(30.0), 3);
        assert_eq!(y_tick_count(151.0), 5);
    }

    #[test]
    fn tick_values_include_both_endpoints() {
        let ticks = tick_values((0.0, 100.0), 5);
        assert_eq!(ticks.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn degenerate_domain_repeats_single_value() {
        let ticks = tick_values((7.0, 7.0), 3);
        assert_eq!(ticks.as_slice(), &[7.0, 7.0, 7.0]);
    }

    #[test]
    fn value_labels_trim_trailing_zeros() {
        assert_eq!(format_value_label(2.0), "2");
        assert_eq!(format_value_label(2.50), "2.5");
        assert_eq!(format_value_label(0.0), "0");
        assert_eq!(format_value_label(0.25), "0.25");
    }
}
