//! Legend panel geometry.
//!
//! The legend is sized proportionally to the plot width and built once at
//! chart construction; labels and colors are immutable for a chart's
//! lifetime, so updates never rebuild it.

use crate::core::PlotArea;
use crate::render::{Color, RectPrimitive, TextHAlign, TextPrimitive};

const PANEL_WIDTH_RATIO: f64 = 0.15;
const ITEM_SIZE_RATIO: f64 = 0.02;
const ITEM_SPACING_RATIO: f64 = 0.02;
const LABEL_OFFSET_RATIO: f64 = 0.03;
const LABEL_FONT_RATIO: f64 = 0.025;
const PANEL_PADDING_RATIO: f64 = 0.01;
const PANEL_X_RATIO: f64 = 0.01;
const PANEL_Y_RATIO: f64 = 0.05;

const PANEL_BACKGROUND: Color = Color::rgba(0.118, 0.118, 0.118, 0.8);
const SWATCH_OUTLINE: Color = Color::rgb(1.0, 1.0, 1.0);
const SWATCH_OUTLINE_WIDTH: f64 = 0.5;
const LABEL_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

/// Cached legend scene fragment appended verbatim to every frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendPrimitives {
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Builds one swatch + label row per series entry.
///
/// `labels` are the series labels only (config slots `[2..]`); `colors`
/// align by index.
#[must_use]
pub fn build_legend(plot: PlotArea, labels: &[String], colors: &[Color]) -> LegendPrimitives {
    let mut legend = LegendPrimitives::default();
    let entry_count = labels.len().min(colors.len());
    if entry_count == 0 {
        return legend;
    }

    let panel_width = plot.width * PANEL_WIDTH_RATIO;
    let item_size = plot.width * ITEM_SIZE_RATIO;
    let item_spacing = plot.width * ITEM_SPACING_RATIO;
    let label_offset = plot.width * LABEL_OFFSET_RATIO;
    let font_size = plot.width * LABEL_FONT_RATIO;
    let padding = plot.width * PANEL_PADDING_RATIO;

    let panel_x = plot.origin_x + plot.width * PANEL_X_RATIO;
    let panel_y = plot.origin_y + plot.height * PANEL_Y_RATIO;
    let panel_height = (entry_count as f64) * (item_size + item_spacing) + padding * 2.0;

    legend.rects.push(RectPrimitive::new(
        panel_x,
        panel_y,
        panel_width,
        panel_height,
        PANEL_BACKGROUND,
    ));

    let item_x = panel_x + panel_width / 8.0;
    for (index, (label, color)) in labels.iter().zip(colors.iter()).enumerate() {
        let item_y = panel_y + (index as f64) * (item_spacing + item_size) + padding;
        legend.rects.push(
            RectPrimitive::new(item_x, item_y, item_size, item_size, *color)
                .with_stroke(SWATCH_OUTLINE, SWATCH_OUTLINE_WIDTH),
        );
        legend.texts.push(TextPrimitive::new(
            label.clone(),
            item_x + label_offset,
            item_y + item_size / 2.0 + font_size / 3.0,
            font_size,
            LABEL_COLOR,
            TextHAlign::Left,
        ));
    }

    legend
}
