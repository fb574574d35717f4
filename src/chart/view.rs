use tracing::{debug, trace};

use crate::chart::axis::{append_time_axis, append_value_axis};
use crate::chart::config::ChartConfig;
use crate::chart::legend::{LegendPrimitives, build_legend};
use crate::core::{Margins, PlotArea, SeriesSet, TimeScale, ValueScale, Viewport, ZoomTransform};
use crate::error::{ChartError, ChartResult};
use crate::render::{ClipRect, Color, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

const SERIES_STROKE_WIDTH: f64 = 1.5;
const TITLE_FONT_SIZE_PX: f64 = 12.0;
const TITLE_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

/// Distance from the plot's left edge to the rotated y-axis title baseline.
const Y_TITLE_INSET_PX: f64 = 34.0;
/// Fraction of the bottom margin where the x-axis title sits.
const X_TITLE_MARGIN_RATIO: f64 = 0.9;

/// The x-axis title is fixed regardless of the configured label slot.
const X_AXIS_TITLE: &str = "Time";

/// One chart: its configuration, current data, scales, and zoom state.
///
/// The base time scale is seeded from the initial data's full extent and
/// afterwards only shifted by the anchor-right policy; pan/zoom transforms
/// derive working copies from it, so the viewer's zoom level survives every
/// data update.
#[derive(Debug, Clone)]
pub struct ChartView {
    config: ChartConfig,
    viewport: Viewport,
    margins: Margins,
    plot: PlotArea,
    series: SeriesSet,
    base_time_scale: TimeScale,
    value_scale: ValueScale,
    zoom: Option<ZoomTransform>,
    legend: LegendPrimitives,
}

impl ChartView {
    /// Builds a chart over an already-measured container.
    ///
    /// `prior_zoom` carries the zoom state forward when a chart is
    /// re-created for a container that was registered before.
    pub fn new(
        config: ChartConfig,
        viewport: Viewport,
        initial: SeriesSet,
        prior_zoom: Option<ZoomTransform>,
    ) -> ChartResult<Self> {
        let margins = Margins::chart_default();
        let plot = PlotArea::from_viewport(viewport, margins)?;
        validate_shape(&config, &initial)?;

        let base_time_scale = TimeScale::from_series(&initial, plot.width)?;
        let value_scale = ValueScale::from_series(&initial, plot.height)?;
        let legend = build_legend(plot, config.series_labels(), config.series_colors());

        debug!(
            container = config.container_id(),
            series = initial.series_count(),
            samples = initial.sample_count(),
            width = viewport.width,
            height = viewport.height,
            "chart created"
        );

        Ok(Self {
            config,
            viewport,
            margins,
            plot,
            series: initial,
            base_time_scale,
            value_scale,
            zoom: prior_zoom,
            legend,
        })
    }

    /// Replaces the chart's data and rebuilds its frame.
    ///
    /// Shape validation happens before any state is touched: a rejected
    /// update leaves the previously rendered state fully intact.
    pub fn update(&mut self, data: SeriesSet) -> ChartResult<RenderFrame> {
        validate_shape(&self.config, &data)?;
        self.series = data;

        let working = match self.zoom {
            Some(transform) => {
                let rescaled = self.base_time_scale.rescaled(transform)?;
                self.anchor_to_latest(rescaled)
            }
            None => {
                // Without a zoom the anchored domain becomes the new base,
                // so the next update shifts from here instead of from the
                // construction-time extent.
                let anchored = self.anchor_to_latest(self.base_time_scale);
                self.base_time_scale = anchored;
                anchored
            }
        };

        self.value_scale = ValueScale::from_series(&self.series, self.plot.height)?;

        debug!(
            container = self.config.container_id(),
            samples = self.series.sample_count(),
            domain_start = working.domain().0,
            domain_end = working.domain().1,
            value_max = self.value_scale.domain().1,
            "chart updated"
        );

        self.build_frame(working)
    }

    /// Applies a pan/zoom transform and rebuilds the frame.
    ///
    /// Used both for gestures on this chart and for transforms broadcast
    /// from sibling charts; either way the anchor-right correction is
    /// derived from this chart's own latest timestamp. The value scale is
    /// untouched: only the x dimension pans and zooms.
    pub fn apply_zoom(&mut self, transform: ZoomTransform) -> ChartResult<RenderFrame> {
        self.zoom = Some(transform);
        let working = self.anchor_to_latest(self.base_time_scale.rescaled(transform)?);

        trace!(
            container = self.config.container_id(),
            scale = transform.scale(),
            translate_x = transform.translate_x(),
            domain_start = working.domain().0,
            domain_end = working.domain().1,
            "zoom applied"
        );

        self.build_frame(working)
    }

    /// Builds the current frame without changing any state.
    pub fn frame(&self) -> ChartResult<RenderFrame> {
        self.build_frame(self.working_time_scale()?)
    }

    /// The zoom-adjusted, anchor-corrected x-scale in effect right now.
    pub fn working_time_scale(&self) -> ChartResult<TimeScale> {
        let scale = match self.zoom {
            Some(transform) => self.base_time_scale.rescaled(transform)?,
            None => self.base_time_scale,
        };
        Ok(self.anchor_to_latest(scale))
    }

    /// Current x-domain `(start, end)` in epoch-milliseconds.
    pub fn x_domain(&self) -> ChartResult<(f64, f64)> {
        Ok(self.working_time_scale()?.domain())
    }

    /// Current y-domain `(0, max)`.
    #[must_use]
    pub fn y_domain(&self) -> (f64, f64) {
        self.value_scale.domain()
    }

    #[must_use]
    pub fn zoom(&self) -> Option<ZoomTransform> {
        self.zoom
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        self.config.container_id()
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    fn anchor_to_latest(&self, scale: TimeScale) -> TimeScale {
        match self.series.latest_timestamp() {
            Some(latest) => scale.anchored_right(latest),
            None => scale,
        }
    }

    fn build_frame(&self, x_scale: TimeScale) -> ChartResult<RenderFrame> {
        let plot = self.plot;
        let mut frame = RenderFrame::new(
            self.viewport,
            ClipRect {
                x: plot.origin_x,
                y: plot.origin_y,
                width: plot.width,
                height: plot.height,
            },
        );

        append_time_axis(&mut frame, x_scale, plot)?;
        append_value_axis(&mut frame, self.value_scale, plot)?;

        frame.texts.push(
            TextPrimitive::new(
                self.config.y_axis_title().to_owned(),
                plot.origin_x - Y_TITLE_INSET_PX,
                plot.origin_y + plot.height / 2.0,
                TITLE_FONT_SIZE_PX,
                TITLE_COLOR,
                TextHAlign::Center,
            )
            .rotated(-90.0),
        );
        frame.texts.push(TextPrimitive::new(
            X_AXIS_TITLE,
            plot.origin_x + plot.width / 2.0,
            plot.bottom_edge() + self.margins.bottom * X_TITLE_MARGIN_RATIO,
            TITLE_FONT_SIZE_PX,
            TITLE_COLOR,
            TextHAlign::Center,
        ));

        for (index, series) in self.series.series().iter().enumerate() {
            let Some(color) = self.config.series_color(index) else {
                break;
            };
            let mut points = Vec::with_capacity(series.len());
            for sample in series {
                let x = plot.origin_x + x_scale.to_pixel(sample.x)?;
                let y = plot.origin_y + self.value_scale.to_pixel(sample.y)?;
                points.push((x, y));
            }
            frame.polylines.push(PolylinePrimitive::new(
                points,
                SERIES_STROKE_WIDTH,
                color,
                true,
            ));
        }

        frame.rects.extend(self.legend.rects.iter().copied());
        frame.texts.extend(self.legend.texts.iter().cloned());

        Ok(frame)
    }
}

fn validate_shape(config: &ChartConfig, data: &SeriesSet) -> ChartResult<()> {
    if data.series_count() != config.series_count() {
        return Err(ChartError::SeriesCountMismatch {
            expected: config.series_count(),
            actual: data.series_count(),
        });
    }
    data.validate()
}
