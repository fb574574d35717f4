use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::chart::config::ChartConfig;
use crate::chart::view::ChartView;
use crate::core::{SeriesSet, ZoomTransform};
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

/// Owns every chart drawn on one surface and keeps their zoom state in
/// lockstep.
///
/// The manager is the explicit replacement for a process-global chart
/// registry: hosts construct one (or several, e.g. per test) and route all
/// chart operations through it. Entries are never removed — a chart lives
/// as long as its manager, matching the dashboard lifecycle where polling
/// only stops when the page goes away.
///
/// The manager is single-threaded by design. Overlapping poll responses
/// for the same chart are the caller's concern; whichever `update` call
/// runs last wins and overwrites the stored series wholesale.
#[derive(Debug)]
pub struct ChartManager<S: Surface> {
    surface: S,
    charts: IndexMap<String, ChartView>,
}

impl<S: Surface> ChartManager<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            charts: IndexMap::new(),
        }
    }

    /// Creates (or re-creates) the chart for `config`'s container and
    /// commits its initial frame.
    ///
    /// The container must exist on the surface with a measurable size;
    /// otherwise construction fails fast with
    /// [`ChartError::ContainerNotFound`]. Re-creating a chart for a
    /// registered container keeps the existing zoom transform so the
    /// viewer's pan/zoom survives.
    pub fn create_chart(&mut self, config: ChartConfig, initial: SeriesSet) -> ChartResult<()> {
        let container_id = config.container_id().to_owned();
        let viewport = self.surface.container_size(&container_id).ok_or_else(|| {
            ChartError::ContainerNotFound {
                container_id: container_id.clone(),
            }
        })?;

        let prior_zoom = self
            .charts
            .get(&container_id)
            .and_then(ChartView::zoom);
        let view = ChartView::new(config, viewport, initial, prior_zoom)?;
        let frame = view.frame()?;
        self.surface.commit(&container_id, &frame)?;
        self.charts.insert(container_id, view);
        debug!(charts = self.charts.len(), "registry size");
        Ok(())
    }

    /// Replaces a chart's data and redraws it; called once per polling
    /// tick by the external data collaborator.
    ///
    /// A failed update (unknown container, malformed or mis-shaped data)
    /// leaves the chart's previously committed frame untouched.
    pub fn update(&mut self, container_id: &str, data: SeriesSet) -> ChartResult<()> {
        let view = self.charts.get_mut(container_id).ok_or_else(|| {
            ChartError::ChartNotRegistered {
                container_id: container_id.to_owned(),
            }
        })?;

        let frame = view.update(data)?;
        self.surface.commit(container_id, &frame)
    }

    /// Applies a pan/zoom gesture to the chart it landed on, then folds
    /// the raw transform over every sibling chart.
    ///
    /// The translation is clamped to the originating chart's translate
    /// extent (out-of-bounds pans clamp, never error). Siblings receive
    /// the transform by direct state mutation — not by re-raising a
    /// gesture — so broadcast cannot re-enter the originating chart. Each
    /// sibling derives its own anchor-right correction from its own data.
    pub fn zoom(&mut self, container_id: &str, gesture: ZoomTransform) -> ChartResult<()> {
        let view = self.charts.get_mut(container_id).ok_or_else(|| {
            ChartError::ChartNotRegistered {
                container_id: container_id.to_owned(),
            }
        })?;

        let transform = gesture.clamped_to_extent(view.plot_area().width);
        if transform != gesture {
            warn!(
                container = container_id,
                translate_x = gesture.translate_x(),
                clamped_translate_x = transform.translate_x(),
                "pan clamped to translate extent"
            );
        }

        let frame = view.apply_zoom(transform)?;
        self.surface.commit(container_id, &frame)?;

        let mut fanout = 0_usize;
        for (sibling_id, sibling) in &mut self.charts {
            if sibling_id == container_id {
                continue;
            }
            let frame = sibling.apply_zoom(transform)?;
            self.surface.commit(sibling_id, &frame)?;
            fanout += 1;
        }
        trace!(
            container = container_id,
            scale = transform.scale(),
            fanout, "zoom broadcast"
        );
        Ok(())
    }

    #[must_use]
    pub fn chart(&self, container_id: &str) -> Option<&ChartView> {
        self.charts.get(container_id)
    }

    #[must_use]
    pub fn contains_chart(&self, container_id: &str) -> bool {
        self.charts.contains_key(container_id)
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// Registered container ids, in creation order.
    pub fn container_ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
