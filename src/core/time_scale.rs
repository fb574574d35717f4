use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, SeriesSet, ZoomTransform};
use crate::error::{ChartError, ChartResult};

/// Time axis over epoch-milliseconds, mapped to `[0, width_px]`.
///
/// A chart seeds its base time scale once, from the full x extent of the
/// data supplied at construction. Later updates never re-fit the domain;
/// they shift it via [`TimeScale::anchored_right`] and derive pan/zoomed
/// working copies via [`TimeScale::rescaled`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain_start: f64,
    domain_end: f64,
    width_px: f64,
}

impl TimeScale {
    pub fn new(domain_start: f64, domain_end: f64, width_px: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "time domain must be finite".to_owned(),
            ));
        }
        if !width_px.is_finite() || width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }

        let (domain_start, domain_end) = if domain_start <= domain_end {
            (domain_start, domain_end)
        } else {
            (domain_end, domain_start)
        };
        Ok(Self {
            domain_start,
            domain_end,
            width_px,
        })
    }

    /// Seeds a scale from the full x extent of `data`.
    ///
    /// Zero samples produce the degenerate `[0, 0]` domain, which renders a
    /// flat axis rather than failing.
    pub fn from_series(data: &SeriesSet, width_px: f64) -> ChartResult<Self> {
        let start = data.earliest_timestamp().unwrap_or(0.0);
        let end = data.latest_timestamp().unwrap_or(0.0);
        Self::new(start, end, width_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn domain_width(self) -> f64 {
        self.domain_end - self.domain_start
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.width_px
    }

    /// Shifts the domain so its right edge equals `latest`, preserving the
    /// domain width.
    ///
    /// This is the anchor-right policy: the most recent sample stays
    /// visible at the chart's right edge regardless of how the viewer last
    /// panned or zoomed.
    #[must_use]
    pub fn anchored_right(self, latest: f64) -> Self {
        if !latest.is_finite() {
            return self;
        }

        let shift = latest - self.domain_end;
        Self {
            domain_start: self.domain_start + shift,
            domain_end: latest,
            width_px: self.width_px,
        }
    }

    /// Derives the working scale for a pan/zoom transform.
    ///
    /// Matches `transform.rescaleX(base)`: each endpoint of the pixel range
    /// is pulled back through the inverted transform, then mapped through
    /// the base domain.
    pub fn rescaled(self, transform: ZoomTransform) -> ChartResult<Self> {
        let linear = self.linear()?;
        let start = linear.to_domain(transform.invert_x(0.0))?;
        let end = linear.to_domain(transform.invert_x(self.width_px))?;
        Self::new(start, end, self.width_px)
    }

    pub fn to_pixel(self, time_ms: f64) -> ChartResult<f64> {
        self.linear()?.to_pixel(time_ms)
    }

    pub fn to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear()?.to_domain(pixel)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.domain_start, self.domain_end, self.width_px)
    }
}
