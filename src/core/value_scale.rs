use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, SeriesSet};
use crate::error::{ChartError, ChartResult};

/// Value axis with a `[0, max]` domain and inverted pixel Y.
///
/// The lower bound is pinned to zero and the upper bound is recomputed on
/// every data update; the value axis is never user-zoomable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
    height_px: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64, height_px: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() {
            return Err(ChartError::InvalidData(
                "value domain must be finite".to_owned(),
            ));
        }
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale height must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            height_px,
        })
    }

    /// Fits `[0, max(y)]` from the data; empty data yields the degenerate
    /// `[0, 0]` domain.
    pub fn from_series(data: &SeriesSet, height_px: f64) -> ChartResult<Self> {
        Self::new(data.max_value().unwrap_or(0.0), height_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.height_px
    }

    /// Maps a value to pixel Y, zero at the plot bottom.
    pub fn to_pixel(self, value: f64) -> ChartResult<f64> {
        let pixel = self.linear()?.to_pixel(value)?;
        Ok(self.height_px - pixel)
    }

    pub fn to_value(self, pixel: f64) -> ChartResult<f64> {
        self.linear()?.to_domain(self.height_px - pixel)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(0.0, self.domain_max, self.height_px)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Sample, SeriesSet};

    use super::ValueScale;

    #[test]
    fn zero_sits_at_plot_bottom() {
        let scale = ValueScale::new(10.0, 330.0).expect("valid scale");
        assert_eq!(scale.to_pixel(0.0).expect("bottom"), 330.0);
        assert_eq!(scale.to_pixel(10.0).expect("top"), 0.0);
    }

    #[test]
    fn fit_tracks_max_across_series() {
        let data = SeriesSet::new(vec![
            vec![Sample::new(1.0, 2.0)],
            vec![Sample::new(2.0, 7.5), Sample::new(3.0, 4.0)],
        ]);
        let scale = ValueScale::from_series(&data, 330.0).expect("valid scale");
        assert_eq!(scale.domain(), (0.0, 7.5));
    }

    #[test]
    fn empty_data_yields_degenerate_zero_domain() {
        let scale = ValueScale::from_series(&SeriesSet::empty(), 330.0).expect("valid scale");
        assert_eq!(scale.domain(), (0.0, 0.0));
        // Flat mapping: everything lands mid-span rather than erroring.
        assert_eq!(scale.to_pixel(0.0).expect("flat"), 165.0);
    }
}
