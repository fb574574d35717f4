use crate::error::{ChartError, ChartResult};

/// Bidirectional mapping between a numeric domain and a `[0, span_px]`
/// pixel range.
///
/// A degenerate domain (`start == end`, including the zero-series case) is
/// accepted: values map to the middle of the pixel span and pixels map back
/// to the domain start, so empty charts render a flat axis instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    span_px: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, span_px: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            span_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span_px(self) -> f64 {
        self.span_px
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok(self.span_px / 2.0);
        }

        let normalized = (value - self.domain_start) / span;
        Ok(normalized * self.span_px)
    }

    pub fn to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok(self.domain_start);
        }

        let normalized = pixel / self.span_px;
        Ok(self.domain_start + normalized * span)
    }
}
