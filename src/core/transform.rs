use serde::{Deserialize, Serialize};

/// Smallest scale factor a gesture may carry.
///
/// A factor of zero would collapse the visible domain to a single instant;
/// gestures below this bound are clamped instead of rejected.
pub const MIN_SCALE_FACTOR: f64 = 1e-3;

/// Affine pan/zoom state over a chart's x pixel range.
///
/// `scale > 1.0` zooms in, `scale < 1.0` zooms out, `translate_x` pans in
/// pixels. The transform is shared verbatim between charts during zoom
/// broadcast; each chart derives its own anchored domain from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    scale: f64,
    translate_x: f64,
}

impl ZoomTransform {
    /// Builds a transform, clamping non-finite or collapsed scale factors
    /// to [`MIN_SCALE_FACTOR`] and non-finite translations to zero.
    #[must_use]
    pub fn new(scale: f64, translate_x: f64) -> Self {
        let scale = if scale.is_finite() {
            scale.max(MIN_SCALE_FACTOR)
        } else {
            1.0
        };
        let translate_x = if translate_x.is_finite() {
            translate_x
        } else {
            0.0
        };
        Self { scale, translate_x }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
        }
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn translate_x(self) -> f64 {
        self.translate_x
    }

    /// Inverts the transform for one pixel coordinate.
    ///
    /// This is the coordinate half of deriving a zoomed scale: the working
    /// domain endpoint at screen pixel `px` is the base domain value at
    /// `invert_x(px)`.
    #[must_use]
    pub fn invert_x(self, pixel: f64) -> f64 {
        (pixel - self.translate_x) / self.scale
    }

    /// Clamps the translation so the panned plot stays inside the
    /// `[[0, 0], [width, height]]` translate extent.
    ///
    /// Out-of-bounds pans are a clamp, never an error.
    #[must_use]
    pub fn clamped_to_extent(self, width_px: f64) -> Self {
        let reach = width_px - self.scale * width_px;
        let lower = reach.min(0.0);
        let upper = reach.max(0.0);
        Self {
            scale: self.scale,
            translate_x: self.translate_x.clamp(lower, upper),
        }
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::{MIN_SCALE_FACTOR, ZoomTransform};

    #[test]
    fn collapsed_scale_factor_is_clamped() {
        let transform = ZoomTransform::new(0.0, 0.0);
        assert_eq!(transform.scale(), MIN_SCALE_FACTOR);
    }

    #[test]
    fn identity_inverts_pixels_unchanged() {
        let transform = ZoomTransform::identity();
        assert_eq!(transform.invert_x(120.0), 120.0);
        assert_eq!(ZoomTransform::default(), transform);
    }

    #[test]
    fn translate_is_clamped_to_extent_when_zoomed_in() {
        let transform = ZoomTransform::new(2.0, 50.0).clamped_to_extent(1_000.0);
        // At scale 2 over 1000px the panned range must stay within [-1000, 0].
        assert_eq!(transform.translate_x(), 0.0);

        let transform = ZoomTransform::new(2.0, -3_000.0).clamped_to_extent(1_000.0);
        assert_eq!(transform.translate_x(), -1_000.0);
    }

    #[test]
    fn translate_is_clamped_to_extent_when_zoomed_out() {
        let transform = ZoomTransform::new(0.5, -40.0).clamped_to_extent(1_000.0);
        assert_eq!(transform.translate_x(), 0.0);

        let transform = ZoomTransform::new(0.5, 900.0).clamped_to_extent(1_000.0);
        assert_eq!(transform.translate_x(), 500.0);
    }
}
