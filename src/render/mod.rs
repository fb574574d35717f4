mod frame;
mod memory_surface;
mod primitives;
mod svg;

pub use frame::{ClipRect, RenderFrame};
pub use memory_surface::MemorySurface;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, Stroke, TextHAlign, TextPrimitive,
};
pub use svg::{SvgSurface, frame_to_svg};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any host drawing surface.
///
/// A surface resolves container identifiers to measurable pixel sizes and
/// accepts fully materialized, deterministic [`RenderFrame`]s, so drawing
/// code stays isolated from chart domain and interaction logic.
pub trait Surface {
    /// Pixel size of a container, or `None` when the container does not
    /// exist on this surface.
    fn container_size(&self, container_id: &str) -> Option<Viewport>;

    /// Replaces the container's content with `frame`.
    fn commit(&mut self, container_id: &str, frame: &RenderFrame) -> ChartResult<()>;
}
