pub mod scale;
pub mod series;
pub mod time_scale;
pub mod transform;
pub mod types;
pub mod value_scale;

pub use scale::LinearScale;
pub use series::{Sample, SeriesSet};
pub use time_scale::TimeScale;
pub use transform::{MIN_SCALE_FACTOR, ZoomTransform};
pub use types::{Margins, PlotArea, Viewport};
pub use value_scale::ValueScale;
