//! telechart-rs: live multi-chart time-series engine.
//!
//! Each chart polls a data source through an external collaborator and
//! redraws without losing the viewer's pan/zoom, while zoom gestures stay
//! synchronized across every chart registered with the same
//! [`ChartManager`]. The engine is single-threaded: updates and gestures
//! run to completion inside the host's event loop, and overlapping poll
//! responses resolve last-write-wins.

pub mod chart;
pub mod core;
pub mod error;
pub mod ingest;
pub mod render;
pub mod telemetry;

pub use chart::{ChartConfig, ChartManager, ChartView};
pub use error::{ChartError, ChartResult};
