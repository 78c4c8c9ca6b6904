//! bar-chart-rs: an interactive, animated bar-chart component.
//!
//! The crate validates a labelled numeric dataset, lays bars out around a
//! zero baseline, grows them in with staggered eased tweens, lets the user
//! pick a bar by dragging, and emits backend-agnostic draw primitives. The
//! host supplies the canvas size, pointer events, frame clock ticks and a
//! renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChartConfig, BarChartEngine, BarChartStyle};
pub use error::{ChartError, ChartResult};
