//! Optional observers that hook into engine events.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
