use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub points_len: usize,
    pub dataset_valid: bool,
    pub selection: Option<usize>,
    pub animation_finished: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DatasetChanged { points_len: usize, valid: bool },
    SelectionChanged { index: usize },
    SelectionCleared,
    AnimationFinished,
    Rendered,
}

/// Observer hook for bounded custom logic.
///
/// Plugins see events and a context snapshot; they cannot mutate the engine.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
