use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.core.viewport,
            points_len: self.core.data.values.len(),
            dataset_valid: self.core.data.errors.is_empty(),
            selection: self.core.selection,
            animation_finished: self.core.animator.is_finished(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.core.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.core.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
