use tracing::{debug, trace};

use crate::core::index_at;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    /// Currently highlighted bar, `None` when nothing is selected.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.core.selection
    }

    /// Installs the host callback invoked on every drag move and on drag end.
    pub fn set_selection_listener(&mut self, listener: impl FnMut(Option<usize>) + 'static) {
        self.core.selection_listener = Some(Box::new(listener));
    }

    pub fn clear_selection_listener(&mut self) {
        self.core.selection_listener = None;
    }

    /// Handles a drag move at container coordinates `(x, y)`.
    ///
    /// Returns the selected index. Only the horizontal position matters; any
    /// x (even outside the canvas) selects the nearest bar. Returns `Ok(None)`
    /// without notifying the listener while the dataset is invalid.
    pub fn drag_move(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "drag position must be finite".to_owned(),
            ));
        }
        if !self.is_valid() {
            return Ok(None);
        }

        let canvas = self.canvas_rect();
        let index = index_at(x - canvas.x, canvas.width, self.core.data.values.len());
        let changed = index != self.core.selection;
        self.core.selection = index;
        trace!(x, y, ?index, "drag move");

        self.notify_selection_listener(index);
        if changed {
            if let Some(index) = index {
                self.emit_plugin_event(PluginEvent::SelectionChanged { index });
            }
        }
        Ok(index)
    }

    /// Ends the drag: clears the selection and reports `None` to the listener.
    pub fn drag_end(&mut self) {
        if !self.is_valid() {
            return;
        }
        let had_selection = self.core.selection.take().is_some();
        debug!(had_selection, "drag end");

        self.notify_selection_listener(None);
        if had_selection {
            self.emit_plugin_event(PluginEvent::SelectionCleared);
        }
    }

    fn notify_selection_listener(&mut self, selection: Option<usize>) {
        if let Some(listener) = self.core.selection_listener.as_mut() {
            listener(selection);
        }
    }
}
