use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{AnimationSpec, TweenState};
use crate::render::Renderer;

use super::{BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    /// Advances the grow-in animation by one frame-clock delta.
    ///
    /// Returns `true` while the host should keep scheduling frames.
    pub fn advance_animation(&mut self, delta: Duration) -> bool {
        if !self.core.animator.tick(delta) {
            return false;
        }
        trace!(delta_ms = delta.as_secs_f64() * 1000.0, "animation tick");

        if self.core.animator.is_finished() {
            debug!(bars = self.core.animator.len(), "bar animation finished");
            self.emit_plugin_event(PluginEvent::AnimationFinished);
            return false;
        }
        true
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.core.animator.is_finished()
    }

    /// Progress of bar `index` in `[0, 1]`.
    #[must_use]
    pub fn bar_progress(&self, index: usize) -> f64 {
        self.core.animator.progress(index)
    }

    #[must_use]
    pub fn bar_tween_state(&self, index: usize) -> Option<TweenState> {
        self.core.animator.state(index)
    }

    #[must_use]
    pub fn animation_spec(&self) -> AnimationSpec {
        self.core.animation_spec
    }
}
