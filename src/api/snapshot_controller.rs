use crate::core::BarLayout;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::{build_render_frame, current_bar_layout};
use super::{BarChartEngine, BarChartSnapshot};

impl<R: Renderer> BarChartEngine<R> {
    /// Final (non-animated) bar geometry in canvas coordinates, `None` while
    /// the dataset is invalid.
    pub fn bar_layout(&self) -> ChartResult<Option<BarLayout>> {
        current_bar_layout(&self.core)
    }

    /// Builds the frame `render` would draw, without drawing it.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        build_render_frame(&self.core)
    }

    pub fn snapshot(&self) -> ChartResult<BarChartSnapshot> {
        Ok(BarChartSnapshot {
            viewport: self.core.viewport,
            dataset_title: self.core.data.dataset.title.clone(),
            title: self.title().to_owned(),
            selection: self.core.selection,
            validation_errors: self.core.data.errors.to_vec(),
            layout: self.bar_layout()?,
            animation_progress: self.core.animator.progresses(),
        })
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
