use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{AnimationSpec, ChartDataset};
use crate::error::ChartResult;
use crate::render::{EstimatedTextMeasurer, Renderer};

use super::data_controller::{derive_dataset_state, seed_animator};
use super::validation::{validate_bar_chart_style, validate_viewport_for_style};
use super::{BarChartConfig, BarChartEngine, engine_core::EngineCore};

impl<R: Renderer> BarChartEngine<R> {
    /// Creates an engine showing `dataset`.
    ///
    /// Style, animation timing and container size are validated here; the
    /// dataset's shape is not an error and renders as an error panel.
    pub fn new(
        renderer: R,
        config: BarChartConfig,
        dataset: impl Into<Arc<ChartDataset>>,
    ) -> ChartResult<Self> {
        let style = validate_bar_chart_style(config.style)?;
        let viewport = validate_viewport_for_style(config.viewport, style)?;
        let animation_spec: AnimationSpec = config.animation.validate()?;

        let data = derive_dataset_state(dataset.into())?;
        let animator = seed_animator(&data, style, animation_spec, config.animations_enabled)?;
        debug!(
            points = data.values.len(),
            valid = data.errors.is_empty(),
            animations_enabled = config.animations_enabled,
            "bar chart engine created"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                viewport,
                style,
                animation_spec,
                animations_enabled: config.animations_enabled,
                data,
                selection: None,
                animator,
                selection_listener: None,
                plugins: IndexMap::new(),
                text_measurer: Box::new(EstimatedTextMeasurer),
            },
        })
    }
}
