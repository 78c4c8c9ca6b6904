use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{
    AnimationSpec, BarAnimator, ChartDataset, ValidationErrors, ValueRange, validate_bar_data,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::engine_core::DatasetState;
use super::{BarChartEngine, BarChartStyle, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    /// Replaces the dataset.
    ///
    /// Passing the same `Arc` again is a no-op, so hosts may call this on
    /// every layout pass. A new identity re-runs validation, recomputes the
    /// cached value range, clears the selection and restarts the animation.
    pub fn set_dataset(&mut self, dataset: impl Into<Arc<ChartDataset>>) -> ChartResult<()> {
        let dataset = dataset.into();
        if Arc::ptr_eq(&dataset, &self.core.data.dataset) {
            return Ok(());
        }

        let data = derive_dataset_state(dataset)?;
        let animator = seed_animator(
            &data,
            self.core.style,
            self.core.animation_spec,
            self.core.animations_enabled,
        )?;
        debug!(
            points = data.values.len(),
            valid = data.errors.is_empty(),
            "set dataset"
        );

        self.core.data = data;
        self.core.animator = animator;
        self.core.selection = None;
        self.emit_plugin_event(PluginEvent::DatasetChanged {
            points_len: self.core.data.values.len(),
            valid: self.core.data.errors.is_empty(),
        });
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self) -> &Arc<ChartDataset> {
        &self.core.data.dataset
    }

    /// Messages from the last validation pass; empty when the chart is drawable.
    #[must_use]
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.core.data.errors
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.core.data.errors.is_empty()
    }

    /// Cached value range of the current dataset, `None` while invalid.
    #[must_use]
    pub fn value_range(&self) -> Option<ValueRange> {
        self.core.data.range
    }

    /// Title currently shown above the chart: the selected bar's label while
    /// a selection is active, the dataset title otherwise.
    #[must_use]
    pub fn title(&self) -> &str {
        current_title(&self.core.data, self.core.selection)
    }
}

pub(super) fn current_title(data: &DatasetState, selection: Option<usize>) -> &str {
    selection
        .and_then(|index| data.dataset.label_at(index))
        .unwrap_or(&data.dataset.title)
}

pub(super) fn derive_dataset_state(dataset: Arc<ChartDataset>) -> ChartResult<DatasetState> {
    dataset.ensure_finite()?;

    let errors: ValidationErrors = validate_bar_data(&dataset);
    let values = dataset.values();
    let range = if errors.is_empty() {
        Some(ValueRange::from_values(&values)?)
    } else {
        warn!(
            points = values.len(),
            errors = ?errors.as_slice(),
            "dataset failed validation"
        );
        None
    };

    Ok(DatasetState {
        dataset,
        values,
        errors,
        range,
    })
}

pub(super) fn seed_animator(
    data: &DatasetState,
    style: BarChartStyle,
    spec: AnimationSpec,
    animations_enabled: bool,
) -> ChartResult<BarAnimator> {
    if !data.errors.is_empty() {
        return Ok(BarAnimator::completed(0, spec));
    }
    if !animations_enabled {
        return Ok(BarAnimator::completed(data.values.len(), spec));
    }
    BarAnimator::seed(&data.values, style.zero_threshold, spec)
}
