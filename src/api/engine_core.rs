use std::sync::Arc;

use indexmap::IndexMap;

use crate::core::{
    AnimationSpec, BarAnimator, ChartDataset, ValidationErrors, ValueRange, Viewport,
};
use crate::extensions::ChartPlugin;
use crate::render::TextMeasurer;

use super::BarChartStyle;

/// Host callback receiving the selected bar index, or `None` when cleared.
pub type SelectionListener = Box<dyn FnMut(Option<usize>)>;

/// Everything derived from one dataset identity.
pub(super) struct DatasetState {
    pub(super) dataset: Arc<ChartDataset>,
    pub(super) values: Vec<f64>,
    pub(super) errors: ValidationErrors,
    /// Cached once per dataset; `None` while validation fails.
    pub(super) range: Option<ValueRange>,
}

/// Internal engine state used by the public facade (`BarChartEngine`).
pub(super) struct EngineCore {
    pub(super) viewport: Viewport,
    pub(super) style: BarChartStyle,
    pub(super) animation_spec: AnimationSpec,
    pub(super) animations_enabled: bool,
    pub(super) data: DatasetState,
    pub(super) selection: Option<usize>,
    pub(super) animator: BarAnimator,
    pub(super) selection_listener: Option<SelectionListener>,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
    pub(super) text_measurer: Box<dyn TextMeasurer>,
}
