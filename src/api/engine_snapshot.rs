use serde::{Deserialize, Serialize};

use crate::core::{BarLayout, Viewport};

/// Deterministic engine state used by regression tests and host debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSnapshot {
    pub viewport: Viewport,
    pub dataset_title: String,
    pub title: String,
    pub selection: Option<usize>,
    pub validation_errors: Vec<String>,
    pub layout: Option<BarLayout>,
    pub animation_progress: Vec<f64>,
}
