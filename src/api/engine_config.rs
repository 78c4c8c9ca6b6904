use serde::{Deserialize, Serialize};

use crate::core::{AnimationSpec, Viewport};
use crate::error::{ChartError, ChartResult};

use super::BarChartStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings;
/// every field except `viewport` may be omitted from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: BarChartStyle,
    #[serde(default)]
    pub animation: AnimationSpec,
    #[serde(default = "default_animations_enabled")]
    pub animations_enabled: bool,
}

fn default_animations_enabled() -> bool {
    true
}

impl BarChartConfig {
    /// Creates a config with the stock style and animation.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: BarChartStyle::default(),
            animation: AnimationSpec::default(),
            animations_enabled: default_animations_enabled(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: BarChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Disables the grow-in animation; bars render at full height immediately.
    #[must_use]
    pub fn without_animation(mut self) -> Self {
        self.animations_enabled = false;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }
}
