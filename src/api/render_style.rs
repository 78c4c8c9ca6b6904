use serde::{Deserialize, Serialize};

use crate::core::{BarLayoutOptions, Rect, Viewport};
use crate::render::Color;

/// Outer sizing of the chart container.
///
/// The bar canvas is what remains after removing the padding, the title band
/// above it and the index-label band below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub padding_px: f64,
    pub title_band_height_px: f64,
    pub label_band_height_px: f64,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            padding_px: 0.0,
            title_band_height_px: 32.0,
            label_band_height_px: 18.0,
        }
    }
}

impl ContainerStyle {
    /// Canvas rectangle inside `viewport`, in container coordinates.
    #[must_use]
    pub fn canvas_rect(self, viewport: Viewport) -> Rect {
        let x = self.padding_px;
        let y = self.padding_px + self.title_band_height_px;
        Rect::new(
            x,
            y,
            viewport.width - 2.0 * self.padding_px,
            viewport.height
                - 2.0 * self.padding_px
                - self.title_band_height_px
                - self.label_band_height_px,
        )
    }
}

/// Look of the validation error panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorPanelStyle {
    pub padding_px: f64,
    pub block_padding_px: f64,
    pub block_spacing_px: f64,
    pub corner_radius_px: f64,
    pub font_size_px: f64,
    pub background_color: Color,
    pub text_color: Color,
}

impl Default for ErrorPanelStyle {
    fn default() -> Self {
        Self {
            padding_px: 15.0,
            block_padding_px: 5.0,
            block_spacing_px: 5.0,
            corner_radius_px: 5.0,
            font_size_px: 14.0,
            background_color: Color::from_rgb8(0xb0, 0x00, 0x20).with_alpha(0.12),
            text_color: Color::from_rgb8(0xb0, 0x00, 0x20),
        }
    }
}

/// Host-supplied look of the bar chart.
///
/// `BarChartStyle::default()` is the stock style; `with_*` methods adjust one
/// field at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartStyle {
    pub bar_color: Color,
    /// Color of zero-valued placeholder bars.
    pub placeholder_color: Color,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub spacing_px: f64,
    pub default_scale_percent: f64,
    pub selected_scale_percent: f64,
    pub zero_threshold: f64,
    pub placeholder_height_ratio: f64,
    pub title_color: Color,
    pub title_font_size_px: f64,
    pub index_label_color: Color,
    /// Index label font size as a fraction of the bar width.
    pub index_label_font_ratio: f64,
    pub index_label_min_font_size_px: f64,
    pub index_label_offset_y_px: f64,
    pub container: ContainerStyle,
    pub error_panel: ErrorPanelStyle,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        let layout = BarLayoutOptions::default();
        Self {
            bar_color: Color::from_rgb8(0x62, 0x00, 0xee),
            placeholder_color: Color::RED,
            axis_color: Color::GRAY,
            axis_line_width: 1.0,
            spacing_px: layout.spacing_px,
            default_scale_percent: layout.default_scale_percent,
            selected_scale_percent: layout.selected_scale_percent,
            zero_threshold: layout.zero_threshold,
            placeholder_height_ratio: layout.placeholder_height_ratio,
            title_color: Color::BLACK,
            title_font_size_px: 18.0,
            index_label_color: Color::BLACK,
            index_label_font_ratio: 0.1,
            index_label_min_font_size_px: 5.0,
            index_label_offset_y_px: 2.0,
            container: ContainerStyle::default(),
            error_panel: ErrorPanelStyle::default(),
        }
    }
}

impl BarChartStyle {
    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing_px: f64) -> Self {
        self.spacing_px = spacing_px;
        self
    }

    #[must_use]
    pub fn with_scale_percents(mut self, default_percent: f64, selected_percent: f64) -> Self {
        self.default_scale_percent = default_percent;
        self.selected_scale_percent = selected_percent;
        self
    }

    #[must_use]
    pub fn with_zero_threshold(mut self, zero_threshold: f64) -> Self {
        self.zero_threshold = zero_threshold;
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: ContainerStyle) -> Self {
        self.container = container;
        self
    }

    #[must_use]
    pub fn with_error_panel(mut self, error_panel: ErrorPanelStyle) -> Self {
        self.error_panel = error_panel;
        self
    }

    #[must_use]
    pub fn layout_options(self) -> BarLayoutOptions {
        BarLayoutOptions {
            spacing_px: self.spacing_px,
            default_scale_percent: self.default_scale_percent,
            selected_scale_percent: self.selected_scale_percent,
            zero_threshold: self.zero_threshold,
            placeholder_height_ratio: self.placeholder_height_ratio,
        }
    }

    /// Font size of the index labels for a given bar width.
    #[must_use]
    pub fn index_label_font_size(self, bar_width: f64) -> f64 {
        (bar_width * self.index_label_font_ratio)
            .floor()
            .max(self.index_label_min_font_size_px)
    }
}
