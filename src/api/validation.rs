use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{BarChartStyle, ContainerStyle, ErrorPanelStyle};

pub(super) fn validate_bar_chart_style(style: BarChartStyle) -> ChartResult<BarChartStyle> {
    for color in [
        style.bar_color,
        style.placeholder_color,
        style.axis_color,
        style.title_color,
        style.index_label_color,
    ] {
        color.validate().map_err(into_style_error)?;
    }

    for (name, value) in [
        ("axis_line_width", style.axis_line_width),
        ("default_scale_percent", style.default_scale_percent),
        ("selected_scale_percent", style.selected_scale_percent),
        ("title_font_size_px", style.title_font_size_px),
        (
            "index_label_min_font_size_px",
            style.index_label_min_font_size_px,
        ),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidStyle(format!(
                "bar chart style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("spacing_px", style.spacing_px),
        ("zero_threshold", style.zero_threshold),
        ("placeholder_height_ratio", style.placeholder_height_ratio),
        ("index_label_font_ratio", style.index_label_font_ratio),
        ("index_label_offset_y_px", style.index_label_offset_y_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidStyle(format!(
                "bar chart style `{name}` must be finite and >= 0"
            )));
        }
    }

    validate_container_style(style.container)?;
    validate_error_panel_style(style.error_panel)?;
    Ok(style)
}

fn validate_container_style(container: ContainerStyle) -> ChartResult<ContainerStyle> {
    for (name, value) in [
        ("padding_px", container.padding_px),
        ("title_band_height_px", container.title_band_height_px),
        ("label_band_height_px", container.label_band_height_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidStyle(format!(
                "container style `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(container)
}

fn validate_error_panel_style(panel: ErrorPanelStyle) -> ChartResult<ErrorPanelStyle> {
    panel.background_color.validate().map_err(into_style_error)?;
    panel.text_color.validate().map_err(into_style_error)?;

    if !panel.font_size_px.is_finite() || panel.font_size_px <= 0.0 {
        return Err(ChartError::InvalidStyle(
            "error panel `font_size_px` must be finite and > 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("padding_px", panel.padding_px),
        ("block_padding_px", panel.block_padding_px),
        ("block_spacing_px", panel.block_spacing_px),
        ("corner_radius_px", panel.corner_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidStyle(format!(
                "error panel `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(panel)
}

/// The container must leave a non-empty canvas once padding and bands are removed.
pub(super) fn validate_viewport_for_style(
    viewport: Viewport,
    style: BarChartStyle,
) -> ChartResult<Viewport> {
    let canvas = style.container.canvas_rect(viewport);
    if !viewport.is_valid() || canvas.width <= 0.0 || canvas.height <= 0.0 {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

fn into_style_error(err: ChartError) -> ChartError {
    match err {
        ChartError::InvalidData(message) => ChartError::InvalidStyle(message),
        other => other,
    }
}
