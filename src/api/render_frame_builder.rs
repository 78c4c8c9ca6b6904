use crate::core::{BarKind, BarLayout, Viewport, compute_bar_layout};
use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, TextMeasurer, TextPrimitive,
};

use super::data_controller::current_title;
use super::engine_core::EngineCore;

/// Final bar geometry for the current dataset, style and selection.
///
/// Returns `None` while the dataset fails validation.
pub(super) fn current_bar_layout(core: &EngineCore) -> ChartResult<Option<BarLayout>> {
    let Some(range) = core.data.range else {
        return Ok(None);
    };
    let canvas = core.style.container.canvas_rect(core.viewport);
    let layout = compute_bar_layout(
        &core.data.values,
        range,
        Viewport::new(canvas.width, canvas.height),
        core.style.layout_options(),
        core.selection,
    )?;
    Ok(Some(layout))
}

pub(super) fn build_render_frame(core: &EngineCore) -> ChartResult<RenderFrame> {
    match current_bar_layout(core)? {
        Some(layout) => Ok(build_chart_frame(core, &layout)),
        None => Ok(build_error_panel_frame(core)),
    }
}

fn build_chart_frame(core: &EngineCore, layout: &BarLayout) -> RenderFrame {
    let style = core.style;
    let measurer: &dyn TextMeasurer = core.text_measurer.as_ref();
    let canvas = style.container.canvas_rect(core.viewport);
    let mut frame = RenderFrame::new(core.viewport);

    let title = current_title(&core.data, core.selection);
    if !title.is_empty() {
        let extent = measurer.measure(title, style.title_font_size_px);
        let band_top = style.container.padding_px;
        let title_y =
            band_top + ((style.container.title_band_height_px - extent.height) * 0.5).max(0.0);
        frame.push_text(TextPrimitive::new(
            title,
            core.viewport.width * 0.5 - extent.width * 0.5,
            title_y,
            style.title_font_size_px,
            style.title_color,
        ));
    }

    let origin = (canvas.x, canvas.bottom());
    for end in [(canvas.x, canvas.y), (canvas.right(), canvas.bottom())] {
        frame.push_line(LinePrimitive::new(
            origin,
            end,
            style.axis_line_width,
            style.axis_color,
        ));
    }

    let label_font_size = style.index_label_font_size(layout.bar_width);
    for bar in &layout.bars {
        let progress = core.animator.progress(bar.index);
        let rect = bar
            .rect_at_progress(layout.baseline_y, progress)
            .translated(canvas.x, canvas.y);
        let color = match bar.kind {
            BarKind::Placeholder => style.placeholder_color,
            BarKind::Positive | BarKind::Negative => style.bar_color,
        };
        frame.push_rect(RectPrimitive::from_rect(rect, color));

        let label = (bar.index + 1).to_string();
        let extent = measurer.measure(&label, label_font_size);
        let slot_center = canvas.x + bar.rect.x + layout.bar_width * 0.5;
        frame.push_text(TextPrimitive::new(
            label,
            slot_center - extent.width * 0.5,
            canvas.bottom() + style.index_label_offset_y_px,
            label_font_size,
            style.index_label_color,
        ));
    }

    frame
}

/// One error-styled block per validation message, stacked from the top.
fn build_error_panel_frame(core: &EngineCore) -> RenderFrame {
    let panel = core.style.error_panel;
    let measurer: &dyn TextMeasurer = core.text_measurer.as_ref();
    let block_width = (core.viewport.width - 2.0 * panel.padding_px).max(0.0);
    let mut frame = RenderFrame::new(core.viewport);

    let mut y = panel.padding_px;
    for message in &core.data.errors {
        let extent = measurer.measure(message, panel.font_size_px);
        let block_height = extent.height + 2.0 * panel.block_padding_px;
        frame.push_rect(
            RectPrimitive::new(
                panel.padding_px,
                y,
                block_width,
                block_height,
                panel.background_color,
            )
            .with_corner_radius(panel.corner_radius_px),
        );
        frame.push_text(TextPrimitive::new(
            message.as_str(),
            panel.padding_px + panel.block_padding_px,
            y + panel.block_padding_px,
            panel.font_size_px,
            panel.text_color,
        ));
        y += block_height + panel.block_spacing_px;
    }

    frame
}
