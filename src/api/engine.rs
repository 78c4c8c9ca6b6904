use tracing::debug;

use crate::core::{Rect, Viewport};
use crate::error::ChartResult;
use crate::render::{Renderer, TextMeasurer};

use super::data_controller::seed_animator;
use super::render_frame_builder::build_render_frame;
use super::validation::{validate_bar_chart_style, validate_viewport_for_style};
use super::{BarChartStyle, PluginEvent, engine_core::EngineCore};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// View-model of one mounted bar chart.
///
/// Owns selection and animation state, derives geometry from the current
/// dataset and style, and hands finished frames to the renderer.
pub struct BarChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> BarChartEngine<R> {
    #[must_use]
    pub fn style(&self) -> BarChartStyle {
        self.core.style
    }

    /// Replaces the style. Geometry picks it up on the next frame.
    ///
    /// Animation progress is kept unless `zero_threshold` changes. Bars may
    /// then switch between placeholder and real, so the tweens are reseeded.
    pub fn set_style(&mut self, style: BarChartStyle) -> ChartResult<()> {
        let style = validate_bar_chart_style(style)?;
        validate_viewport_for_style(self.core.viewport, style)?;
        if style.zero_threshold != self.core.style.zero_threshold {
            self.core.animator = seed_animator(
                &self.core.data,
                style,
                self.core.animation_spec,
                self.core.animations_enabled,
            )?;
            debug!(
                zero_threshold = style.zero_threshold,
                "zero threshold changed, reseeded bar animation"
            );
        }
        self.core.style = style;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.viewport
    }

    /// Applies a new container size from the host layout pass.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.core.viewport = validate_viewport_for_style(viewport, self.core.style)?;
        Ok(())
    }

    /// Bar canvas inside the container, in container coordinates.
    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        self.core.style.container.canvas_rect(self.core.viewport)
    }

    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.core.text_measurer = measurer;
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = build_render_frame(&self.core)?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// GTK draw callbacks use this path so the renderer stays decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = build_render_frame(&self.core)?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
