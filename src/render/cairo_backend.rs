use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextExtent, TextMeasurer,
    TextPrimitive,
};

const DEFAULT_FONT_FAMILY: &str = "Sans";

/// Primitive counts from the most recent draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also paint into a context owned by someone else, such
/// as a GTK `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango backend.
///
/// `Renderer::render` paints onto an owned offscreen surface that can be
/// saved with [`CairoRenderer::write_png`].
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(format!(
                "cairo surface must be non-empty, got {width}x{height}"
            )));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("create image surface", err))?;
        Ok(Self {
            surface,
            background: Color::WHITE,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.background
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    /// Font family used for titles, index labels and error messages.
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::Backend(format!("cannot create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::Backend(format!("cannot encode png `{}`: {err}", path.display()))
        })
    }

    fn draw_frame(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("paint background", err))?;

        for line in &frame.lines {
            stroke_line(context, line)?;
        }
        for rect in &frame.rects {
            fill_rect(context, rect)?;
        }
        for text in &frame.texts {
            show_text(context, &self.font_family, text);
        }

        self.last_stats = CairoRenderStats {
            lines_drawn: frame.lines.len(),
            rects_drawn: frame.rects.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context =
            Context::new(&self.surface).map_err(|err| backend_error("create context", err))?;
        self.draw_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.draw_frame(context, frame)
    }
}

/// Pango-backed [`TextMeasurer`] that agrees with what `CairoRenderer` draws.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: Context,
    font_family: String,
}

impl PangoTextMeasurer {
    pub fn new(font_family: impl Into<String>) -> ChartResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| backend_error("create measuring surface", err))?;
        let context =
            Context::new(&surface).map_err(|err| backend_error("create measuring context", err))?;
        Ok(Self {
            context,
            font_family: font_family.into(),
        })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(&self.font_family, font_size_px)));
        layout.set_text(text);
        let (width, height) = layout.pixel_size();
        TextExtent {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("stroke line", err))
}

fn fill_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    if radius > 0.0 {
        rounded_rect_path(context, rect, radius);
    } else {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
    }
    set_source(context, rect.fill_color);
    context.fill().map_err(|err| backend_error("fill rect", err))
}

fn show_text(context: &Context, family: &str, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(family, text.font_size_px)));
    layout.set_text(&text.text);
    set_source(context, text.color);
    context.move_to(text.x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn rounded_rect_path(context: &Context, rect: &RectPrimitive, radius: f64) {
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;
    context.new_sub_path();
    context.arc(right - radius, rect.y + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(rect.x + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(rect.x + radius, rect.y + radius, radius, PI, 1.5 * PI);
    context.close_path();
}

fn font_description(family: &str, font_size_px: f64) -> FontDescription {
    let mut description = FontDescription::new();
    description.set_family(family);
    description.set_absolute_size(font_size_px * f64::from(pango::SCALE));
    description
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(action: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("cairo failed to {action}: {err}"))
}
