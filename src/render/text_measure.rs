/// Measured size of a single-line label in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Text-measurement collaborator used to center labels.
///
/// Hosts with a real text stack plug in their own implementation; the
/// `cairo-backend` feature ships a Pango-backed one.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

/// Deterministic, backend-independent glyph-width estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextExtent {
            width: units * font_size_px,
            height: font_size_px * 1.2,
        }
    }
}
