use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};

/// Straight RGBA, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.533, 0.533, 0.533);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels, e.g. `Color::from_rgb8(0x62, 0x00, 0xee)`.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        let unit = |channel: u8| f64::from(channel) / 255.0;
        Self::rgb(unit(red), unit(green), unit(blue))
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ];
        match channels
            .into_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            Some((name, value)) => Err(ChartError::InvalidData(format!(
                "color channel `{name}` must be in [0, 1], got {value}"
            ))),
            None => Ok(()),
        }
    }
}

/// Stroked segment between two container points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: (f64, f64), to: (f64, f64), stroke_width: f64, color: Color) -> Self {
        Self {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        require_finite("line endpoints", &[self.x1, self.y1, self.x2, self.y2])?;
        require_positive("line stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled rectangle, optionally with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    /// `0` draws square corners.
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn from_rect(rect: Rect, fill_color: Color) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height, fill_color)
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        require_finite("rect origin", &[self.x, self.y])?;
        require_non_negative("rect width", self.width)?;
        require_non_negative("rect height", self.height)?;
        require_non_negative("rect corner radius", self.corner_radius)?;
        self.fill_color.validate()
    }
}

/// Single-line label whose text box has its top-left corner at `(x, y)`.
///
/// Callers that need centering measure the text first and offset `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData("text must not be empty".to_owned()));
        }
        require_finite("text position", &[self.x, self.y])?;
        require_positive("text font size", self.font_size_px)?;
        self.color.validate()
    }
}

fn require_finite(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn require_positive(what: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0, got {value}"
        )))
    }
}

fn require_non_negative(what: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and >= 0, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

    #[test]
    fn rect_rejects_negative_size() {
        let rect = RectPrimitive::new(0.0, 0.0, -1.0, 4.0, Color::BLACK);
        assert!(rect.validate().is_err());
    }

    #[test]
    fn rgb8_maps_to_unit_channels() {
        let color = Color::from_rgb8(255, 0, 51);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.2));
        assert!(color.validate().is_ok());
        assert!(color.with_alpha(1.5).validate().is_err());
        assert!(Color::rgb(f64::NAN, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn zero_width_line_and_empty_text_are_rejected() {
        let line = LinePrimitive::new((0.0, 0.0), (1.0, 1.0), 0.0, Color::BLACK);
        assert!(line.validate().is_err());
        let text = TextPrimitive::new("", 0.0, 0.0, 10.0, Color::BLACK);
        assert!(text.validate().is_err());
    }
}
