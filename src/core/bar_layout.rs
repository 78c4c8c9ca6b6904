use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::lerp;
use crate::core::{Rect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Value domain used to place the baseline and scale bar heights.
///
/// Computed once per dataset. Unlike a plain min/max over the values, the
/// domain is widened to contain zero so datasets with a single sign keep
/// their baseline on the canvas edge instead of floating above or below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::InvalidData(
                "value range requires at least one value".to_owned(),
            ));
        }

        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData("bar value must be finite".to_owned()));
        }

        let (min, max) = value_extent(values).unwrap_or((0.0, 0.0));
        Ok(Self {
            min: min.min(0.0),
            max: max.max(0.0),
        })
    }

    /// `max - min`, or `1.0` for an all-zero dataset.
    #[must_use]
    pub fn span(self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Fraction of the canvas height above the zero baseline.
    #[must_use]
    pub fn baseline_ratio(self) -> f64 {
        self.max / self.span()
    }
}

/// Tunables for bar placement, derived from the host style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutOptions {
    pub spacing_px: f64,
    /// Height/width emphasis in percent for unselected bars.
    pub default_scale_percent: f64,
    /// Height/width emphasis in percent for the selected bar.
    pub selected_scale_percent: f64,
    /// Values with a magnitude below this are drawn as placeholders.
    pub zero_threshold: f64,
    /// Placeholder height as a fraction of half the canvas height.
    pub placeholder_height_ratio: f64,
}

impl Default for BarLayoutOptions {
    fn default() -> Self {
        Self {
            spacing_px: 2.0,
            default_scale_percent: 100.0,
            selected_scale_percent: 110.0,
            zero_threshold: 0.5,
            placeholder_height_ratio: 0.1,
        }
    }
}

impl BarLayoutOptions {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("default_scale_percent", self.default_scale_percent),
            ("selected_scale_percent", self.selected_scale_percent),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar layout `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("spacing_px", self.spacing_px),
            ("zero_threshold", self.zero_threshold),
            ("placeholder_height_ratio", self.placeholder_height_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar layout `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn scale_percent_for(self, index: usize, selected: Option<usize>) -> f64 {
        if selected == Some(index) {
            self.selected_scale_percent
        } else {
            self.default_scale_percent
        }
    }
}

/// Whether a value renders as a fixed-height placeholder instead of a scaled bar.
#[must_use]
pub fn is_placeholder_value(value: f64, zero_threshold: f64) -> bool {
    value.abs() < zero_threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarKind {
    /// Drawn upward from the baseline.
    Positive,
    /// Drawn downward from the baseline.
    Negative,
    /// Zero-valued bar drawn downward at a fixed height in the alternate color.
    Placeholder,
}

/// Final (fully animated) geometry of one bar in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub kind: BarKind,
    pub emphasized: bool,
    pub rect: Rect,
}

impl BarGeometry {
    /// Rectangle for an animation progress in `[0, 1]`.
    ///
    /// Placeholders ignore progress and always use their full height.
    #[must_use]
    pub fn rect_at_progress(self, baseline_y: f64, progress: f64) -> Rect {
        let progress = progress.clamp(0.0, 1.0);
        match self.kind {
            BarKind::Placeholder => self.rect,
            BarKind::Positive => {
                let height = lerp(0.0, self.rect.height, progress);
                Rect::new(self.rect.x, baseline_y - height, self.rect.width, height)
            }
            BarKind::Negative => {
                let height = lerp(0.0, self.rect.height, progress);
                Rect::new(self.rect.x, baseline_y, self.rect.width, height)
            }
        }
    }

    /// Horizontal center of the bar slot used for label placement.
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.rect.x + self.rect.width * 0.5
    }
}

/// Deterministic bar placement for one canvas size and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub canvas: Viewport,
    pub baseline_y: f64,
    pub bar_width: f64,
    pub slot_width: f64,
    pub bars: Vec<BarGeometry>,
}

/// Maps bar values onto the canvas.
///
/// `range` must come from the same dataset as `values`; callers cache it once
/// per dataset instead of recomputing per frame.
pub fn compute_bar_layout(
    values: &[f64],
    range: ValueRange,
    canvas: Viewport,
    options: BarLayoutOptions,
    selected: Option<usize>,
) -> ChartResult<BarLayout> {
    if !canvas.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: canvas.width,
            height: canvas.height,
        });
    }
    let options = options.validate()?;

    if values.is_empty() {
        return Ok(BarLayout {
            canvas,
            baseline_y: canvas.height * range.baseline_ratio(),
            bar_width: 0.0,
            slot_width: 0.0,
            bars: Vec::new(),
        });
    }

    let count = values.len() as f64;
    let span = range.span();
    let baseline_y = canvas.height * range.baseline_ratio();
    // Slots match the `index_at` buckets; spacing eats into the bar, never the slot.
    let slot_width = canvas.width / count;
    let bar_width = (slot_width - options.spacing_px).max(0.0);
    let placeholder_height = canvas.height / 2.0 * options.placeholder_height_ratio;

    let mut bars = Vec::with_capacity(values.len());
    for (index, value) in values.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "bar value at index {index} must be finite"
            )));
        }

        let scale_percent = options.scale_percent_for(index, selected);
        let x = index as f64 * slot_width;
        // Emphasis widens the bar but never past its own slot.
        let width = (bar_width * scale_percent / 100.0).min(slot_width);

        let (kind, top, height) = if is_placeholder_value(value, options.zero_threshold) {
            (BarKind::Placeholder, baseline_y, placeholder_height)
        } else {
            let height = canvas.height * scale_percent * (value.abs() / span) / 100.0;
            if value > 0.0 {
                (BarKind::Positive, baseline_y - height, height)
            } else {
                (BarKind::Negative, baseline_y, height)
            }
        };

        bars.push(BarGeometry {
            index,
            kind,
            emphasized: selected == Some(index),
            rect: Rect::new(x, top, width, height),
        });
    }

    Ok(BarLayout {
        canvas,
        baseline_y,
        bar_width,
        slot_width,
        bars,
    })
}

/// Smallest and largest value, or `None` for an empty slice.
#[must_use]
pub fn value_extent(values: &[f64]) -> Option<(f64, f64)> {
    let min = values.iter().copied().map(OrderedFloat).min()?;
    let max = values.iter().copied().map(OrderedFloat).max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// Buckets a pointer x-coordinate into a bar index.
///
/// Every coordinate maps to a bar, including points left or right of the
/// canvas. Returns `None` only when there are no bars or no canvas width.
#[must_use]
pub fn index_at(pointer_x: f64, canvas_width: f64, bar_count: usize) -> Option<usize> {
    if bar_count == 0 || !canvas_width.is_finite() || canvas_width <= 0.0 {
        return None;
    }
    if pointer_x.is_nan() {
        return Some(0);
    }

    let bucket_width = canvas_width / bar_count as f64;
    let bucket = (pointer_x / bucket_width).floor();
    if bucket <= 0.0 {
        return Some(0);
    }
    let last = bar_count - 1;
    if bucket >= last as f64 {
        return Some(last);
    }
    Some(bucket as usize)
}
