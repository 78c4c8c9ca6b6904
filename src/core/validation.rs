//! Data-shape rules checked before a chart is drawn.
//!
//! Failures are not `ChartError`s: they are human-readable messages that the
//! engine renders in place of the chart.

use smallvec::SmallVec;

use crate::core::{ChartDataset, MultiSeriesDataset};

/// Messages produced by one validation pass. Empty means valid.
pub type ValidationErrors = SmallVec<[String; 2]>;

pub const MIN_REQUIRED_PIE: usize = 2;
pub const MIN_REQUIRED_LINE: usize = 2;
pub const MIN_REQUIRED_STACKED_BAR: usize = 1;
pub const MIN_REQUIRED_BAR: usize = 2;

#[must_use]
pub fn points_less_than_min_message(min_required: usize) -> String {
    format!("Data points size should be greater than or equal to {min_required}.")
}

#[must_use]
pub fn item_points_size_message(index: usize, actual: usize, expected: usize) -> String {
    format!("Item at index {index} has {actual} points, expected {expected}.")
}

#[must_use]
pub fn categories_size_mismatch_message(actual: usize, expected: usize) -> String {
    format!("Categories size {actual} does not match expected {expected}.")
}

#[must_use]
pub fn colors_size_mismatch_message(actual: usize, expected: usize) -> String {
    format!("Colors size {actual} does not match expected {expected}.")
}

/// Validates a single-series bar dataset.
#[must_use]
pub fn validate_bar_data(dataset: &ChartDataset) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if dataset.len() < MIN_REQUIRED_BAR {
        errors.push(points_less_than_min_message(MIN_REQUIRED_BAR));
    }
    errors
}

/// Validates a stacked-bar dataset where `colors_len` bar colors were supplied
/// (zero means "use defaults").
#[must_use]
pub fn validate_stacked_bar_data(data: &MultiSeriesDataset, colors_len: usize) -> ValidationErrors {
    let points_len = data.items.first().map_or(0, ChartDataset::len);
    validate_chart_data(
        data,
        points_len,
        MIN_REQUIRED_STACKED_BAR,
        colors_len,
        points_len,
    )
}

/// Generic multi-series rules.
///
/// The minimum-size rule short-circuits; the remaining rules all report.
#[must_use]
pub fn validate_chart_data(
    data: &MultiSeriesDataset,
    points_len: usize,
    min_required_points: usize,
    colors_len: usize,
    expected_colors_len: usize,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if points_len < min_required_points {
        errors.push(points_less_than_min_message(min_required_points));
        return errors;
    }

    for (index, item) in data.items.iter().enumerate() {
        if item.len() != points_len {
            errors.push(item_points_size_message(index, item.len(), points_len));
        }
    }

    if data.has_categories() && data.categories.len() != points_len {
        errors.push(categories_size_mismatch_message(
            data.categories.len(),
            points_len,
        ));
    }

    if colors_len > 0 && colors_len != expected_colors_len {
        errors.push(colors_size_mismatch_message(
            colors_len,
            expected_colors_len,
        ));
    }

    errors
}
