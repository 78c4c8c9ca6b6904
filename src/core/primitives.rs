use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value
        .to_f64()
        .filter(|converted| converted.is_finite())
        .ok_or_else(|| ChartError::InvalidData(format!("{field_name} cannot be represented as f64")))
}

/// Linear interpolation between `start` and `end` by `fraction`.
#[must_use]
pub fn lerp(start: f64, end: f64, fraction: f64) -> f64 {
    start + (end - start) * fraction
}
