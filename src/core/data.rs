use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// One labelled bar value. Negative values extend below the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(label, decimal_to_f64(value, "bar value")?))
    }
}

/// Ordered single-series dataset with an overall title.
///
/// The dataset itself does not enforce the minimum point count; rendering
/// runs [`validate_bar_data`](crate::core::validate_bar_data) and shows an
/// error panel instead of bars when the rules fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub title: String,
    pub points: Vec<DataPoint>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(title: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }

    /// Builds a dataset from `(label, value)` pairs.
    #[must_use]
    pub fn from_pairs<L: Into<String>>(
        title: impl Into<String>,
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        let points = pairs
            .into_iter()
            .map(|(label, value)| DataPoint::new(label, value))
            .collect();
        Self::new(title, points)
    }

    /// Builds a dataset whose labels are the values themselves.
    #[must_use]
    pub fn from_values(title: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::from_values_with_affixes(title, values, "", "")
    }

    /// Builds a dataset labelling each value as `{prefix}{value}{postfix}`.
    #[must_use]
    pub fn from_values_with_affixes(
        title: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
        prefix: &str,
        postfix: &str,
    ) -> Self {
        let points = values
            .into_iter()
            .map(|value| {
                DataPoint::new(
                    format!("{prefix}{}{postfix}", format_value_label(value)),
                    value,
                )
            })
            .collect();
        Self::new(title, points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|point| point.label.as_str())
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.points.get(index).map(|point| point.label.as_str())
    }

    /// Rejects non-finite values. Point count is checked separately by the validator.
    pub fn ensure_finite(&self) -> ChartResult<()> {
        if let Some(index) = self
            .points
            .iter()
            .position(|point| !point.value.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "bar value at index {index} must be finite"
            )));
        }
        Ok(())
    }
}

/// Several equally-sized series sharing optional category labels.
///
/// Only the validator consumes this shape; the renderer draws one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSeriesDataset {
    pub title: String,
    pub items: Vec<ChartDataset>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl MultiSeriesDataset {
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<ChartDataset>) -> Self {
        Self {
            title: title.into(),
            items,
            categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }
}

fn format_value_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{ChartDataset, DataPoint};

    #[test]
    fn value_labels_keep_one_decimal_for_whole_numbers() {
        let dataset = ChartDataset::from_values_with_affixes("t", [100.0, -60.0, 2.5], "$", "k");
        let labels: Vec<&str> = dataset.labels().collect();
        assert_eq!(labels, vec!["$100.0k", "$-60.0k", "$2.5k"]);
    }

    #[test]
    fn decimal_points_convert_to_f64() {
        let point = DataPoint::from_decimal("q1", Decimal::new(1234, 2)).expect("decimal");
        assert_eq!(point.value, 12.34);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let dataset = ChartDataset::from_pairs("t", [("a", 1.0), ("b", f64::NAN)]);
        assert!(dataset.ensure_finite().is_err());
    }
}
