use bar_chart_rs::core::{
    ChartDataset, MIN_REQUIRED_BAR, MultiSeriesDataset, validate_bar_data,
    validate_stacked_bar_data,
};

#[test]
fn single_point_dataset_reports_minimum_size_error() {
    let dataset = ChartDataset::from_values("Emotional", [50.0]);
    let errors = validate_bar_data(&dataset);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        "Data points size should be greater than or equal to 2."
    );
}

#[test]
fn empty_dataset_reports_minimum_size_error() {
    let dataset = ChartDataset::new("empty", Vec::new());
    let errors = validate_bar_data(&dataset);
    assert_eq!(errors.len(), 1);
}

#[test]
fn datasets_at_or_above_minimum_are_valid() {
    for len in MIN_REQUIRED_BAR..10 {
        let dataset = ChartDataset::from_values("ok", (0..len).map(|i| i as f64));
        assert!(
            validate_bar_data(&dataset).is_empty(),
            "dataset of {len} points should be valid"
        );
    }
}

#[test]
fn validation_does_not_care_about_value_signs_or_zeros() {
    let dataset = ChartDataset::from_values("mixed", [0.0, 0.0, -1.0]);
    assert!(validate_bar_data(&dataset).is_empty());
}

#[test]
fn stacked_bar_rules_report_every_mismatch() {
    let data = MultiSeriesDataset::new(
        "stacked",
        vec![
            ChartDataset::from_values("a", [1.0, 2.0, 3.0]),
            ChartDataset::from_values("b", [1.0, 2.0]),
        ],
    )
    .with_categories(vec!["x".to_owned(), "y".to_owned()]);

    let errors = validate_stacked_bar_data(&data, 2);
    assert_eq!(
        errors.as_slice(),
        &[
            "Item at index 1 has 2 points, expected 3.".to_owned(),
            "Categories size 2 does not match expected 3.".to_owned(),
            "Colors size 2 does not match expected 3.".to_owned(),
        ]
    );
}

#[test]
fn stacked_bar_minimum_size_short_circuits() {
    let data = MultiSeriesDataset::new("stacked", Vec::new())
        .with_categories(vec!["unused".to_owned()]);
    let errors = validate_stacked_bar_data(&data, 7);
    assert_eq!(
        errors.as_slice(),
        &["Data points size should be greater than or equal to 1.".to_owned()]
    );
}
