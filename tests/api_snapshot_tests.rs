use std::time::Duration;

use bar_chart_rs::api::{BAR_CHART_SNAPSHOT_JSON_SCHEMA_V1, BarChartSnapshot};
use bar_chart_rs::core::{ChartDataset, Viewport};
use bar_chart_rs::render::NullRenderer;
use bar_chart_rs::{BarChartConfig, BarChartEngine, ChartError};

fn engine() -> BarChartEngine<NullRenderer> {
    let config = BarChartConfig::new(Viewport::new(300.0, 250.0));
    BarChartEngine::new(
        NullRenderer::default(),
        config,
        ChartDataset::from_values("Emotional", [100.0, -60.0, 0.0, -90.0, 40.0, 80.0]),
    )
    .expect("engine init")
}

#[test]
fn snapshot_captures_selection_title_and_progress() {
    let mut engine = engine();
    engine.advance_animation(Duration::from_millis(100));
    engine.drag_move(280.0, 0.0).expect("move");

    let snapshot = engine.snapshot().expect("snapshot");
    assert_eq!(snapshot.dataset_title, "Emotional");
    assert_eq!(snapshot.title, "80.0");
    assert_eq!(snapshot.selection, Some(5));
    assert!(snapshot.validation_errors.is_empty());
    assert_eq!(snapshot.animation_progress.len(), 6);
    assert_eq!(snapshot.animation_progress[2], 1.0);
    assert_eq!(snapshot.animation_progress[5], 0.0);

    let layout = snapshot.layout.expect("layout");
    assert!(layout.bars[5].emphasized);
}

#[test]
fn snapshot_of_invalid_dataset_carries_errors_without_layout() {
    let mut engine = engine();
    engine
        .set_dataset(ChartDataset::from_values("single", [50.0]))
        .expect("set dataset");

    let snapshot = engine.snapshot().expect("snapshot");
    assert!(snapshot.layout.is_none());
    assert_eq!(
        snapshot.validation_errors,
        vec!["Data points size should be greater than or equal to 2.".to_owned()]
    );
    assert!(snapshot.animation_progress.is_empty());
}

#[test]
fn versioned_contract_round_trips_and_bare_snapshots_are_accepted() {
    let engine = engine();
    let snapshot = engine.snapshot().expect("snapshot");

    let contract = snapshot.to_json_contract_v1_pretty().expect("contract json");
    assert!(contract.contains(&format!(
        "\"schema_version\": {BAR_CHART_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    let parsed = BarChartSnapshot::from_json_compat_str(&contract).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = engine.snapshot_json_pretty().expect("bare json");
    let parsed = BarChartSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let engine = engine();
    let contract = engine
        .snapshot()
        .expect("snapshot")
        .to_json_contract_v1_pretty()
        .expect("contract json")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");

    let err = BarChartSnapshot::from_json_compat_str(&contract).expect_err("v99");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
