use bar_chart_rs::api::ContainerStyle;
use bar_chart_rs::core::{AnimationSpec, ChartDataset, Easing, Viewport};
use bar_chart_rs::render::{Color, NullRenderer};
use bar_chart_rs::{BarChartConfig, BarChartEngine, BarChartStyle, ChartError};

#[test]
fn partial_config_json_fills_defaults() {
    let config = BarChartConfig::from_json_str(
        r#"{
            "viewport": { "width": 640.0, "height": 360.0 },
            "style": { "spacing_px": 4.0 }
        }"#,
    )
    .expect("parse config");

    assert_eq!(config.viewport, Viewport::new(640.0, 360.0));
    assert_eq!(config.style.spacing_px, 4.0);
    assert_eq!(config.style.selected_scale_percent, 110.0);
    assert_eq!(config.animation, AnimationSpec::default());
    assert!(config.animations_enabled);
}

#[test]
fn config_json_round_trip_preserves_values() {
    let config = BarChartConfig::new(Viewport::new(800.0, 400.0))
        .with_style(BarChartStyle::default().with_bar_color(Color::from_rgb8(0x01, 0x87, 0x86)))
        .with_animation(AnimationSpec {
            duration_ms: 300.0,
            stagger_ms: 0.0,
            easing: Easing::CubicBezier {
                x1: 0.25,
                y1: 0.1,
                x2: 0.25,
                y2: 1.0,
            },
        })
        .without_animation();

    let json = config.to_json_pretty().expect("serialize");
    let restored = BarChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let err = BarChartConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn container_too_small_for_bands_is_rejected() {
    let config = BarChartConfig::new(Viewport::new(300.0, 40.0));
    let err = BarChartEngine::new(
        NullRenderer::default(),
        config,
        ChartDataset::from_values("tiny", [1.0, 2.0]),
    )
    .err()
    .expect("canvas would be empty");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn non_finite_values_are_rejected() {
    let config = BarChartConfig::new(Viewport::new(300.0, 250.0));
    let err = BarChartEngine::new(
        NullRenderer::default(),
        config,
        ChartDataset::from_values("nan", [1.0, f64::NAN]),
    )
    .err()
    .expect("nan value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn invalid_style_values_are_reported_as_style_errors() {
    let config = BarChartConfig::new(Viewport::new(300.0, 250.0));
    let mut engine = BarChartEngine::new(
        NullRenderer::default(),
        config,
        ChartDataset::from_values("style", [1.0, 2.0]),
    )
    .expect("engine init");

    let err = engine
        .set_style(BarChartStyle::default().with_spacing(-1.0))
        .expect_err("negative spacing");
    assert!(matches!(err, ChartError::InvalidStyle(_)));

    let err = engine
        .set_style(BarChartStyle::default().with_bar_color(Color::rgb(2.0, 0.0, 0.0)))
        .expect_err("channel out of range");
    assert!(matches!(err, ChartError::InvalidStyle(_)));

    let err = engine
        .set_style(BarChartStyle::default().with_scale_percents(0.0, 110.0))
        .expect_err("zero scale");
    assert!(matches!(err, ChartError::InvalidStyle(_)));

    assert_eq!(engine.style(), BarChartStyle::default());
}

#[test]
fn resizing_updates_canvas() {
    let config = BarChartConfig::new(Viewport::new(300.0, 250.0));
    let mut engine = BarChartEngine::new(
        NullRenderer::default(),
        config,
        ChartDataset::from_values("resize", [1.0, 2.0]),
    )
    .expect("engine init");

    engine
        .set_viewport(Viewport::new(600.0, 450.0))
        .expect("resize");
    let canvas = engine.canvas_rect();
    assert_eq!(canvas.width, 600.0);
    assert_eq!(canvas.height, 400.0);

    let err = engine
        .set_viewport(Viewport::new(-1.0, 450.0))
        .expect_err("negative width");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(engine.viewport(), Viewport::new(600.0, 450.0));
}

#[test]
fn custom_container_bands_shape_the_canvas() {
    let style = BarChartStyle::default().with_container(ContainerStyle {
        padding_px: 8.0,
        title_band_height_px: 0.0,
        label_band_height_px: 0.0,
    });
    let canvas = style.container.canvas_rect(Viewport::new(100.0, 80.0));
    assert_eq!(canvas.x, 8.0);
    assert_eq!(canvas.y, 8.0);
    assert_eq!(canvas.width, 84.0);
    assert_eq!(canvas.height, 64.0);
}
