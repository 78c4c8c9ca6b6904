use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use bar_chart_rs::ChartError;
use bar_chart_rs::core::{AnimationSpec, ChartDataset, Easing, Viewport};
use bar_chart_rs::extensions::{ChartPlugin, PluginContext, PluginEvent};
use bar_chart_rs::render::NullRenderer;
use bar_chart_rs::{BarChartConfig, BarChartEngine};

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::DatasetChanged { .. } => "dataset",
        PluginEvent::SelectionChanged { .. } => "selection",
        PluginEvent::SelectionCleared => "cleared",
        PluginEvent::AnimationFinished => "animation_finished",
        PluginEvent::Rendered => "rendered",
    }
}

fn engine() -> BarChartEngine<NullRenderer> {
    let config = BarChartConfig::new(Viewport::new(300.0, 250.0)).with_animation(AnimationSpec {
        duration_ms: 100.0,
        stagger_ms: 0.0,
        easing: Easing::Linear,
    });
    BarChartEngine::new(
        NullRenderer::default(),
        config,
        ChartDataset::from_values("plugins", [1.0, 2.0, 3.0]),
    )
    .expect("engine init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.advance_animation(Duration::from_millis(50));
    engine.advance_animation(Duration::from_millis(50));
    engine.drag_move(10.0, 0.0).expect("move");
    engine.drag_move(20.0, 0.0).expect("move");
    engine.drag_move(250.0, 0.0).expect("move");
    engine.drag_end();
    engine.render().expect("render");
    engine
        .set_dataset(ChartDataset::from_values("single", [1.0]))
        .expect("set dataset");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "animation_finished",
            "selection",
            "selection",
            "cleared",
            "rendered",
            "dataset",
        ]
    );

    assert_eq!(events[2].0, PluginEvent::SelectionChanged { index: 2 });
    assert_eq!(events[2].1.selection, Some(2));
    assert_eq!(
        events[5].0,
        PluginEvent::DatasetChanged {
            points_len: 1,
            valid: false,
        }
    );
    assert!(!events[5].1.dataset_valid);
}

#[test]
fn duplicate_and_empty_plugin_ids_are_rejected() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("first");

    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("", events)))
        .expect_err("empty id");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(engine.plugin_count(), 1);
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register");

    engine.render().expect("render");
    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.has_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));
    engine.render().expect("render");

    assert_eq!(events.borrow().len(), 1);
}
