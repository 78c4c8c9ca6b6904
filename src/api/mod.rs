//! Host-facing engine: the bar chart view-model and its configuration.

mod animation_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod snapshot_controller;
mod validation;

pub use engine::BarChartEngine;
pub use engine_config::BarChartConfig;
pub use engine_core::SelectionListener;
pub use engine_snapshot::BarChartSnapshot;
pub use json_contract::{BAR_CHART_SNAPSHOT_JSON_SCHEMA_V1, BarChartSnapshotJsonContractV1};
pub use render_style::{BarChartStyle, ContainerStyle, ErrorPanelStyle};

pub(crate) use crate::extensions::PluginEvent;
