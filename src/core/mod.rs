pub mod animation;
pub mod bar_layout;
pub mod data;
pub mod primitives;
pub mod types;
pub mod validation;

pub use animation::{AnimationSpec, BarAnimator, BarTween, Easing, TweenState};
pub use bar_layout::{
    BarGeometry, BarKind, BarLayout, BarLayoutOptions, ValueRange, compute_bar_layout, index_at,
    is_placeholder_value, value_extent,
};
pub use data::{ChartDataset, DataPoint, MultiSeriesDataset};
pub use types::{Rect, Viewport};
pub use validation::{
    MIN_REQUIRED_BAR, MIN_REQUIRED_LINE, MIN_REQUIRED_PIE, MIN_REQUIRED_STACKED_BAR,
    ValidationErrors, validate_bar_data, validate_chart_data, validate_stacked_bar_data,
};
