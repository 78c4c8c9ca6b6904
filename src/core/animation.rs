//! Per-bar grow-in animation.
//!
//! Each bar owns an independent tween that waits for a staggered delay and
//! then eases its progress from 0 to 1. Tweens advance only when the host
//! frame clock calls [`BarAnimator::tick`]; nothing here sleeps or spawns.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::is_placeholder_value;
use crate::error::{ChartError, ChartResult};

/// Timing curve applied to linear time fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Material standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    #[default]
    FastOutSlowIn,
    /// `cubic-bezier(0, 0, 0.2, 1)`.
    LinearOutSlowIn,
    /// `cubic-bezier(0.4, 0, 1, 1)`.
    FastOutLinearIn,
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// Maps a time fraction in `[0, 1]` to eased progress.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Self::Linear => fraction,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Self::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Self::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Self::CubicBezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|value| value.is_finite()) {
                return Err(ChartError::InvalidData(
                    "cubic bezier control points must be finite".to_owned(),
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ChartError::InvalidData(
                    "cubic bezier x control points must be in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

fn bezier_axis(p1: f64, p2: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn bezier_axis_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    // Newton first, bisection when the slope flattens out.
    let mut t = fraction;
    for _ in 0..8 {
        let error = bezier_axis(x1, x2, t) - fraction;
        if error.abs() < 1e-7 {
            return bezier_axis(y1, y2, t);
        }
        let slope = bezier_axis_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0, 1.0);
    t = fraction;
    for _ in 0..64 {
        let x = bezier_axis(x1, x2, t);
        if (x - fraction).abs() < 1e-7 {
            break;
        }
        if x < fraction {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) * 0.5;
    }
    bezier_axis(y1, y2, t)
}

/// Duration, per-index stagger and curve of the grow-in animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub duration_ms: f64,
    /// Extra start delay per bar index.
    pub stagger_ms: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration_ms: 500.0,
            stagger_ms: 50.0,
            easing: Easing::FastOutSlowIn,
        }
    }
}

impl AnimationSpec {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and > 0".to_owned(),
            ));
        }
        if !self.stagger_ms.is_finite() || self.stagger_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "animation stagger must be finite and >= 0".to_owned(),
            ));
        }
        self.easing.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn delay_for(self, index: usize) -> f64 {
        self.stagger_ms * index as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TweenState {
    Pending,
    Running,
    Done,
}

/// Progress channel of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarTween {
    pub state: TweenState,
    pub progress: f64,
    delay_ms: f64,
    elapsed_ms: f64,
}

impl BarTween {
    fn pending(delay_ms: f64) -> Self {
        Self {
            state: TweenState::Pending,
            progress: 0.0,
            delay_ms,
            elapsed_ms: 0.0,
        }
    }

    fn done() -> Self {
        Self {
            state: TweenState::Done,
            progress: 1.0,
            delay_ms: 0.0,
            elapsed_ms: 0.0,
        }
    }

    fn advance(&mut self, delta_ms: f64, spec: AnimationSpec) {
        if self.state == TweenState::Done {
            return;
        }

        self.elapsed_ms += delta_ms;
        let active_ms = self.elapsed_ms - self.delay_ms;
        if active_ms < 0.0 {
            return;
        }
        if active_ms >= spec.duration_ms {
            self.state = TweenState::Done;
            self.progress = 1.0;
            return;
        }

        self.state = TweenState::Running;
        self.progress = spec.easing.transform(active_ms / spec.duration_ms);
    }
}

/// Set of bar tweens seeded from one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BarAnimator {
    spec: AnimationSpec,
    tweens: Vec<BarTween>,
}

impl BarAnimator {
    /// Creates one tween per value. Placeholder values never animate and start done.
    pub fn seed(values: &[f64], zero_threshold: f64, spec: AnimationSpec) -> ChartResult<Self> {
        let spec = spec.validate()?;
        let tweens = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if is_placeholder_value(*value, zero_threshold) {
                    BarTween::done()
                } else {
                    BarTween::pending(spec.delay_for(index))
                }
            })
            .collect();
        Ok(Self { spec, tweens })
    }

    /// Animator with every tween already finished.
    #[must_use]
    pub fn completed(len: usize, spec: AnimationSpec) -> Self {
        Self {
            spec,
            tweens: vec![BarTween::done(); len],
        }
    }

    #[must_use]
    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Advances every tween by one frame-clock delta.
    ///
    /// Returns `true` when at least one tween was still active before the tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.is_finished() {
            return false;
        }
        let delta_ms = delta.as_secs_f64() * 1000.0;
        for tween in &mut self.tweens {
            tween.advance(delta_ms, self.spec);
        }
        true
    }

    /// Progress of bar `index`; bars without a tween count as finished.
    #[must_use]
    pub fn progress(&self, index: usize) -> f64 {
        self.tweens.get(index).map_or(1.0, |tween| tween.progress)
    }

    #[must_use]
    pub fn progresses(&self) -> Vec<f64> {
        self.tweens.iter().map(|tween| tween.progress).collect()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<TweenState> {
        self.tweens.get(index).map(|tween| tween.state)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tweens
            .iter()
            .all(|tween| tween.state == TweenState::Done)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_abs_diff_eq;

    use super::{AnimationSpec, BarAnimator, Easing, TweenState};

    #[test]
    fn standard_curves_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::FastOutSlowIn,
            Easing::LinearOutSlowIn,
            Easing::FastOutLinearIn,
        ] {
            assert_abs_diff_eq!(easing.transform(0.0), 0.0);
            assert_abs_diff_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn fast_out_slow_in_is_ahead_of_linear_midway() {
        let eased = Easing::FastOutSlowIn.transform(0.5);
        assert!(eased > 0.5 && eased < 1.0, "eased={eased}");
    }

    #[test]
    fn symmetric_bezier_matches_linear() {
        let easing = Easing::CubicBezier {
            x1: 0.25,
            y1: 0.25,
            x2: 0.75,
            y2: 0.75,
        };
        assert_abs_diff_eq!(easing.transform(0.3), 0.3, epsilon = 1e-5);
    }

    #[test]
    fn later_bars_start_after_earlier_ones() {
        let spec = AnimationSpec {
            duration_ms: 100.0,
            stagger_ms: 50.0,
            easing: Easing::Linear,
        };
        let mut animator = BarAnimator::seed(&[10.0, 20.0, 30.0], 0.5, spec).expect("seed");
        animator.tick(Duration::from_millis(60));

        assert_eq!(animator.state(0), Some(TweenState::Running));
        assert_eq!(animator.state(1), Some(TweenState::Running));
        assert_eq!(animator.state(2), Some(TweenState::Pending));
        assert_abs_diff_eq!(animator.progress(0), 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(animator.progress(1), 0.1, epsilon = 1e-9);
        assert_eq!(animator.progress(2), 0.0);
    }

    #[test]
    fn placeholders_start_finished() {
        let animator = BarAnimator::seed(&[0.0, 5.0], 0.5, AnimationSpec::default()).expect("seed");
        assert_eq!(animator.state(0), Some(TweenState::Done));
        assert_eq!(animator.progress(0), 1.0);
        assert_eq!(animator.state(1), Some(TweenState::Pending));
    }

    #[test]
    fn invalid_spec_is_rejected() {
        let spec = AnimationSpec {
            duration_ms: 0.0,
            ..AnimationSpec::default()
        };
        assert!(BarAnimator::seed(&[1.0], 0.5, spec).is_err());
    }
}
