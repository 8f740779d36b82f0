//! Animated progress bar component.
//!
//! A [`ProgressBar`] owns the displayed fraction (`current`) and the fraction
//! it is moving toward (`target`). Each frame
//! [`progress_bar_system`](crate::systems::progressbar::progress_bar_system)
//! advances `current` with exponential smoothing:
//!
//! ```text
//! current += (target - current) * (1 - e^(-rate * dt))
//! ```
//!
//! and pushes the result into the fill and label entities referenced by
//! [`ProgressBarParts`].
//!
//! Values are expected in `[0, 1]`. The component does not clamp them; out of
//! range input draws oddly but never panics.
//!
//! # Example
//!
//! ```ignore
//! let mut bar = ProgressBar::new(4.0).with_snap(ProgressSnap::SnapLower);
//! bar.force_value(0.8);
//! bar.set_target_value(0.2, None); // snaps: lower than current
//! bar.set_target_value(0.9, Some(10.0)); // animates quickly toward 0.9
//! ```

use bevy_ecs::prelude::{Component, Entity};

use crate::components::uirect::UiRect;

/// Lowest fill fraction used when placing a label that follows the fill edge.
/// Keeps the text inside the bar when the bar is nearly empty.
pub const FOLLOW_MIN_FRACTION: f32 = 0.15;

/// Default decay rate when none is configured.
pub const DEFAULT_RATE: f32 = 4.0;

/// Whether moving the target in a given direction jumps instead of animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressSnap {
    /// A target below the displayed value is applied instantly.
    SnapLower,
    /// A target above the displayed value is applied instantly.
    SnapHigher,
    /// Every change animates.
    #[default]
    NoSnap,
}

impl ProgressSnap {
    /// Next policy in declaration order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            ProgressSnap::SnapLower => ProgressSnap::SnapHigher,
            ProgressSnap::SnapHigher => ProgressSnap::NoSnap,
            ProgressSnap::NoSnap => ProgressSnap::SnapLower,
        }
    }
}

impl std::str::FromStr for ProgressSnap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "snap_lower" => Ok(ProgressSnap::SnapLower),
            "higher" | "snap_higher" => Ok(ProgressSnap::SnapHigher),
            "none" | "no_snap" | "dont_snap" => Ok(ProgressSnap::NoSnap),
            other => Err(format!("Unknown snap policy '{}'", other)),
        }
    }
}

/// Where the percentage label is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Centered on the bar, always visible.
    #[default]
    Centered,
    /// Right-aligned to the animated leading edge of the fill.
    FollowsFill,
    /// Not drawn.
    Hidden,
}

impl LabelMode {
    pub fn cycle(self) -> Self {
        match self {
            LabelMode::Centered => LabelMode::FollowsFill,
            LabelMode::FollowsFill => LabelMode::Hidden,
            LabelMode::Hidden => LabelMode::Centered,
        }
    }
}

impl std::str::FromStr for LabelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centered" | "bar_center" => Ok(LabelMode::Centered),
            "fill" | "follow" | "follows_fill" | "progress" => Ok(LabelMode::FollowsFill),
            "hidden" | "none" | "no_text" => Ok(LabelMode::Hidden),
            other => Err(format!("Unknown label mode '{}'", other)),
        }
    }
}

/// Displayed and target fractions of a progress bar plus its animation settings.
#[derive(Component, Clone, Debug)]
pub struct ProgressBar {
    /// Currently displayed fraction.
    pub current: f32,
    /// Fraction being animated toward.
    pub target: f32,
    /// Base decay rate (per second).
    pub rate: f32,
    /// Rate for the transition started by the last `set_target_value`.
    pub rate_override: Option<f32>,
    pub snap: ProgressSnap,
    pub label_mode: LabelMode,
    /// Half the width of the bar's container, used by [`LabelMode::FollowsFill`].
    /// `None` uses the bar's own width so the label tracks the fill edge exactly.
    pub follow_span: Option<f32>,
    /// Label placement must be recomputed on the next frame.
    pub layout_dirty: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

impl ProgressBar {
    pub fn new(rate: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            rate,
            rate_override: None,
            snap: ProgressSnap::NoSnap,
            label_mode: LabelMode::Centered,
            follow_span: None,
            layout_dirty: true,
        }
    }
    pub fn with_snap(mut self, snap: ProgressSnap) -> Self {
        self.snap = snap;
        self
    }
    pub fn with_label_mode(mut self, mode: LabelMode) -> Self {
        self.label_mode = mode;
        self.layout_dirty = true;
        self
    }
    pub fn with_follow_span(mut self, span: f32) -> Self {
        self.follow_span = Some(span);
        self
    }
    pub fn with_value(mut self, value: f32) -> Self {
        self.force_value(value);
        self
    }

    /// Set both displayed and target values instantly.
    pub fn force_value(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.rate_override = None;
        self.layout_dirty = true;
    }

    /// Start moving toward `value`.
    ///
    /// Snaps `current` to `value` when the snap policy favors the direction of
    /// the change. `rate_override` replaces the base rate until the next call
    /// to `set_target_value` or `force_value`.
    pub fn set_target_value(&mut self, value: f32, rate_override: Option<f32>) {
        let snaps = match self.snap {
            ProgressSnap::SnapLower => value < self.current,
            ProgressSnap::SnapHigher => value > self.current,
            ProgressSnap::NoSnap => false,
        };
        if snaps {
            self.current = value;
        }
        self.target = value;
        self.rate_override = rate_override;
        self.layout_dirty = true;
    }

    pub fn set_label_mode(&mut self, mode: LabelMode) {
        if self.label_mode != mode {
            self.label_mode = mode;
            self.layout_dirty = true;
        }
    }

    pub fn set_snap(&mut self, snap: ProgressSnap) {
        self.snap = snap;
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    /// Rate in effect for the current transition.
    pub fn effective_rate(&self) -> f32 {
        self.rate_override.unwrap_or(self.rate)
    }

    /// Advance `current` toward `target` by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let rate = self.effective_rate();
        if dt <= 0.0 || rate <= 0.0 {
            return;
        }
        let factor = 1.0 - (-rate * dt).exp();
        self.current += (self.target - self.current) * factor;
    }

    /// Displayed value as a whole percentage.
    pub fn percentage(&self) -> i32 {
        (self.current * 100.0).round() as i32
    }

    /// Label text for the displayed value.
    pub fn label_text(&self) -> String {
        format!("{}%", self.percentage())
    }

    /// Right edge (screen x) of a label following the fill of `bar`.
    pub fn follow_edge(&self, bar: &UiRect) -> f32 {
        let span = self.follow_span.unwrap_or(bar.width());
        let fraction = self.current.clamp(FOLLOW_MIN_FRACTION, 1.0);
        bar.right() - span * (1.0 - fraction)
    }
}

/// Entities driven by a progress bar.
#[derive(Component, Clone, Copy, Debug)]
pub struct ProgressBarParts {
    /// Entity holding the [`Fill`](super::fill::Fill) visual.
    pub fill: Entity,
    /// Entity holding the percentage [`Label`](super::label::Label).
    pub label: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn force_value_sets_both_without_animation() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            let mut bar = ProgressBar::new(3.0);
            bar.layout_dirty = false;
            bar.force_value(v);
            assert!(approx_eq(bar.current, v));
            assert!(approx_eq(bar.target, v));
            assert!(bar.layout_dirty);
        }
    }

    #[test]
    fn snap_lower_jumps_down_and_animates_up() {
        let mut bar = ProgressBar::new(3.0).with_snap(ProgressSnap::SnapLower);
        bar.force_value(0.6);

        bar.set_target_value(0.2, None);
        assert!(approx_eq(bar.current, 0.2));

        bar.set_target_value(0.9, None);
        assert!(approx_eq(bar.current, 0.2));
        assert!(approx_eq(bar.target, 0.9));
        bar.step(0.1);
        assert!(bar.current > 0.2 && bar.current < 0.9);
    }

    #[test]
    fn snap_higher_jumps_up_and_animates_down() {
        let mut bar = ProgressBar::new(3.0).with_snap(ProgressSnap::SnapHigher);
        bar.force_value(0.4);

        bar.set_target_value(0.7, None);
        assert!(approx_eq(bar.current, 0.7));

        bar.set_target_value(0.1, None);
        assert!(approx_eq(bar.current, 0.7));
    }

    #[test]
    fn no_snap_always_animates() {
        let mut bar = ProgressBar::new(3.0);
        bar.force_value(0.5);
        bar.set_target_value(0.0, None);
        assert!(approx_eq(bar.current, 0.5));
        bar.set_target_value(1.0, None);
        assert!(approx_eq(bar.current, 0.5));
    }

    #[test]
    fn step_matches_exponential_decay() {
        let mut bar = ProgressBar::new(2.0);
        bar.set_target_value(1.0, None);
        bar.step(0.5);
        let expected = 1.0 - (-1.0f32).exp();
        assert!(approx_eq(bar.current, expected));
    }

    #[test]
    fn step_converges_without_overshoot() {
        let mut bar = ProgressBar::new(5.0);
        bar.set_target_value(0.75, None);
        let mut gap = (bar.target - bar.current).abs();
        for _ in 0..200 {
            bar.step(1.0 / 60.0);
            let next_gap = (bar.target - bar.current).abs();
            assert!(next_gap <= gap);
            assert!(bar.current <= bar.target);
            gap = next_gap;
        }
        assert!(gap < 1e-3);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut bar = ProgressBar::new(5.0);
        bar.set_target_value(1.0, None);
        bar.step(0.0);
        assert!(approx_eq(bar.current, 0.0));
    }

    #[test]
    fn rate_override_lasts_until_next_target() {
        let mut bar = ProgressBar::new(1.0);
        bar.set_target_value(1.0, Some(10.0));
        assert!(approx_eq(bar.effective_rate(), 10.0));
        bar.step(0.1);
        assert!(approx_eq(bar.effective_rate(), 10.0));
        bar.set_target_value(0.5, None);
        assert!(approx_eq(bar.effective_rate(), 1.0));

        bar.set_target_value(0.2, Some(7.0));
        bar.force_value(0.3);
        assert_eq!(bar.rate_override, None);
    }

    #[test]
    fn percentage_rounds() {
        let bar = ProgressBar::new(1.0).with_value(0.456);
        assert_eq!(bar.percentage(), 46);
        assert_eq!(bar.label_text(), "46%");
        let bar = ProgressBar::new(1.0).with_value(0.004);
        assert_eq!(bar.label_text(), "0%");
    }

    #[test]
    fn follow_edge_tracks_fill_and_clamps_low() {
        let rect = UiRect::new(100.0, 0.0, 200.0, 20.0);
        let bar = ProgressBar::new(1.0).with_value(0.5);
        assert!(approx_eq(bar.follow_edge(&rect), 200.0));

        let bar = ProgressBar::new(1.0).with_value(0.05);
        assert!(approx_eq(bar.follow_edge(&rect), 130.0));

        let bar = ProgressBar::new(1.0).with_value(1.0);
        assert!(approx_eq(bar.follow_edge(&rect), 300.0));
    }

    #[test]
    fn follow_edge_uses_span() {
        let rect = UiRect::new(0.0, 0.0, 200.0, 20.0);
        let bar = ProgressBar::new(1.0).with_value(0.5).with_follow_span(420.0);
        assert!(approx_eq(bar.follow_edge(&rect), 200.0 - 210.0));
    }

    #[test]
    fn set_label_mode_marks_dirty_only_on_change() {
        let mut bar = ProgressBar::new(1.0);
        bar.layout_dirty = false;
        bar.set_label_mode(LabelMode::Centered);
        assert!(!bar.layout_dirty);
        bar.set_label_mode(LabelMode::Hidden);
        assert!(bar.layout_dirty);
    }

    #[test]
    fn parse_policies() {
        assert_eq!("lower".parse::<ProgressSnap>(), Ok(ProgressSnap::SnapLower));
        assert_eq!(" Higher ".parse::<ProgressSnap>(), Ok(ProgressSnap::SnapHigher));
        assert_eq!("none".parse::<ProgressSnap>(), Ok(ProgressSnap::NoSnap));
        assert!("sideways".parse::<ProgressSnap>().is_err());
        assert_eq!("fill".parse::<LabelMode>(), Ok(LabelMode::FollowsFill));
        assert_eq!("hidden".parse::<LabelMode>(), Ok(LabelMode::Hidden));
        assert!("left".parse::<LabelMode>().is_err());
    }

    #[test]
    fn cycles_wrap() {
        assert_eq!(ProgressSnap::NoSnap.cycle(), ProgressSnap::SnapLower);
        assert_eq!(LabelMode::Hidden.cycle(), LabelMode::Centered);
    }
}
