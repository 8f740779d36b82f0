//! Configuration change detection system.
//!
//! Monitors [`AppConfig`] for changes and pushes the new settings into live
//! progress bars, clickables, and the window.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::clickable::{Clickable, InteractionMethod};
use crate::components::progressbar::ProgressBar;
use crate::resources::appconfig::AppConfig;

/// System that applies configuration changes.
///
/// When [`AppConfig`] is added or modified:
/// 1. every [`ProgressBar`] takes the configured rate, snap policy, label mode,
///    and follow span;
/// 2. every [`Clickable`] has its interaction mask replaced, but only when the
///    configured mask differs from the one applied last, so unrelated edits
///    keep masks set at runtime;
/// 3. the target FPS is applied when a Raylib window exists.
pub fn apply_config_changes(
    maybe_config: Option<Res<AppConfig>>,
    mut bars: Query<&mut ProgressBar>,
    mut clickables: Query<&mut Clickable>,
    rl: Option<NonSendMut<raylib::RaylibHandle>>,
    mut applied_methods: Local<Option<InteractionMethod>>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    for mut bar in bars.iter_mut() {
        bar.set_rate(config.progress_rate);
        bar.set_snap(config.progress_snap);
        bar.set_label_mode(config.label_mode);
        let span = Some(config.effective_follow_span());
        if bar.follow_span != span {
            bar.follow_span = span;
            bar.layout_dirty = true;
        }
    }

    if *applied_methods != Some(config.clickable_methods) {
        for mut clickable in clickables.iter_mut() {
            clickable.set_interaction_method(config.clickable_methods);
        }
        *applied_methods = Some(config.clickable_methods);
    }

    if let Some(mut rl) = rl {
        rl.set_target_fps(config.target_fps);
    }

    info!(
        "Config applied: rate={}, snap={:?}, label={:?}, methods={}",
        config.progress_rate,
        config.progress_snap,
        config.label_mode,
        config.clickable_methods.describe()
    );
}
