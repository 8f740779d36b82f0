//! Progress bar animation system.
//!
//! [`progress_bar_system`] advances every [`ProgressBar`] by the frame delta
//! and pushes the result into its parts:
//! - the [`Fill`] horizontal scale is set to the displayed value;
//! - the [`Label`] text is rewritten every frame, even when the value did not
//!   change, so restyled labels always show current text;
//! - when the bar's layout is dirty the label's visibility, alignment, and box
//!   are recomputed from the [`LabelMode`];
//! - in [`LabelMode::FollowsFill`] the label box is resized every frame so its
//!   right edge sits on the leading edge of the fill.

use bevy_ecs::prelude::*;

use crate::components::fill::Fill;
use crate::components::label::{Label, TextAlign};
use crate::components::progressbar::{LabelMode, ProgressBar, ProgressBarParts};
use crate::components::uirect::UiRect;
use crate::resources::worldtime::WorldTime;

/// Place `label` inside `bar_rect` according to `mode`.
pub(crate) fn apply_label_layout(
    mode: LabelMode,
    bar_rect: &UiRect,
    label: &mut Label,
    label_rect: &mut UiRect,
) {
    match mode {
        LabelMode::Centered => {
            label.visible = true;
            label.align = TextAlign::Center;
            *label_rect = *bar_rect;
        }
        LabelMode::FollowsFill => {
            label.visible = true;
            label.align = TextAlign::Right;
            *label_rect = *bar_rect;
        }
        LabelMode::Hidden => {
            label.visible = false;
        }
    }
}

/// Animate progress bars and update their fill and label entities.
pub fn progress_bar_system(
    world_time: Res<WorldTime>,
    mut bars: Query<(&mut ProgressBar, &UiRect, &ProgressBarParts)>,
    mut fills: Query<&mut Fill>,
    mut labels: Query<(&mut Label, &mut UiRect), Without<ProgressBar>>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut bar, rect, parts) in bars.iter_mut() {
        bar.step(dt);

        if let Ok(mut fill) = fills.get_mut(parts.fill) {
            fill.scale.x = bar.current;
        }

        if let Ok((mut label, mut label_rect)) = labels.get_mut(parts.label) {
            if bar.layout_dirty {
                apply_label_layout(bar.label_mode, rect, &mut label, &mut label_rect);
            }
            label.set_content(bar.label_text());
            if bar.label_mode == LabelMode::FollowsFill {
                label_rect.pos = rect.pos;
                label_rect.size.x = bar.follow_edge(rect) - rect.pos.x;
            }
        }

        bar.layout_dirty = false;
    }
}
