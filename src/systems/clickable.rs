//! Clickable interaction systems.
//!
//! - [`clickable_pointer_observer`] classifies each
//!   [`PointerEvent`](crate::events::pointer::PointerEvent) on a
//!   [`Clickable`], delivers the result to the component's listeners, and
//!   triggers a [`ClickEvent`].
//! - [`clickable_reset_system`] returns released presses to idle once their
//!   reset deadline passes.
//!
//! # System Flow
//!
//! 1. `clickable_reset_system` returns expired presses to idle
//! 2. `update_pointer_state` triggers `PointerEvent`s from mouse input
//! 3. `clickable_pointer_observer` runs immediately for each event

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::clickable::Clickable;
use crate::events::click::ClickEvent;
use crate::events::pointer::{PointerEvent, PointerKind};
use crate::resources::worldtime::WorldTime;

/// Observer that turns pointer events into classified clicks.
///
/// Events for entities without a [`Clickable`] are ignored.
pub fn clickable_pointer_observer(
    trigger: On<PointerEvent>,
    mut clickables: Query<&mut Clickable>,
    mut commands: Commands,
) {
    let event = *trigger.event();
    let Ok(mut clickable) = clickables.get_mut(event.entity) else {
        trace!("Pointer event for non-clickable entity {:?}", event.entity);
        return;
    };

    let classified = match event.kind {
        PointerKind::Down => clickable.on_pointer_down(event.time),
        PointerKind::Drag => clickable.on_pointer_drag(event.time),
        PointerKind::Up => {
            clickable.on_pointer_up(event.time);
            None
        }
    };

    if let Some(method) = classified {
        let delivered = clickable.notify(event.entity, method);
        debug!(
            "Clickable '{}' recognized {} at {:.3}s, {} listener(s) notified",
            clickable.name,
            method.describe(),
            event.time,
            delivered
        );
        commands.trigger(ClickEvent {
            entity: event.entity,
            method,
            delivered,
        });
    }
}

/// Apply due press resets.
pub fn clickable_reset_system(world_time: Res<WorldTime>, mut clickables: Query<&mut Clickable>) {
    let now = world_time.elapsed;
    for mut clickable in clickables.iter_mut() {
        if clickable.bypass_change_detection().tick(now) {
            clickable.set_changed();
            trace!("Clickable '{}' press reset at {:.3}s", clickable.name, now);
        }
    }
}
