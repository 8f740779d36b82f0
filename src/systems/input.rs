//! Input systems.
//!
//! - [`update_pointer_state`] reads the mouse from Raylib each frame, writes
//!   [`PointerState`], and triggers [`PointerEvent`]s on clickables.
//! - Debug toggling is emitted as a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;
use raylib::prelude::Vector2;

use crate::components::clickable::Clickable;
use crate::components::uirect::UiRect;
use crate::events::pointer::PointerEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::pointer::PointerState;
use crate::resources::worldtime::WorldTime;

/// Pick the clickable under `point`.
///
/// When several overlap, the last one in iteration order wins, matching the
/// draw order of the renderer.
pub fn pick_clickable<'a>(
    point: Vector2,
    candidates: impl IntoIterator<Item = (Entity, &'a UiRect)>,
) -> Option<Entity> {
    candidates
        .into_iter()
        .filter(|(_, rect)| rect.contains_point(point))
        .map(|(entity, _)| entity)
        .last()
}

/// Poll Raylib for pointer input and route it to clickables.
///
/// A press is captured by the clickable under the cursor; drag and release
/// events go to that clickable until the button is released.
pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    rl: NonSend<raylib::RaylibHandle>,
    world_time: Res<WorldTime>,
    clickables: Query<(Entity, &UiRect), With<Clickable>>,
    mut commands: Commands,
) {
    let now = world_time.elapsed;
    let button = pointer.button_binding;
    pointer.position = rl.get_mouse_position();
    pointer.active = rl.is_mouse_button_down(button);

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        commands.trigger(SwitchDebugEvent {});
    }

    if rl.is_mouse_button_pressed(button) {
        let picked = pick_clickable(pointer.position, clickables.iter());
        pointer.captured = picked;
        if let Some(entity) = picked {
            commands.trigger(PointerEvent::down(entity, now));
        }
    } else if pointer.active {
        if let Some(entity) = pointer.captured {
            commands.trigger(PointerEvent::drag(entity, now));
        }
    }

    if rl.is_mouse_button_released(button) {
        if let Some(entity) = pointer.captured.take() {
            commands.trigger(PointerEvent::up(entity, now));
        }
    }
}
