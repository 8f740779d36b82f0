//! Per-frame pointer state.
//!
//! Holds the cursor position and which clickable, if any, owns the current
//! press. Written by [`update_pointer_state`](crate::systems::input::update_pointer_state).
use bevy_ecs::prelude::*;
use raylib::prelude::{MouseButton, Vector2};

#[derive(Resource, Debug, Clone)]
pub struct PointerState {
    /// Cursor position in screen pixels.
    pub position: Vector2,
    /// Whether the bound button is down this frame.
    pub active: bool,
    /// Entity that received the pointer-down of the current press.
    pub captured: Option<Entity>,
    /// The mouse button treated as the pointer.
    pub button_binding: MouseButton,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            active: false,
            captured: None,
            button_binding: MouseButton::MOUSE_BUTTON_LEFT,
        }
    }
}
