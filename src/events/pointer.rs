//! Pointer events routed to clickable entities.
//!
//! The input system hit-tests the mouse against every
//! [`Clickable`](crate::components::clickable::Clickable) and triggers a
//! [`PointerEvent`] for the entity under the cursor. Drag and release events
//! go to the entity that received the press, even when the cursor has left
//! its bounds.
//!
//! Tests and other hosts can trigger these events directly:
//!
//! ```ignore
//! world.trigger(PointerEvent::down(button, 1.0));
//! ```

use bevy_ecs::prelude::*;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed over the entity.
    Down,
    /// Button still held after a press on the entity.
    Drag,
    /// Button released after a press on the entity.
    Up,
}

/// Event emitted for each pointer phase on a clickable entity.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The entity that owns the interaction.
    pub entity: Entity,
    pub kind: PointerKind,
    /// Timestamp in seconds, from [`WorldTime::elapsed`](crate::resources::worldtime::WorldTime).
    pub time: f32,
}

impl PointerEvent {
    pub fn down(entity: Entity, time: f32) -> Self {
        Self {
            entity,
            kind: PointerKind::Down,
            time,
        }
    }
    pub fn drag(entity: Entity, time: f32) -> Self {
        Self {
            entity,
            kind: PointerKind::Drag,
            time,
        }
    }
    pub fn up(entity: Entity, time: f32) -> Self {
        Self {
            entity,
            kind: PointerKind::Up,
            time,
        }
    }
}
