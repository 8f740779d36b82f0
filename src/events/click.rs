//! Classified click events.
//!
//! Every interaction a [`Clickable`](crate::components::clickable::Clickable)
//! classifies is delivered to its own listeners first and then triggered as a
//! [`ClickEvent`], so observers anywhere in the world can react without
//! holding a listener handle.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<ClickEvent>| {
//!     if trigger.event().method == InteractionMethod::DOUBLE_TAP {
//!         // ...
//!     }
//! });
//! ```

use bevy_ecs::prelude::*;

use crate::components::clickable::InteractionMethod;

/// Event emitted when a clickable classifies an interaction.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The clickable entity.
    pub entity: Entity,
    /// The single interaction kind that was recognized.
    pub method: InteractionMethod,
    /// Number of component listeners that received it.
    pub delivered: usize,
}
