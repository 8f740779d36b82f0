//! Scaled fill visual.
//!
//! A [`Fill`] is drawn inside its entity's [`UiRect`](super::uirect::UiRect)
//! with the rect's size multiplied by `scale`, anchored at the rect's
//! top-left corner. The progress bar drives `scale.x`.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

#[derive(Component, Clone, Copy, Debug)]
pub struct Fill {
    pub color: Color,
    pub scale: Vector2,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            scale: Vector2 { x: 1.0, y: 1.0 },
        }
    }
    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = Vector2 { x: sx, y: sy };
        self
    }
}

/// Solid background drawn behind an element, such as the empty part of a bar
/// or the body of a clickable.
#[derive(Component, Clone, Copy, Debug)]
pub struct Panel {
    pub color: Color,
}
