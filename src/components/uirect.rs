//! Screen-space rectangle component.
//!
//! The [`UiRect`] component stores the layout box of a UI element in screen
//! (pixel) coordinates: the progress bar body, its fill, its label, and the
//! hit area of a [`Clickable`](super::clickable::Clickable).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned layout box in screen pixels.
///
/// `pos` is the top-left corner and `size` the extent. Negative sizes are
/// normalized when computing bounds.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct UiRect {
    /// Top-left corner in screen pixels.
    pub pos: Vector2,
    /// Width and height in screen pixels.
    pub size: Vector2,
}

impl Default for UiRect {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
            size: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl UiRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
            size: Vector2 {
                x: width,
                y: height,
            },
        }
    }

    /// Returns (min, max) corners of the box.
    pub fn bounds(&self) -> (Vector2, Vector2) {
        let p0 = self.pos;
        let p1 = Vector2 {
            x: self.pos.x + self.size.x,
            y: self.pos.y + self.size.y,
        };
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    pub fn width(&self) -> f32 {
        self.size.x.abs()
    }

    pub fn height(&self) -> f32 {
        self.size.y.abs()
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.bounds().1.x
    }

    pub fn center(&self) -> Vector2 {
        let (min, max) = self.bounds();
        Vector2 {
            x: (min.x + max.x) * 0.5,
            y: (min.y + max.y) * 0.5,
        }
    }

    /// Point containment, edges inclusive.
    pub fn contains_point(&self, point: Vector2) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
