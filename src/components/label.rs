use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Horizontal placement of a label's text inside its [`UiRect`](super::uirect::UiRect).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Centered both horizontally and vertically.
    Center,
    /// Flush against the right edge, vertically centered.
    Right,
}

#[derive(Component, Clone, Debug)]
/// Text component for screen-space strings that change every frame.
pub struct Label {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
    /// Placement of the text inside the layout box.
    pub align: TextAlign,
    /// Hidden labels keep updating but are not drawn.
    pub visible: bool,
}

impl Label {
    /// Creates a new visible, centered label.
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            align: TextAlign::Center,
            visible: true,
        }
    }
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
