use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::clickable::{Clickable, PressState};
use crate::components::fill::{Fill, Panel};
use crate::components::label::{Label, TextAlign};
use crate::components::uirect::UiRect;
use crate::resources::debugmode::DebugMode;
use crate::resources::pointer::PointerState;

/// Padding between a right-aligned label and its box edge.
const LABEL_PADDING: i32 = 4;

/// Top-left pixel where `label` should be drawn inside `rect`.
pub(crate) fn label_origin(label: &Label, rect: &UiRect, text_width: i32) -> (i32, i32) {
    let size = label.font_size as i32;
    let y = (rect.center().y as i32) - size / 2;
    let x = match label.align {
        TextAlign::Center => (rect.center().x as i32) - text_width / 2,
        TextAlign::Right => (rect.right() as i32) - text_width - LABEL_PADDING,
    };
    (x, y)
}

/// Draw panels, fills, labels, and the debug overlay.
///
/// Panels go first, then fills on top, then text, so a bar's label sits over
/// its fill.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    panels: Query<(&UiRect, &Panel)>,
    fills: Query<(&UiRect, &Fill)>,
    labels: Query<(&UiRect, &Label)>,
    clickables: Query<(&UiRect, &Clickable)>,
    pointer: Res<PointerState>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::RAYWHITE);

    for (rect, panel) in panels.iter() {
        d.draw_rectangle_v(rect.pos, rect.size, panel.color);
    }

    for (rect, fill) in fills.iter() {
        let size = Vector2 {
            x: rect.size.x * fill.scale.x,
            y: rect.size.y * fill.scale.y,
        };
        if size.x > 0.0 && size.y > 0.0 {
            d.draw_rectangle_v(rect.pos, size, fill.color);
        }
    }

    for (rect, label) in labels.iter() {
        if !label.visible {
            continue;
        }
        let font_size = label.font_size as i32;
        let width = measure_text(&label.content, font_size);
        let (x, y) = label_origin(label, rect, width);
        d.draw_text(&label.content, x, y, font_size, label.color);
    }

    if debug_mode.is_some() {
        let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", d.get_fps());
        d.draw_text(&text, 10, 10, 10, Color::BLACK);

        let mouse_text = format!(
            "Pointer: ({:.1}, {:.1}) down={} captured={:?}",
            pointer.position.x, pointer.position.y, pointer.active, pointer.captured
        );
        d.draw_text(&mouse_text, 10, 24, 10, Color::BLACK);

        for (rect, clickable) in clickables.iter() {
            let (min, max) = rect.bounds();
            d.draw_rectangle_lines(
                min.x as i32,
                min.y as i32,
                (max.x - min.x) as i32,
                (max.y - min.y) as i32,
                Color::RED,
            );
            let state = match clickable.press_state() {
                PressState::Idle => "idle".to_string(),
                PressState::Pressed {
                    since,
                    reset_at,
                    held,
                } => format!("pressed@{:.2} reset={:?} held={}", since, reset_at, held),
            };
            let text = format!(
                "{} [{}] {} listener(s): {}",
                clickable.name,
                clickable.allowed().describe(),
                clickable.listener_count(),
                state
            );
            d.draw_text(&text, min.x as i32, max.y as i32 + 2, 10, Color::DARKGRAY);
        }
    }
}
