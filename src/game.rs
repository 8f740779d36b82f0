//! Demo scene: one progress bar and two clickable buttons.
//!
//! [`setup`] spawns the scene from the current [`AppConfig`];
//! [`demo_controls`] maps keys to progress bar operations and config changes;
//! [`click_status_observer`] shows the last recognized click.
//!
//! Keys:
//! - `0`..`9` animate the bar toward 0%..90%, `F` forces 100%
//! - `R` animates toward a random value with a random rate
//! - `S` cycles the snap policy, `L` cycles the label mode
//! - `F11` toggles the debug overlay

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::ffi::KeyboardKey;
use raylib::prelude::Color;

use crate::components::clickable::{Clickable, Delivery, InteractionMethod};
use crate::components::fill::{Fill, Panel};
use crate::components::label::Label;
use crate::components::progressbar::{ProgressBar, ProgressBarParts};
use crate::components::uirect::UiRect;
use crate::events::click::ClickEvent;
use crate::resources::appconfig::AppConfig;

const BAR_BACKGROUND: Color = Color::new(60, 60, 70, 255);
const BAR_FILL: Color = Color::new(80, 180, 120, 255);
const BUTTON_COLOR: Color = Color::new(70, 110, 190, 255);
const LABEL_FONT_SIZE: f32 = 20.0;

/// Marks the label that shows the last click.
#[derive(Component, Clone, Copy, Debug)]
pub struct StatusLabel;

/// Spawn a progress bar with its fill and label entities. Returns the bar.
pub fn spawn_progress_bar(world: &mut World, rect: UiRect, bar: ProgressBar) -> Entity {
    let fill = world
        .spawn((rect, Fill::new(BAR_FILL).with_scale(bar.current, 1.0)))
        .id();
    let label = world
        .spawn((
            rect,
            Label::new(bar.label_text(), LABEL_FONT_SIZE, Color::WHITE),
        ))
        .id();
    world
        .spawn((
            rect,
            Panel {
                color: BAR_BACKGROUND,
            },
            bar,
            ProgressBarParts { fill, label },
        ))
        .id()
}

/// Spawn a clickable button with a centered caption.
pub fn spawn_clickable(world: &mut World, rect: UiRect, clickable: Clickable) -> Entity {
    let caption = Label::new(clickable.name.clone(), LABEL_FONT_SIZE, Color::WHITE);
    world
        .spawn((rect, Panel { color: BUTTON_COLOR }, caption, clickable))
        .id()
}

/// Build the demo scene from the [`AppConfig`] resource.
pub fn setup(world: &mut World) {
    let config = world.get_resource::<AppConfig>().cloned().unwrap_or_default();
    let width = config.window_width as f32;

    let mut bar = ProgressBar::new(config.progress_rate)
        .with_snap(config.progress_snap)
        .with_label_mode(config.label_mode)
        .with_value(0.25);
    bar.follow_span = Some(config.effective_follow_span());
    let bar_rect = UiRect::new(width * 0.1, 60.0, width * 0.8, 36.0);
    spawn_progress_bar(world, bar_rect, bar);

    let mut tap_button = Clickable::new("tap me", config.clickable_methods);
    tap_button.register_persistent(|entity, method| {
        info!("Listener: {:?} received {}", entity, method.describe());
    });
    tap_button.register_to_clickable(|entity, method| {
        info!(
            "One-shot listener: first interaction on {:?} was {}",
            entity,
            method.describe()
        );
    });
    let button_w = width * 0.35;
    spawn_clickable(
        world,
        UiRect::new(width * 0.1, 160.0, button_w, 80.0),
        tap_button,
    );

    let mut hold_button = Clickable::new("hold me", config.clickable_methods);
    if let Err(e) = hold_button.register_for(
        InteractionMethod::TAP_AND_HOLD,
        Delivery::Persistent,
        |entity, _| info!("Hold listener: {:?} held", entity),
    ) {
        warn!("{}", e);
    }
    spawn_clickable(
        world,
        UiRect::new(width * 0.9 - button_w, 160.0, button_w, 80.0),
        hold_button,
    );

    world.spawn((
        UiRect::new(width * 0.1, 280.0, width * 0.8, 30.0),
        Label::new("Click a button", LABEL_FONT_SIZE, Color::DARKGRAY),
        StatusLabel,
    ));

    info!("Demo scene ready");
}

/// Observer that writes the last recognized click into the status label.
pub fn click_status_observer(
    trigger: On<ClickEvent>,
    clickables: Query<&Clickable>,
    mut labels: Query<&mut Label, With<StatusLabel>>,
) {
    let event = trigger.event();
    let name = clickables
        .get(event.entity)
        .map(|c| c.name.clone())
        .unwrap_or_else(|_| format!("{:?}", event.entity));
    for mut label in labels.iter_mut() {
        label.set_content(format!(
            "{}: {} ({} listener(s))",
            name,
            event.method.describe(),
            event.delivered
        ));
    }
}

/// Key bindings for the demo.
pub fn demo_controls(
    rl: NonSend<raylib::RaylibHandle>,
    mut bars: Query<&mut ProgressBar>,
    mut config: ResMut<AppConfig>,
) {
    const DIGITS: [KeyboardKey; 10] = [
        KeyboardKey::KEY_ZERO,
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_FOUR,
        KeyboardKey::KEY_FIVE,
        KeyboardKey::KEY_SIX,
        KeyboardKey::KEY_SEVEN,
        KeyboardKey::KEY_EIGHT,
        KeyboardKey::KEY_NINE,
    ];

    for (i, key) in DIGITS.iter().enumerate() {
        if rl.is_key_pressed(*key) {
            let value = i as f32 / 10.0;
            for mut bar in bars.iter_mut() {
                bar.set_target_value(value, None);
            }
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_F) {
        for mut bar in bars.iter_mut() {
            bar.force_value(1.0);
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_R) {
        let value = fastrand::f32();
        let rate = 1.0 + fastrand::f32() * 9.0;
        info!("Random target {:.2} at rate {:.1}", value, rate);
        for mut bar in bars.iter_mut() {
            bar.set_target_value(value, Some(rate));
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_S) {
        config.progress_snap = config.progress_snap.cycle();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_L) {
        config.label_mode = config.label_mode.cycle();
    }
}
