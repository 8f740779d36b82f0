//! Progress bar integration tests: animation, fill, and label layout driven
//! through a `World` and `Schedule` without a window.

use bevy_ecs::prelude::*;

use tapgauge::components::fill::Fill;
use tapgauge::components::label::{Label, TextAlign};
use tapgauge::components::progressbar::{
    LabelMode, ProgressBar, ProgressBarParts, ProgressSnap,
};
use tapgauge::components::uirect::UiRect;
use tapgauge::game::spawn_progress_bar;
use tapgauge::resources::appconfig::AppConfig;
use tapgauge::resources::worldtime::WorldTime;
use tapgauge::systems::appconfig::apply_config_changes;
use tapgauge::systems::progressbar::progress_bar_system;
use tapgauge::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(progress_bar_system);
    schedule.run(world);
}

fn bar_rect() -> UiRect {
    UiRect::new(100.0, 50.0, 200.0, 20.0)
}

fn parts(world: &World, bar: Entity) -> ProgressBarParts {
    *world.get::<ProgressBarParts>(bar).unwrap()
}

#[test]
fn force_value_shows_immediately_with_no_animation() {
    let mut world = make_world();
    let bar = spawn_progress_bar(&mut world, bar_rect(), ProgressBar::new(4.0));

    world.get_mut::<ProgressBar>(bar).unwrap().force_value(0.6);
    tick(&mut world, 0.0);

    let state = world.get::<ProgressBar>(bar).unwrap();
    assert!(approx_eq(state.current, 0.6));
    assert!(approx_eq(state.target, 0.6));

    let p = parts(&world, bar);
    assert!(approx_eq(world.get::<Fill>(p.fill).unwrap().scale.x, 0.6));
    assert_eq!(world.get::<Label>(p.label).unwrap().content, "60%");
}

#[test]
fn fill_and_label_follow_animation_each_frame() {
    let mut world = make_world();
    let bar = spawn_progress_bar(&mut world, bar_rect(), ProgressBar::new(3.0));
    world
        .get_mut::<ProgressBar>(bar)
        .unwrap()
        .set_target_value(1.0, None);

    let p = parts(&world, bar);
    let mut last = 0.0;
    for _ in 0..30 {
        tick(&mut world, 1.0 / 30.0);
        let current = world.get::<ProgressBar>(bar).unwrap().current;
        assert!(current > last);
        assert!(current <= 1.0);
        let fill = world.get::<Fill>(p.fill).unwrap();
        assert!(approx_eq(fill.scale.x, current));
        let label = world.get::<Label>(p.label).unwrap();
        assert_eq!(label.content, format!("{}%", (current * 100.0).round() as i32));
        last = current;
    }
    // One second at rate 3: 1 - e^-3
    assert!(approx_eq(last, 1.0 - (-3.0f32).exp()));
}

#[test]
fn snap_lower_jumps_then_animates_upward() {
    let mut world = make_world();
    let bar = spawn_progress_bar(
        &mut world,
        bar_rect(),
        ProgressBar::new(5.0)
            .with_snap(ProgressSnap::SnapLower)
            .with_value(0.8),
    );

    world
        .get_mut::<ProgressBar>(bar)
        .unwrap()
        .set_target_value(0.3, None);
    assert!(approx_eq(world.get::<ProgressBar>(bar).unwrap().current, 0.3));

    world
        .get_mut::<ProgressBar>(bar)
        .unwrap()
        .set_target_value(0.9, None);
    assert!(approx_eq(world.get::<ProgressBar>(bar).unwrap().current, 0.3));

    tick(&mut world, 0.1);
    let current = world.get::<ProgressBar>(bar).unwrap().current;
    assert!(current > 0.3 && current < 0.9);
}

#[test]
fn centered_label_covers_bar() {
    let mut world = make_world();
    let bar = spawn_progress_bar(
        &mut world,
        bar_rect(),
        ProgressBar::new(1.0).with_label_mode(LabelMode::Centered),
    );
    tick(&mut world, 0.016);

    let p = parts(&world, bar);
    let label = world.get::<Label>(p.label).unwrap();
    assert!(label.visible);
    assert_eq!(label.align, TextAlign::Center);
    assert_eq!(*world.get::<UiRect>(p.label).unwrap(), bar_rect());
}

#[test]
fn follow_label_tracks_fill_edge_and_clamps() {
    let mut world = make_world();
    let bar = spawn_progress_bar(
        &mut world,
        bar_rect(),
        ProgressBar::new(1.0)
            .with_label_mode(LabelMode::FollowsFill)
            .with_value(0.5),
    );
    tick(&mut world, 0.0);

    let p = parts(&world, bar);
    let label = world.get::<Label>(p.label).unwrap();
    assert!(label.visible);
    assert_eq!(label.align, TextAlign::Right);
    let rect = *world.get::<UiRect>(p.label).unwrap();
    assert!(approx_eq(rect.right(), 200.0));

    world.get_mut::<ProgressBar>(bar).unwrap().force_value(0.02);
    tick(&mut world, 0.0);
    let rect = *world.get::<UiRect>(p.label).unwrap();
    // Clamped at 15%: 100 + 200 * 0.15
    assert!(approx_eq(rect.right(), 130.0));
    assert!(approx_eq(rect.pos.x, 100.0));
}

#[test]
fn hidden_label_still_updates_text() {
    let mut world = make_world();
    let bar = spawn_progress_bar(
        &mut world,
        bar_rect(),
        ProgressBar::new(1.0).with_label_mode(LabelMode::Hidden),
    );
    world.get_mut::<ProgressBar>(bar).unwrap().force_value(0.42);
    tick(&mut world, 0.0);

    let p = parts(&world, bar);
    let label = world.get::<Label>(p.label).unwrap();
    assert!(!label.visible);
    assert_eq!(label.content, "42%");
}

#[test]
fn switching_label_mode_recomputes_layout() {
    let mut world = make_world();
    let bar = spawn_progress_bar(
        &mut world,
        bar_rect(),
        ProgressBar::new(1.0).with_label_mode(LabelMode::Hidden),
    );
    tick(&mut world, 0.0);
    let p = parts(&world, bar);
    assert!(!world.get::<Label>(p.label).unwrap().visible);

    world
        .get_mut::<ProgressBar>(bar)
        .unwrap()
        .set_label_mode(LabelMode::Centered);
    tick(&mut world, 0.0);
    assert!(world.get::<Label>(p.label).unwrap().visible);
    assert!(!world.get::<ProgressBar>(bar).unwrap().layout_dirty);
}

#[test]
fn config_changes_reach_live_bars() {
    let mut world = make_world();
    let bar = spawn_progress_bar(&mut world, bar_rect(), ProgressBar::new(1.0));

    let mut config = AppConfig::new();
    config.progress_rate = 8.0;
    config.progress_snap = ProgressSnap::SnapHigher;
    config.label_mode = LabelMode::FollowsFill;
    config.follow_span = Some(210.0);
    world.insert_resource(config);

    let mut schedule = Schedule::default();
    schedule.add_systems((apply_config_changes, progress_bar_system).chain());
    schedule.run(&mut world);

    let state = world.get::<ProgressBar>(bar).unwrap();
    assert!(approx_eq(state.rate, 8.0));
    assert_eq!(state.snap, ProgressSnap::SnapHigher);
    assert_eq!(state.label_mode, LabelMode::FollowsFill);
    assert_eq!(state.follow_span, Some(210.0));

    let p = parts(&world, bar);
    assert_eq!(world.get::<Label>(p.label).unwrap().align, TextAlign::Right);
}

#[test]
fn default_follow_span_is_half_the_window() {
    let mut world = make_world();
    let bar = spawn_progress_bar(
        &mut world,
        bar_rect(),
        ProgressBar::new(1.0).with_value(0.8),
    );

    let mut config = AppConfig::new();
    config.label_mode = LabelMode::FollowsFill;
    world.insert_resource(config);

    let mut schedule = Schedule::default();
    schedule.add_systems((apply_config_changes, progress_bar_system).chain());
    schedule.run(&mut world);

    assert_eq!(world.get::<ProgressBar>(bar).unwrap().follow_span, Some(400.0));
    let p = parts(&world, bar);
    let rect = *world.get::<UiRect>(p.label).unwrap();
    // 300 - 400 * (1 - 0.8)
    assert!(approx_eq(rect.right(), 220.0));
}
