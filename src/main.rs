//! tapgauge demo entry point.
//!
//! An animated progress bar and clickable buttons built with:
//! - **raylib** for windowing, input, and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or defaults), apply CLI overrides
//! 2. Initialize the raylib window and the ECS world
//! 3. Spawn the demo scene and register observers
//! 4. Each frame: advance time, route mouse input to clickables, reset
//!    released presses, animate progress bars, draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --label fill --snap lower
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::clickable::InteractionMethod;
use crate::components::progressbar::{LabelMode, ProgressSnap};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::appconfig::AppConfig;
use crate::resources::pointer::PointerState;
use crate::resources::worldtime::WorldTime;
use crate::systems::appconfig::apply_config_changes;
use crate::systems::clickable::{clickable_pointer_observer, clickable_reset_system};
use crate::systems::input::update_pointer_state;
use crate::systems::progressbar::progress_bar_system;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Animated progress bar and tap / double-tap / hold classification demo.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Snap policy: lower, higher, or none.
    #[arg(long)]
    snap: Option<ProgressSnap>,

    /// Label placement: center, fill, or hidden.
    #[arg(long)]
    label: Option<LabelMode>,

    /// Base animation rate of the progress bar.
    #[arg(long)]
    rate: Option<f32>,

    /// Allowed interactions, comma separated: tap, double_tap, hold.
    #[arg(long, value_parser = InteractionMethod::parse_list)]
    methods: Option<InteractionMethod>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(snap) = cli.snap {
        config.progress_snap = snap;
    }
    if let Some(label) = cli.label {
        config.label_mode = label;
    }
    if let Some(rate) = cli.rate.filter(|r| *r > 0.0) {
        config.progress_rate = rate;
    }
    if let Some(methods) = cli.methods {
        config.clickable_methods = methods;
    }

    // Early-exit: write config and quit (no window needed)
    if cli.save_config {
        match config.save_to_file() {
            Ok(()) => println!("Config written to {}", config.config_path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("tapgauge");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(PointerState::default());
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::setup(&mut world);

    world.spawn(Observer::new(clickable_pointer_observer));
    world.spawn(Observer::new(game::click_status_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(apply_config_changes); // Must run early so bars start with config values
    update.add_systems(game::demo_controls.before(apply_config_changes));
    update.add_systems(update_pointer_state);
    update.add_systems(clickable_reset_system.before(update_pointer_state));
    update.add_systems(progress_bar_system.after(apply_config_changes));
    update.add_systems(
        render_system
            .after(progress_bar_system)
            .after(update_pointer_state),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    log::info!("Bye!");
}
