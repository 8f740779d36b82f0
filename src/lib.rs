//! tapgauge library.
//!
//! Exposes the ECS components, resources, systems, and events of the
//! animated progress bar and the clickable dispatcher, for use by the demo
//! binary and by integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
