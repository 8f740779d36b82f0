//! Engine systems.
//!
//! Submodules overview
//! - [`appconfig`] – push [`AppConfig`](crate::resources::appconfig::AppConfig) changes into live components
//! - [`clickable`] – classify pointer events and reset released presses
//! - [`input`] – read the mouse and trigger pointer events
//! - [`progressbar`] – animate progress bars, their fills and labels
//! - [`render`] – draw everything using Raylib
//! - [`time`] – update simulation time and delta

pub mod appconfig;
pub mod clickable;
pub mod input;
pub mod progressbar;
pub mod render;
pub mod time;
