//! ECS resources made available to systems.
//!
//! Overview
//! - `appconfig` – INI-backed window, progress bar, and clickable settings
//! - `debugmode` – presence toggles the debug overlay
//! - `pointer` – cursor position and the clickable owning the current press
//! - `worldtime` – simulation time and delta
pub mod appconfig;
pub mod debugmode;
pub mod pointer;
pub mod worldtime;
