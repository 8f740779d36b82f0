//! ECS components for UI entities.
//!
//! Submodules overview:
//! - [`clickable`] – interaction mask, press state, and listeners of a clickable object
//! - [`fill`] – scaled fill visual and solid background panel
//! - [`label`] – text drawn inside a layout box
//! - [`progressbar`] – animated displayed/target value of a progress bar
//! - [`uirect`] – screen-space layout box and hit area

pub mod clickable;
pub mod fill;
pub mod label;
pub mod progressbar;
pub mod uirect;
