//! Event types and observers.
//!
//! Events decouple input handling from the components that react to it.
//!
//! Submodules:
//! - [`click`] – classified interactions emitted by clickables
//! - [`pointer`] – pointer down/drag/up routed to a clickable entity
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod click;
pub mod pointer;
pub mod switchdebug;
