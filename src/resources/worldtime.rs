//! Simulation clock.
//!
//! `elapsed` doubles as the timestamp carried by
//! [`PointerEvent`](crate::events::pointer::PointerEvent)s and compared
//! against press deadlines.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds since start, scaled.
    pub elapsed: f32,
    /// Seconds of the last frame, scaled.
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
