//! Clickable objects and pointer interaction classification.
//!
//! A [`Clickable`] turns raw pointer events into one of three interaction
//! kinds and notifies its listeners:
//!
//! - **Tap** fires on the first pointer-down (not on release).
//! - **DoubleTap** fires on a second pointer-down that arrives before the
//!   press state is reset. It cancels the pending reset.
//! - **TapAndHold** fires once per press when the pointer is dragged more than
//!   [`HOLD_THRESHOLD`] seconds after the press began.
//!
//! Releasing the pointer schedules a reset to [`PressState::Idle`] after
//! [`RESET_DELAY`] seconds. The deadline lives inside the press state, so a
//! double tap clears it in the same mutation that classifies the tap.
//!
//! Each kind only fires when it is present in the object's
//! [`InteractionMethod`] mask.
//!
//! # Listeners
//!
//! Listeners are closures receiving `(entity, method)`. Every registration
//! returns its own [`ListenerId`], and unregistering removes exactly that
//! listener. [`Delivery::OneShot`] listeners are dropped after their first
//! delivery; [`Delivery::Persistent`] listeners stay until removed.
//!
//! # Related
//!
//! - [`crate::systems::clickable`] – pointer observer and reset system
//! - [`crate::events::click::ClickEvent`] – ECS event mirrored for every delivery

use bevy_ecs::prelude::{Component, Entity};
use bitflags::bitflags;
use log::debug;
use smallvec::SmallVec;

/// Seconds a press must last before a drag counts as tap-and-hold.
pub const HOLD_THRESHOLD: f32 = 0.5;
/// Seconds between pointer release and the press state returning to idle.
pub const RESET_DELAY: f32 = 0.2;

bitflags! {
    /// Interaction kinds a clickable accepts. Can be combined.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionMethod: u8 {
        const TAP = 1 << 1;
        const DOUBLE_TAP = 1 << 2;
        const TAP_AND_HOLD = 1 << 3;
    }
}

impl InteractionMethod {
    /// Human readable name of a single flag, or a `|` separated list.
    pub fn describe(self) -> String {
        let names: Vec<&str> = self
            .iter()
            .map(|m| match m {
                InteractionMethod::TAP => "Tap",
                InteractionMethod::DOUBLE_TAP => "DoubleTap",
                InteractionMethod::TAP_AND_HOLD => "TapAndHold",
                _ => "Unknown",
            })
            .collect();
        if names.is_empty() {
            "None".to_string()
        } else {
            names.join("|")
        }
    }

    /// Parse a comma separated list such as `tap, double_tap, hold`.
    ///
    /// An empty string yields an empty mask.
    pub fn parse_list(s: &str) -> Result<Self, String> {
        let mut methods = InteractionMethod::empty();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            methods |= match token.to_ascii_lowercase().as_str() {
                "tap" => InteractionMethod::TAP,
                "double_tap" | "doubletap" | "double" => InteractionMethod::DOUBLE_TAP,
                "hold" | "tap_and_hold" | "tapandhold" => InteractionMethod::TAP_AND_HOLD,
                "all" => InteractionMethod::all(),
                other => return Err(format!("Unknown interaction method '{}'", other)),
            };
        }
        Ok(methods)
    }
}

/// Errors raised by [`Clickable`] registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClickableError {
    #[error(
        "Attempted to register to an invalid method of clickable interaction. The clickable '{name}' does not allow interaction of type {}",
        method.describe()
    )]
    InvalidInteractionMethod {
        name: String,
        method: InteractionMethod,
    },
}

/// Press tracking for a clickable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PressState {
    /// No press in progress.
    #[default]
    Idle,
    /// A press began at `since`.
    Pressed {
        /// Time of the pointer-down that started the press.
        since: f32,
        /// Time at which the press returns to idle. Set on pointer release.
        reset_at: Option<f32>,
        /// Tap-and-hold already fired for this press.
        held: bool,
    },
}

/// Handle returned by listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// How long a listener stays registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Removed after its first delivery.
    OneShot,
    /// Stays until explicitly unregistered.
    Persistent,
}

pub type ClickCallback = Box<dyn Fn(Entity, InteractionMethod) + Send + Sync>;

struct ClickListener {
    id: ListenerId,
    delivery: Delivery,
    /// Methods this listener wants to hear about.
    filter: InteractionMethod,
    callback: ClickCallback,
}

/// Object that classifies pointer input into taps, double taps and holds.
#[derive(Component)]
pub struct Clickable {
    /// Name used in logs and errors.
    pub name: String,
    allowed: InteractionMethod,
    press: PressState,
    listeners: SmallVec<[ClickListener; 4]>,
    next_listener: u64,
}

impl std::fmt::Debug for Clickable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clickable")
            .field("name", &self.name)
            .field("allowed", &self.allowed)
            .field("press", &self.press)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Clickable {
    pub fn new(name: impl Into<String>, allowed: InteractionMethod) -> Self {
        Self {
            name: name.into(),
            allowed,
            press: PressState::Idle,
            listeners: SmallVec::new(),
            next_listener: 0,
        }
    }

    /// Whether every flag in `method` is allowed.
    pub fn is_interaction_method_valid(&self, method: InteractionMethod) -> bool {
        self.allowed.contains(method)
    }

    /// Replace the allowed mask.
    pub fn set_interaction_method(&mut self, methods: InteractionMethod) {
        self.allowed = methods;
    }

    pub fn allowed(&self) -> InteractionMethod {
        self.allowed
    }

    pub fn press_state(&self) -> PressState {
        self.press
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn push_listener(
        &mut self,
        delivery: Delivery,
        filter: InteractionMethod,
        callback: ClickCallback,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(ClickListener {
            id,
            delivery,
            filter,
            callback,
        });
        id
    }

    /// Register a listener for every interaction kind.
    ///
    /// The listener is one-shot: it is removed after its first delivery.
    pub fn register_to_clickable<F>(&mut self, callback: F) -> ListenerId
    where
        F: Fn(Entity, InteractionMethod) + Send + Sync + 'static,
    {
        self.push_listener(
            Delivery::OneShot,
            InteractionMethod::all(),
            Box::new(callback),
        )
    }

    /// Register a listener that receives every interaction until unregistered.
    pub fn register_persistent<F>(&mut self, callback: F) -> ListenerId
    where
        F: Fn(Entity, InteractionMethod) + Send + Sync + 'static,
    {
        self.push_listener(
            Delivery::Persistent,
            InteractionMethod::all(),
            Box::new(callback),
        )
    }

    /// Register a listener for the kinds in `method` only.
    ///
    /// Fails when `method` is not allowed on this object.
    pub fn register_for<F>(
        &mut self,
        method: InteractionMethod,
        delivery: Delivery,
        callback: F,
    ) -> Result<ListenerId, ClickableError>
    where
        F: Fn(Entity, InteractionMethod) + Send + Sync + 'static,
    {
        if !self.is_interaction_method_valid(method) {
            return Err(ClickableError::InvalidInteractionMethod {
                name: self.name.clone(),
                method,
            });
        }
        Ok(self.push_listener(delivery, method, Box::new(callback)))
    }

    /// Register a persistent listener for taps only.
    pub fn register_to_clickable_tap<F>(&mut self, callback: F) -> Result<ListenerId, ClickableError>
    where
        F: Fn(Entity) + Send + Sync + 'static,
    {
        self.register_for(InteractionMethod::TAP, Delivery::Persistent, move |e, _| {
            callback(e)
        })
    }

    /// Register a persistent listener for double taps only.
    pub fn register_to_clickable_double_tap<F>(
        &mut self,
        callback: F,
    ) -> Result<ListenerId, ClickableError>
    where
        F: Fn(Entity) + Send + Sync + 'static,
    {
        self.register_for(
            InteractionMethod::DOUBLE_TAP,
            Delivery::Persistent,
            move |e, _| callback(e),
        )
    }

    /// Remove a listener. Unknown or already removed ids are ignored.
    pub fn unregister_from_clickable(&mut self, id: ListenerId) {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        if self.listeners.len() == before {
            debug!("Clickable '{}': listener {:?} was not registered", self.name, id);
        }
    }

    /// Handle a pointer-down at time `now`.
    ///
    /// A press whose reset deadline already passed counts as idle, even if
    /// the reset system has not run yet this frame.
    pub fn on_pointer_down(&mut self, now: f32) -> Option<InteractionMethod> {
        self.tick(now);
        match self.press {
            PressState::Pressed { .. } if self.allowed.contains(InteractionMethod::DOUBLE_TAP) => {
                self.press = PressState::Idle;
                Some(InteractionMethod::DOUBLE_TAP)
            }
            // Repeat press without double tap: keep the original press alive.
            PressState::Pressed { since, held, .. } => {
                self.press = PressState::Pressed {
                    since,
                    reset_at: None,
                    held,
                };
                None
            }
            PressState::Idle => {
                self.press = PressState::Pressed {
                    since: now,
                    reset_at: None,
                    held: false,
                };
                self.allowed
                    .contains(InteractionMethod::TAP)
                    .then_some(InteractionMethod::TAP)
            }
        }
    }

    /// Handle a drag (pointer held and moving or stationary) at time `now`.
    pub fn on_pointer_drag(&mut self, now: f32) -> Option<InteractionMethod> {
        self.tick(now);
        match &mut self.press {
            PressState::Pressed {
                since,
                reset_at: None,
                held,
            } if !*held
                && now > *since + HOLD_THRESHOLD
                && self.allowed.contains(InteractionMethod::TAP_AND_HOLD) =>
            {
                *held = true;
                Some(InteractionMethod::TAP_AND_HOLD)
            }
            _ => None,
        }
    }

    /// Handle a pointer release at time `now`: schedule the reset.
    pub fn on_pointer_up(&mut self, now: f32) {
        if let PressState::Pressed { reset_at, .. } = &mut self.press {
            *reset_at = Some(now + RESET_DELAY);
        }
    }

    /// Apply a due reset. Returns true when the press went back to idle.
    pub fn tick(&mut self, now: f32) -> bool {
        match self.press {
            PressState::Pressed {
                reset_at: Some(at), ..
            } if now >= at => {
                self.press = PressState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Deliver `method` to every interested listener in registration order.
    ///
    /// One-shot listeners that received it are removed. Returns the number of
    /// listeners invoked.
    pub fn notify(&mut self, entity: Entity, method: InteractionMethod) -> usize {
        let mut delivered = 0;
        for listener in self.listeners.iter().filter(|l| l.filter.contains(method)) {
            (listener.callback)(entity, method);
            delivered += 1;
        }
        self.listeners
            .retain(|l| !(l.delivery == Delivery::OneShot && l.filter.contains(method)));
        delivered
    }
}
