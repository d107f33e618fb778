//! Keyboard and on-screen control mapping
//!
//! Physical input is translated into the logical events the simulation
//! understands. Crouch presses are dropped while flappy mode is active, but a
//! release always goes through so the hero can't stay stuck ducking.

use crate::sim::Event;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    Space,
    ArrowDown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::ArrowUp),
            "Space" => Some(Key::Space),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Map a key transition to a simulation event, if any.
///
/// Auto-repeat presses of the crouch key pass through: `CrouchStart` is
/// idempotent, and a repeat after landing is what starts a crouch that was
/// pressed mid-air.
pub fn map_key(key: Key, state: KeyState, flappy: bool) -> Option<Event> {
    match (key, state) {
        (Key::ArrowUp | Key::Space, KeyState::Pressed) => Some(Event::Jump),
        (Key::ArrowUp | Key::Space, KeyState::Released) => None,
        (Key::ArrowDown, KeyState::Pressed) => (!flappy).then_some(Event::CrouchStart),
        (Key::ArrowDown, KeyState::Released) => Some(Event::CrouchEnd),
    }
}
