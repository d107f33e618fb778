//! Simulation core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No I/O, rendering or audio
//! - Randomness only through the injected `Rng`
//! - Stable iteration order (by obstacle ID)

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, Rect, resolve_collisions};
pub use state::{Actor, ActorView, Obstacle, ObstacleKind, Phase, PowerUpKind, RunState, Snapshot};
pub use tick::{Cue, Event, advance};
