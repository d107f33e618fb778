//! Hurdle Hero - An endless runner simulation
//!
//! Core modules:
//! - `sim`: Simulation core (physics, spawning, collisions, scoring)
//! - `driver`: Frame clock that turns display refreshes into ticks
//! - `session`: Game controller wiring the core to its collaborators
//! - `input`: Keyboard codes to logical input events
//! - `persistence`: Key/value storage for settings and high score
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod error;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;
pub mod skin;
pub mod theme;
pub mod tuning;

pub use error::{Error, Result};
pub use highscores::HighScore;
pub use settings::{ControlsMode, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Visible field dimensions (world units, origin at bottom-left)
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Horizontal distance covered per unit of speed per second
    pub const DISTANCE_SCALE: f32 = 5.0;

    /// Ground baseline (actor rests here)
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Character geometry - fixed horizontal position, only height changes
    pub const CHARACTER_X: f32 = 50.0;
    pub const CHARACTER_WIDTH: f32 = 40.0;
    pub const CHARACTER_HEIGHT_NORMAL: f32 = 60.0;
    pub const CHARACTER_HEIGHT_CROUCH: f32 = 30.0;

    /// Physics (units/s and units/s²)
    pub const JUMP_VELOCITY: f32 = 800.0;
    pub const FLAPPY_JUMP_VELOCITY: f32 = 400.0;
    pub const GRAVITY: f32 = -2500.0;
    pub const MAX_JUMP_CHARGES: u8 = 2;

    /// Global speed
    pub const GAME_SPEED_START: f32 = 50.0;
    pub const GAME_SPEED_INCREMENT: f32 = 0.5;
    /// Score gained per unit of speed per second
    pub const SCORE_RATE: f32 = 2.0;

    /// Hurdles
    pub const HURDLE_WIDTH: f32 = 30.0;
    pub const HURDLE_HEIGHT_LOW: f32 = 40.0;
    pub const HURDLE_HEIGHT_HIGH: f32 = 55.0;
    pub const HURDLE_HIGH_CHANCE: f32 = 0.4;
    pub const HURDLE_SPAWN_MIN: f32 = 3.5;
    pub const HURDLE_SPAWN_MAX: f32 = 5.5;
    /// Hurdle countdown drains at `speed / SPAWN_RATE_DIVISOR` per second
    pub const SPAWN_RATE_DIVISOR: f32 = 50.0;
    /// Flappy-mode hurdles: tall pillars scattered across the field
    pub const FLAPPY_HURDLE_BASE_HEIGHT: f32 = 150.0;
    pub const FLAPPY_HURDLE_HEIGHT_JITTER: f32 = 50.0;
    pub const FLAPPY_HURDLE_Y_MARGIN: f32 = 200.0;

    /// Power-ups
    pub const POWERUP_WIDTH: f32 = 30.0;
    pub const POWERUP_HEIGHT: f32 = 30.0;
    pub const POWERUP_SPAWN_MIN: f32 = 10.0;
    pub const POWERUP_SPAWN_MAX: f32 = 20.0;
    pub const POWERUP_LOW_OFFSET: f32 = 20.0;
    pub const POWERUP_HIGH_OFFSET: f32 = 100.0;
    pub const SHIELD_DURATION: f32 = 5.0;

    /// Score at which flappy mode kicks in
    pub const FLAPPY_MODE_SCORE: f32 = 2000.0;
    /// Score per background theme
    pub const THEME_SCORE_STEP: f32 = 1000.0;

    /// Largest frame delta the clock will hand to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
