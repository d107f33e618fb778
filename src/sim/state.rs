//! Run state and core simulation types
//!
//! `RunState` owns every entity; nothing in the simulation has identity
//! outside of it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Start screen, nothing simulated yet
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended (terminal; a new run is a fresh state)
    Ended,
}

/// The player-controlled hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Height of the actor's feet above the field bottom
    pub vertical_offset: f32,
    /// Units/second, positive is up
    pub vertical_velocity: f32,
    pub airborne: bool,
    pub crouching: bool,
    pub width: f32,
    pub height: f32,
    /// Jump impulses used since the last ground contact
    pub jump_charges: u8,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            vertical_offset: GROUND_HEIGHT,
            vertical_velocity: 0.0,
            airborne: false,
            crouching: false,
            width: CHARACTER_WIDTH,
            height: CHARACTER_HEIGHT_NORMAL,
            jump_charges: 0,
        }
    }
}

impl Actor {
    /// Resting on the ground baseline
    pub fn is_grounded(&self) -> bool {
        !self.airborne
    }
}

/// Power-up subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ends the run on contact unless shielded
    Hurdle,
    /// Consumed on contact
    PowerUp(PowerUpKind),
}

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn is_hurdle(&self) -> bool {
        self.kind == ObstacleKind::Hurdle
    }

    /// Trailing edge has left the field
    pub fn is_off_screen(&self) -> bool {
        self.pos.x <= -self.size.x
    }
}

/// Complete run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub phase: Phase,
    pub score: f32,
    pub speed: f32,
    /// Seconds of hurdle immunity left
    pub shield_remaining: f32,
    /// Countdown until the next hurdle (drains faster as speed rises)
    pub hurdle_countdown: f32,
    /// Countdown until the next power-up (seconds)
    pub power_up_countdown: f32,
    /// Flappy movement; one-way within a run
    pub alternate_mode: bool,
    /// Background theme (presentation only)
    pub theme_index: u32,
    pub actor: Actor,
    /// Active obstacles (insertion order == id order)
    pub obstacles: Vec<Obstacle>,
    /// Next obstacle ID
    next_id: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            phase: Phase::NotStarted,
            score: 0.0,
            speed: GAME_SPEED_START,
            shield_remaining: 0.0,
            hurdle_countdown: HURDLE_SPAWN_MIN,
            power_up_countdown: POWERUP_SPAWN_MIN,
            alternate_mode: false,
            theme_index: 0,
            actor: Actor::default(),
            obstacles: Vec::new(),
            next_id: 1,
        }
    }
}

impl RunState {
    /// State shown on the start screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh running state with randomized spawn countdowns
    pub fn running<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            phase: Phase::Running,
            speed: tuning.speed_start,
            hurdle_countdown: tuning.hurdle_interval.lerp(rng.random()),
            power_up_countdown: tuning.power_up_interval.lerp(rng.random()),
            ..Self::default()
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_shielded(&self) -> bool {
        self.shield_remaining > 0.0
    }

    /// Read-only view for presentation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            display_score: self.score.floor() as u64,
            speed: self.speed,
            actor: ActorView {
                x: CHARACTER_X,
                y: self.actor.vertical_offset,
                width: self.actor.width,
                height: self.actor.height,
                airborne: self.actor.airborne,
                crouching: self.actor.crouching,
            },
            obstacles: self.obstacles.clone(),
            shield_remaining: self.shield_remaining,
            theme_index: self.theme_index,
            alternate_mode: self.alternate_mode,
        }
    }
}

/// Actor geometry as the renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub airborne: bool,
    pub crouching: bool,
}

/// Snapshot of a run after a transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: f32,
    /// Score as shown on the HUD
    pub display_score: u64,
    pub speed: f32,
    pub actor: ActorView,
    pub obstacles: Vec<Obstacle>,
    pub shield_remaining: f32,
    pub theme_index: u32,
    pub alternate_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state_waits_on_start_screen() {
        let state = RunState::new();
        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.actor.vertical_offset, GROUND_HEIGHT);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_running_randomizes_countdowns_within_intervals() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let state = RunState::running(&tuning, &mut rng);
            assert_eq!(state.phase, Phase::Running);
            assert_eq!(state.speed, tuning.speed_start);
            assert_eq!(state.score, 0.0);
            assert!((HURDLE_SPAWN_MIN..=HURDLE_SPAWN_MAX).contains(&state.hurdle_countdown));
            assert!((POWERUP_SPAWN_MIN..=POWERUP_SPAWN_MAX).contains(&state.power_up_countdown));
        }
    }

    #[test]
    fn test_entity_ids_are_monotonic() {
        let mut state = RunState::new();
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        let c = state.next_entity_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_off_screen_uses_trailing_edge() {
        let mut obstacle = Obstacle {
            id: 1,
            kind: ObstacleKind::Hurdle,
            pos: Vec2::new(-29.0, GROUND_HEIGHT),
            size: Vec2::new(30.0, 40.0),
        };
        assert!(!obstacle.is_off_screen());
        obstacle.pos.x = -30.0;
        assert!(obstacle.is_off_screen());
    }

    #[test]
    fn test_snapshot_floors_display_score() {
        let mut state = RunState::new();
        state.score = 123.9;
        state.theme_index = 0;
        let snapshot = state.snapshot();
        assert_eq!(snapshot.display_score, 123);
        assert_eq!(snapshot.actor.x, CHARACTER_X);
        assert_eq!(snapshot.actor.height, CHARACTER_HEIGHT_NORMAL);
    }
}
