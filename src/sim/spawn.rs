//! Procedural obstacle generation
//!
//! Both spawners run off countdowns owned by `RunState`. Hurdles drain their
//! countdown proportionally to speed, so they get denser as the run speeds up;
//! power-ups run on plain wall time.

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, ObstacleKind, PowerUpKind, RunState};
use crate::Tuning;
use crate::consts::*;

/// Build a hurdle at the right edge of the field
pub fn random_hurdle<R: Rng>(id: u32, flappy: bool, tuning: &Tuning, rng: &mut R) -> Obstacle {
    let (y, height) = if flappy {
        // Pillars anywhere in the air, tall enough to force a flap
        let y = GROUND_HEIGHT + rng.random::<f32>() * (FIELD_HEIGHT - FLAPPY_HURDLE_Y_MARGIN);
        let height = FLAPPY_HURDLE_BASE_HEIGHT + rng.random::<f32>() * FLAPPY_HURDLE_HEIGHT_JITTER;
        (y, height)
    } else {
        let high = rng.random_bool(f64::from(tuning.hurdle_high_chance));
        let height = if high {
            HURDLE_HEIGHT_HIGH
        } else {
            HURDLE_HEIGHT_LOW
        };
        (GROUND_HEIGHT, height)
    };

    Obstacle {
        id,
        kind: ObstacleKind::Hurdle,
        pos: Vec2::new(FIELD_WIDTH, y),
        size: Vec2::new(HURDLE_WIDTH, height),
    }
}

/// Build a shield power-up at one of two heights
pub fn random_power_up<R: Rng>(id: u32, rng: &mut R) -> Obstacle {
    let offset = if rng.random_bool(0.5) {
        POWERUP_HIGH_OFFSET
    } else {
        POWERUP_LOW_OFFSET
    };
    Obstacle {
        id,
        kind: ObstacleKind::PowerUp(PowerUpKind::Shield),
        pos: Vec2::new(FIELD_WIDTH, GROUND_HEIGHT + offset),
        size: Vec2::new(POWERUP_WIDTH, POWERUP_HEIGHT),
    }
}

/// Drain the hurdle countdown and spawn when it runs out
pub fn spawn_hurdles<R: Rng>(state: &mut RunState, dt: f32, tuning: &Tuning, rng: &mut R) {
    state.hurdle_countdown -= dt * state.speed / tuning.spawn_rate_divisor;
    if state.hurdle_countdown > 0.0 {
        return;
    }

    let id = state.next_entity_id();
    let hurdle = random_hurdle(id, state.alternate_mode, tuning, rng);
    log::debug!(
        "Spawned hurdle {} (y={:.0}, h={:.0})",
        hurdle.id,
        hurdle.pos.y,
        hurdle.size.y
    );
    state.obstacles.push(hurdle);
    state.hurdle_countdown = tuning.hurdle_interval.lerp(rng.random());
}

/// Drain the power-up countdown and spawn when it runs out
pub fn spawn_power_ups<R: Rng>(state: &mut RunState, dt: f32, tuning: &Tuning, rng: &mut R) {
    state.power_up_countdown -= dt;
    if state.power_up_countdown > 0.0 {
        return;
    }

    let id = state.next_entity_id();
    let power_up = random_power_up(id, rng);
    log::debug!("Spawned power-up {} (y={:.0})", power_up.id, power_up.pos.y);
    state.obstacles.push(power_up);
    state.power_up_countdown = tuning.power_up_interval.lerp(rng.random());
}
