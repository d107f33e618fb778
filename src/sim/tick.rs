//! Run transition function
//!
//! Every change to a `RunState` goes through [`advance`], one event at a time.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionOutcome, resolve_collisions};
use super::spawn::{spawn_hurdles, spawn_power_ups};
use super::state::{Phase, RunState};
use crate::Tuning;

/// Logical inputs to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Leave the start screen
    Start,
    /// Begin a new run after game over
    Restart,
    Jump,
    CrouchStart,
    CrouchEnd,
    /// Elapsed seconds since the previous tick
    Tick(f32),
}

/// Audio notifications produced by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Jump,
    Crash,
    PowerUp,
}

/// Apply one event to the run, returning the cues it produced
pub fn advance<R: Rng>(
    state: &mut RunState,
    event: Event,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<Cue> {
    let mut cues = Vec::new();

    match event {
        Event::Start | Event::Restart => {
            let from = match event {
                Event::Start => Phase::NotStarted,
                _ => Phase::Ended,
            };
            if state.phase == from {
                *state = RunState::running(tuning, rng);
                log::info!("Run started");
            }
        }
        Event::Jump => {
            if state.is_running() && state.actor.jump(tuning, state.alternate_mode) {
                cues.push(Cue::Jump);
            }
        }
        Event::CrouchStart => {
            if state.is_running() {
                state.actor.crouch_start(state.alternate_mode);
            }
        }
        Event::CrouchEnd => {
            if state.is_running() {
                state.actor.crouch_end();
            }
        }
        Event::Tick(dt) => tick(state, dt, tuning, rng, &mut cues),
    }

    cues
}

/// Advance a running state by `dt` seconds
fn tick<R: Rng>(state: &mut RunState, dt: f32, tuning: &Tuning, rng: &mut R, cues: &mut Vec<Cue>) {
    if !state.is_running() {
        return;
    }
    // NaN and negative deltas both become 0
    let dt = dt.max(0.0);

    let mut actor = state.actor.clone();
    actor.integrate(tuning.gravity, dt);

    let score = state.score + dt * state.speed * tuning.score_rate;
    let speed = state.speed + tuning.speed_increment * dt;
    let shield = (state.shield_remaining - dt).max(0.0);
    let alternate_mode = state.alternate_mode || score >= tuning.flappy_mode_score;

    let scroll = speed * dt * tuning.distance_scale;
    let mut obstacles = state.obstacles.clone();
    for obstacle in &mut obstacles {
        obstacle.pos.x -= scroll;
    }
    obstacles.retain(|o| !o.is_off_screen());

    match resolve_collisions(&actor.hitbox(), &mut obstacles, shield > 0.0) {
        CollisionOutcome::Crash { obstacle_id } => {
            cues.push(Cue::Crash);
            state.phase = Phase::Ended;
            log::info!("Game over: hit hurdle {} at score {:.0}", obstacle_id, state.score);
            return;
        }
        CollisionOutcome::PickedUp {
            obstacle_id,
            shielded_hits,
        } => {
            cues.extend(std::iter::repeat_n(Cue::PowerUp, shielded_hits as usize + 1));
            // Pickup ends the tick: only the obstacle set and shield are committed
            state.obstacles = obstacles;
            state.shield_remaining = tuning.shield_duration;
            log::debug!("Picked up shield {}", obstacle_id);
            return;
        }
        CollisionOutcome::Clear { shielded_hits } => {
            cues.extend(std::iter::repeat_n(Cue::PowerUp, shielded_hits as usize));
        }
    }

    if alternate_mode && !state.alternate_mode {
        log::info!("Flappy mode engaged at score {:.0}", score);
    }

    state.actor = actor;
    state.score = score;
    state.speed = speed;
    state.shield_remaining = shield;
    state.alternate_mode = alternate_mode;
    state.obstacles = obstacles;

    spawn_hurdles(state, dt, tuning, rng);
    spawn_power_ups(state, dt, tuning, rng);

    state.theme_index = (state.score / tuning.theme_score_step).floor() as u32;
}
