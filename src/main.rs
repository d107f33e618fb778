//! Hurdle Hero entry point
//!
//! Headless native runner: plays one run with a simple autopilot at a fixed
//! 60 Hz frame rate and prints the final snapshot. A run that ends in a crash
//! updates the stored high score; one cut off by the time limit is not
//! recorded.
//!
//! Environment:
//! - `HURDLE_HERO_DATA_DIR`: where settings and the high score live
//! - `HURDLE_HERO_SEED`: fixed seed for a reproducible run
//! - `HURDLE_HERO_TUNING`: JSON file overriding game balance
//! - `HURDLE_HERO_MAX_SECONDS`: abandon the run after this much game time

use std::env;
use std::fs;

use anyhow::Context;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use hurdle_hero::Tuning;
use hurdle_hero::consts::*;
use hurdle_hero::input::KeyState;
use hurdle_hero::persistence::FileStorage;
use hurdle_hero::session::{CueSink, Game};
use hurdle_hero::sim::{Cue, Phase, RunState};
use hurdle_hero::skin::SkinRef;

/// Frame period of the simulated display (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_MAX_SECONDS: f64 = 120.0;

/// Logs cues instead of playing them
struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, cue: Cue, volume: f32) {
        log::debug!("cue {:?} @ {:.2}", cue, volume);
    }

    fn set_music(&mut self, playing: bool, _volume: f32) {
        log::debug!("music {}", if playing { "on" } else { "off" });
    }
}

/// Which key the autopilot presses this frame, if any
fn autopilot(state: &RunState) -> Option<&'static str> {
    let actor = &state.actor;
    let hero_front = CHARACTER_X + actor.width;
    // Look further ahead the faster the field scrolls
    let lookahead = state.speed * DISTANCE_SCALE * 0.35;

    let next = state
        .obstacles
        .iter()
        .filter(|o| o.is_hurdle() && o.pos.x + o.size.x > CHARACTER_X)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))?;

    if state.alternate_mode {
        // Hover just above the pillar, or under it when it floats high
        let target = if next.pos.y > GROUND_HEIGHT + actor.height + 10.0 {
            GROUND_HEIGHT
        } else {
            next.pos.y + next.size.y + 20.0
        };
        let flap = actor.vertical_offset < target && actor.vertical_velocity <= 0.0;
        return flap.then_some("Space");
    }

    let distance = next.pos.x - hero_front;
    (actor.is_grounded() && (0.0..lookahead).contains(&distance)).then_some("Space")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Hurdle Hero (headless) starting...");

    let data_dir = env::var("HURDLE_HERO_DATA_DIR").unwrap_or_else(|_| ".hurdle-hero".into());
    let storage = FileStorage::open(&data_dir)
        .with_context(|| format!("opening data directory {data_dir}"))?;

    let tuning = match env::var("HURDLE_HERO_TUNING") {
        Ok(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            Tuning::from_json(&json).with_context(|| format!("parsing {path}"))?
        }
        Err(_) => Tuning::default(),
    };

    let rng = match env::var("HURDLE_HERO_SEED") {
        Ok(seed) => {
            let seed: u64 = seed.parse().context("HURDLE_HERO_SEED must be an integer")?;
            log::info!("Using seed {}", seed);
            Pcg32::seed_from_u64(seed)
        }
        Err(_) => Pcg32::from_rng(&mut rand::rng()),
    };

    let max_seconds = env::var("HURDLE_HERO_MAX_SECONDS")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_MAX_SECONDS);

    let mut game = Game::new(storage, tuning, rng);
    let mut sink = LogSink;
    log::info!("High score so far: {}", game.high_score().best);

    let skin = SkinRef::Preset(game.settings().preset_skin);
    game.start(skin, &mut sink);

    let mut now = 0.0;
    let mut last_theme = 0;
    let mut was_flappy = false;
    while game.state().phase == Phase::Running && now < max_seconds * 1000.0 {
        if let Some(code) = autopilot(game.state()) {
            game.key(code, KeyState::Pressed, &mut sink);
            game.key(code, KeyState::Released, &mut sink);
        }
        game.frame(now, &mut sink);
        now += FRAME_MS;

        let state = game.state();
        if state.theme_index != last_theme {
            last_theme = state.theme_index;
            log::info!("Theme {} at score {:.0}", last_theme, state.score);
        }
        if state.alternate_mode && !was_flappy {
            was_flappy = true;
            log::info!("FLAPPY MODE");
        }
    }

    let snapshot = game.snapshot();
    if snapshot.phase == Phase::Running {
        log::info!("Time limit reached at score {} (not recorded)", snapshot.display_score);
    }
    if game.is_new_record() {
        log::info!("New high score!");
    }
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
