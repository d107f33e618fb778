//! Game session
//!
//! Wires the simulation core to its collaborators: the frame clock, input
//! mapping, audio cues, high-score storage and the selected skin. The core
//! never sees any of these.

use rand::Rng;

use crate::driver::FrameClock;
use crate::highscores::HighScore;
use crate::input::{Key, KeyState, map_key};
use crate::persistence::Storage;
use crate::settings::Settings;
use crate::sim::{Cue, Event, Phase, RunState, Snapshot, advance};
use crate::skin::{PRESET_SKIN_COUNT, SkinRef};
use crate::{Result, Tuning};

/// Audio collaborator
pub trait CueSink {
    /// Play a one-shot effect at `volume` (0.0 - 1.0)
    fn play(&mut self, cue: Cue, volume: f32);

    /// Start or stop the background loop
    fn set_music(&mut self, _playing: bool, _volume: f32) {}
}

/// Sink that drops everything (headless runs, tests)
#[derive(Debug, Default)]
pub struct SilentSink;

impl CueSink for SilentSink {
    fn play(&mut self, _cue: Cue, _volume: f32) {}
}

/// A play session spanning any number of runs
pub struct Game<S: Storage, R: Rng> {
    state: RunState,
    tuning: Tuning,
    rng: R,
    clock: FrameClock,
    storage: S,
    high_score: HighScore,
    settings: Settings,
    skin: SkinRef,
    /// Set when the last run ended with a new record
    new_record: bool,
}

impl<S: Storage, R: Rng> Game<S, R> {
    /// Load persisted settings and high score, then wait on the start screen
    pub fn new(storage: S, tuning: Tuning, rng: R) -> Self {
        let high_score = HighScore::load(&storage);
        let settings = Settings::load(&storage);
        let skin = SkinRef::Preset(settings.preset_skin % PRESET_SKIN_COUNT);
        Self {
            state: RunState::new(),
            tuning,
            rng,
            clock: FrameClock::new(),
            storage,
            high_score,
            settings,
            skin,
            new_record: false,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn high_score(&self) -> &HighScore {
        &self.high_score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn skin(&self) -> &SkinRef {
        &self.skin
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether the run that just ended beat the stored record
    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    /// Change and persist settings
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        self.settings = settings;
        self.settings.save(&mut self.storage)
    }

    /// Leave the start screen with the chosen skin
    pub fn start(&mut self, mut skin: SkinRef, sink: &mut dyn CueSink) {
        if self.state.phase != Phase::NotStarted {
            return;
        }
        if let SkinRef::Preset(i) = &mut skin {
            *i %= PRESET_SKIN_COUNT;
            self.settings.preset_skin = *i;
            if let Err(e) = self.settings.save(&mut self.storage) {
                log::warn!("Failed to save settings: {}", e);
            }
        }
        self.skin = skin;
        self.begin_run(Event::Start, sink);
    }

    /// Play again after game over (keeps the skin)
    pub fn restart(&mut self, sink: &mut dyn CueSink) {
        if self.state.phase != Phase::Ended {
            return;
        }
        self.begin_run(Event::Restart, sink);
    }

    fn begin_run(&mut self, event: Event, sink: &mut dyn CueSink) {
        self.dispatch(event, sink);
        if self.state.is_running() {
            self.clock.reset();
            self.new_record = false;
            sink.set_music(true, self.settings.effective_music_volume());
        }
    }

    pub fn jump(&mut self, sink: &mut dyn CueSink) {
        if self.state.is_running() {
            self.dispatch(Event::Jump, sink);
        }
    }

    /// On-screen crouch button
    pub fn crouch(&mut self, down: bool, sink: &mut dyn CueSink) {
        if !self.state.is_running() {
            return;
        }
        let event = if down {
            if self.state.alternate_mode {
                return;
            }
            Event::CrouchStart
        } else {
            Event::CrouchEnd
        };
        self.dispatch(event, sink);
    }

    /// Keyboard input by DOM key code
    pub fn key(&mut self, code: &str, key_state: KeyState, sink: &mut dyn CueSink) {
        if !self.state.is_running() {
            return;
        }
        let Some(key) = Key::from_code(code) else {
            return;
        };
        if let Some(event) = map_key(key, key_state, self.state.alternate_mode) {
            self.dispatch(event, sink);
        }
    }

    /// Display refresh at `now_ms`; ticks the run while it is in play
    pub fn frame(&mut self, now_ms: f64, sink: &mut dyn CueSink) {
        if !self.state.is_running() {
            return;
        }
        if let Some(dt) = self.clock.frame(now_ms) {
            self.dispatch(Event::Tick(dt), sink);
        }
    }

    /// Feed one event to the core and handle its side effects
    pub fn dispatch(&mut self, event: Event, sink: &mut dyn CueSink) {
        let before = self.state.phase;
        let cues = advance(&mut self.state, event, &self.tuning, &mut self.rng);

        let volume = self.settings.effective_sfx_volume();
        if volume > 0.0 {
            for cue in cues {
                sink.play(cue, volume);
            }
        }

        if before == Phase::Running && self.state.phase == Phase::Ended {
            self.on_game_over(sink);
        }
    }

    fn on_game_over(&mut self, sink: &mut dyn CueSink) {
        sink.set_music(false, 0.0);
        self.new_record = self.high_score.record(self.state.score);
        if let Err(e) = self.high_score.save(&mut self.storage) {
            log::warn!("Failed to save high score: {}", e);
        }
        log::info!(
            "Run over: score {:.0} (best {})",
            self.state.score.floor(),
            self.high_score.best
        );
    }
}
