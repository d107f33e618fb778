//! High score tracking
//!
//! Only the best score (and a run counter) survives between sessions; it is
//! read once at startup and written whenever a run ends.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::persistence::{Storage, load_or_default, save_json};

/// Best score and lifetime run count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    /// Best score (floored, as shown on the HUD)
    pub best: u64,
    /// Runs finished on this device
    #[serde(default)]
    pub runs: u32,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "hurdle_hero_high_score";

    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score beats the current record
    pub fn qualifies(&self, score: f32) -> bool {
        Self::floor(score) > self.best
    }

    /// Record a finished run. Returns true when it set a new record.
    pub fn record(&mut self, score: f32) -> bool {
        self.runs = self.runs.saturating_add(1);
        if !self.qualifies(score) {
            return false;
        }
        self.best = Self::floor(score);
        log::info!("New high score: {}", self.best);
        true
    }

    fn floor(score: f32) -> u64 {
        if score.is_finite() && score > 0.0 {
            score.floor() as u64
        } else {
            0
        }
    }

    /// Load from storage (defaults when missing or corrupt)
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Self {
        load_or_default(storage, Self::STORAGE_KEY)
    }

    pub fn save<S: Storage + ?Sized>(&self, storage: &mut S) -> Result<()> {
        save_json(storage, Self::STORAGE_KEY, self)
    }
}
