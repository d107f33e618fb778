//! Player settings and preferences
//!
//! Persisted separately from the high score.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::persistence::{Storage, load_or_default, save_json};

/// When to show the on-screen jump/crouch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlsMode {
    /// Only on touch devices
    #[default]
    Auto,
    Always,
    Never,
}

impl ControlsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlsMode::Auto => "Auto",
            ControlsMode::Always => "Always",
            ControlsMode::Never => "Never",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ControlsMode::Auto),
            "always" | "on" => Some(ControlsMode::Always),
            "never" | "off" => Some(ControlsMode::Never),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Controls ===
    pub on_screen_controls: ControlsMode,

    // === Visuals ===
    /// Freeze the parallax background
    pub reduced_motion: bool,
    /// Preset skin picked on the start screen
    pub preset_skin: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            on_screen_controls: ControlsMode::Auto,

            reduced_motion: false,
            preset_skin: 0,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "hurdle_hero_settings";

    /// Volume applied to jump/crash/power-up cues
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Volume applied to the background loop
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Whether to draw on-screen buttons on this device
    pub fn show_on_screen_controls(&self, touch_device: bool) -> bool {
        match self.on_screen_controls {
            ControlsMode::Auto => touch_device,
            ControlsMode::Always => true,
            ControlsMode::Never => false,
        }
    }

    /// Parallax scroll duration for a layer, `None` when motion is reduced
    pub fn parallax_period(&self, speed: f32, layer_multiplier: f32) -> Option<f32> {
        if self.reduced_motion || speed <= 0.0 || layer_multiplier <= 0.0 {
            None
        } else {
            Some(100.0 / (speed * layer_multiplier))
        }
    }

    /// Load settings from storage
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Self {
        load_or_default(storage, Self::STORAGE_KEY)
    }

    /// Save settings to storage
    pub fn save<S: Storage + ?Sized>(&self, storage: &mut S) -> Result<()> {
        save_json(storage, Self::STORAGE_KEY, self)
    }
}
