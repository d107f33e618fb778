//! Data-driven game balance
//!
//! Every number the simulation reads lives here. Defaults come from
//! [`crate::consts`]; a JSON file may override any subset of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Error, Result};

/// Inclusive interval a countdown is re-randomized within (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnInterval {
    pub min: f32,
    pub max: f32,
}

impl SpawnInterval {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map a unit sample `t` in [0, 1) onto the interval
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        t * (self.max - self.min) + self.min
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub flappy_jump_velocity: f32,
    pub max_jump_charges: u8,

    pub speed_start: f32,
    pub speed_increment: f32,
    pub score_rate: f32,
    pub distance_scale: f32,

    pub hurdle_interval: SpawnInterval,
    pub hurdle_high_chance: f32,
    pub spawn_rate_divisor: f32,
    pub power_up_interval: SpawnInterval,
    pub shield_duration: f32,

    pub flappy_mode_score: f32,
    pub theme_score_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            flappy_jump_velocity: FLAPPY_JUMP_VELOCITY,
            max_jump_charges: MAX_JUMP_CHARGES,

            speed_start: GAME_SPEED_START,
            speed_increment: GAME_SPEED_INCREMENT,
            score_rate: SCORE_RATE,
            distance_scale: DISTANCE_SCALE,

            hurdle_interval: SpawnInterval::new(HURDLE_SPAWN_MIN, HURDLE_SPAWN_MAX),
            hurdle_high_chance: HURDLE_HIGH_CHANCE,
            spawn_rate_divisor: SPAWN_RATE_DIVISOR,
            power_up_interval: SpawnInterval::new(POWERUP_SPAWN_MIN, POWERUP_SPAWN_MAX),
            shield_duration: SHIELD_DURATION,

            flappy_mode_score: FLAPPY_MODE_SCORE,
            theme_score_step: THEME_SCORE_STEP,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning override (missing fields keep defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the run invariants
    pub fn validate(&self) -> Result<()> {
        if self.gravity >= 0.0 || self.gravity.is_nan() {
            return Err(Error::InvalidTuning("gravity must pull downward".into()));
        }
        if self.jump_velocity <= 0.0 || self.flappy_jump_velocity <= 0.0 {
            return Err(Error::InvalidTuning("jump velocities must be positive".into()));
        }
        if self.speed_start <= 0.0 || self.speed_increment < 0.0 {
            return Err(Error::InvalidTuning(
                "speed must start positive and never decrease".into(),
            ));
        }
        if self.score_rate < 0.0 || self.distance_scale <= 0.0 {
            return Err(Error::InvalidTuning("score rate and distance scale out of range".into()));
        }
        if !self.hurdle_interval.is_valid() || !self.power_up_interval.is_valid() {
            return Err(Error::InvalidTuning("spawn intervals need 0 < min <= max".into()));
        }
        if !(0.0..=1.0).contains(&self.hurdle_high_chance) {
            return Err(Error::InvalidTuning("hurdle_high_chance must be in [0, 1]".into()));
        }
        if self.spawn_rate_divisor <= 0.0 || self.theme_score_step <= 0.0 {
            return Err(Error::InvalidTuning("divisors must be positive".into()));
        }
        if !(self.shield_duration >= 0.0 && self.shield_duration.is_finite()) {
            return Err(Error::InvalidTuning("shield_duration must be finite and >= 0".into()));
        }
        if !(1..=MAX_JUMP_CHARGES).contains(&self.max_jump_charges) {
            return Err(Error::InvalidTuning(format!(
                "max_jump_charges must be in 1..={MAX_JUMP_CHARGES}"
            )));
        }
        let finite = [
            self.jump_velocity,
            self.flappy_jump_velocity,
            self.speed_start,
            self.speed_increment,
            self.score_rate,
            self.distance_scale,
            self.spawn_rate_divisor,
            self.flappy_mode_score,
            self.theme_score_step,
        ];
        if finite.iter().any(|v| !v.is_finite()) || self.gravity.is_infinite() {
            return Err(Error::InvalidTuning("values must be finite".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "shield_duration": 8.0 }"#).unwrap();
        assert_eq!(tuning.shield_duration, 8.0);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.hurdle_interval, SpawnInterval::new(3.5, 5.5));
    }

    #[test]
    fn test_rejects_inverted_interval() {
        let err = Tuning::from_json(r#"{ "power_up_interval": { "min": 20.0, "max": 10.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": 10.0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_jump_charges_out_of_range() {
        for charges in [0, 3, 5] {
            let json = format!(r#"{{ "max_jump_charges": {charges} }}"#);
            assert!(matches!(Tuning::from_json(&json), Err(Error::InvalidTuning(_))));
        }
        let single = Tuning::from_json(r#"{ "max_jump_charges": 1 }"#).unwrap();
        assert_eq!(single.max_jump_charges, 1);
    }

    #[test]
    fn test_rejects_non_finite_thresholds() {
        let tuning = Tuning {
            flappy_mode_score: f32::INFINITY,
            ..Tuning::default()
        };
        assert!(matches!(tuning.validate(), Err(Error::InvalidTuning(_))));

        let tuning = Tuning {
            shield_duration: f32::NAN,
            ..Tuning::default()
        };
        assert!(matches!(tuning.validate(), Err(Error::InvalidTuning(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(Error::Json(_))));
    }

    #[test]
    fn test_interval_lerp() {
        let interval = SpawnInterval::new(10.0, 20.0);
        assert_eq!(interval.lerp(0.0), 10.0);
        assert_eq!(interval.lerp(0.5), 15.0);
    }
}
