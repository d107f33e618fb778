//! Actor movement: gravity integration, jumps and crouching

use super::state::Actor;
use crate::Tuning;
use crate::consts::*;

impl Actor {
    /// Integrate one timestep (velocity first, then position) and clamp to ground
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vertical_velocity += gravity * dt;
        self.vertical_offset += self.vertical_velocity * dt;

        if self.vertical_offset <= GROUND_HEIGHT {
            self.land();
        }
    }

    /// Snap onto the baseline and reset all airborne state
    fn land(&mut self) {
        self.vertical_offset = GROUND_HEIGHT;
        self.vertical_velocity = 0.0;
        self.airborne = false;
        self.jump_charges = 0;
    }

    /// Apply a jump impulse. Returns false when the jump is not allowed.
    ///
    /// Normal mode allows up to `max_jump_charges` impulses per airtime; the
    /// second one overwrites the current velocity rather than adding to it.
    /// Flappy mode always flaps with the smaller impulse.
    pub fn jump(&mut self, tuning: &Tuning, flappy: bool) -> bool {
        if flappy {
            self.vertical_velocity = tuning.flappy_jump_velocity;
            self.airborne = true;
            return true;
        }

        if self.jump_charges >= tuning.max_jump_charges {
            return false;
        }
        self.airborne = true;
        self.vertical_velocity = tuning.jump_velocity;
        self.jump_charges += 1;
        true
    }

    /// Duck under high hurdles. Only from the ground, never in flappy mode.
    pub fn crouch_start(&mut self, flappy: bool) -> bool {
        if self.airborne || flappy {
            return false;
        }
        self.crouching = true;
        self.height = CHARACTER_HEIGHT_CROUCH;
        true
    }

    /// Always stands back up, so a crouch can never get stuck
    pub fn crouch_end(&mut self) {
        self.crouching = false;
        self.height = CHARACTER_HEIGHT_NORMAL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_pulls_grounded_actor_back_down() {
        let mut actor = Actor::default();
        actor.integrate(GRAVITY, 1.0);
        assert_eq!(actor.vertical_offset, GROUND_HEIGHT);
        assert_eq!(actor.vertical_velocity, 0.0);
        assert!(!actor.airborne);
    }

    #[test]
    fn test_jump_then_small_step() {
        let tuning = Tuning::default();
        let mut actor = Actor::default();
        assert!(actor.jump(&tuning, false));
        actor.integrate(tuning.gravity, 0.01);

        assert!(actor.airborne);
        assert_eq!(actor.jump_charges, 1);
        let expected_vel = JUMP_VELOCITY + GRAVITY * 0.01;
        assert!((actor.vertical_velocity - expected_vel).abs() < 1e-3);
        assert!((actor.vertical_offset - (GROUND_HEIGHT + expected_vel * 0.01)).abs() < 1e-3);
    }

    #[test]
    fn test_double_jump_cap() {
        let tuning = Tuning::default();
        let mut actor = Actor::default();
        assert!(actor.jump(&tuning, false));
        actor.integrate(tuning.gravity, 0.05);
        assert!(actor.jump(&tuning, false));
        // Second impulse overwrites the decayed velocity
        assert_eq!(actor.vertical_velocity, JUMP_VELOCITY);
        assert!(!actor.jump(&tuning, false));
        assert_eq!(actor.jump_charges, 2);
    }

    #[test]
    fn test_landing_restores_jump_charges() {
        let tuning = Tuning::default();
        let mut actor = Actor::default();
        actor.jump(&tuning, false);
        actor.jump(&tuning, false);
        for _ in 0..200 {
            actor.integrate(tuning.gravity, 1.0 / 60.0);
        }
        assert_eq!(actor.jump_charges, 0);
        assert!(actor.jump(&tuning, false));
    }

    #[test]
    fn test_flappy_jump_is_unlimited() {
        let tuning = Tuning::default();
        let mut actor = Actor::default();
        for _ in 0..5 {
            assert!(actor.jump(&tuning, true));
        }
        assert_eq!(actor.vertical_velocity, FLAPPY_JUMP_VELOCITY);
        assert_eq!(actor.jump_charges, 0);
        assert!(actor.airborne);
    }

    #[test]
    fn test_crouch_rules() {
        let tuning = Tuning::default();
        let mut actor = Actor::default();

        assert!(!actor.crouch_start(true));
        assert!(actor.crouch_start(false));
        assert_eq!(actor.height, CHARACTER_HEIGHT_CROUCH);
        actor.crouch_end();
        assert_eq!(actor.height, CHARACTER_HEIGHT_NORMAL);

        actor.jump(&tuning, false);
        assert!(!actor.crouch_start(false));
        assert!(!actor.crouching);

        // Release is unconditional
        actor.crouching = true;
        actor.height = CHARACTER_HEIGHT_CROUCH;
        actor.crouch_end();
        assert!(!actor.crouching);
        assert_eq!(actor.height, CHARACTER_HEIGHT_NORMAL);
    }

    proptest! {
        #[test]
        fn prop_ground_clamp(
            offset in GROUND_HEIGHT..400.0f32,
            velocity in -2000.0..1000.0f32,
            charges in 0u8..=2,
            dt in 0.0..0.5f32,
        ) {
            let mut actor = Actor {
                vertical_offset: offset,
                vertical_velocity: velocity,
                airborne: true,
                jump_charges: charges,
                ..Actor::default()
            };
            let next_vel = velocity + GRAVITY * dt;
            let would_land = offset + next_vel * dt <= GROUND_HEIGHT;

            actor.integrate(GRAVITY, dt);

            prop_assert!(actor.vertical_offset >= GROUND_HEIGHT);
            if would_land {
                prop_assert_eq!(actor.vertical_offset, GROUND_HEIGHT);
                prop_assert_eq!(actor.vertical_velocity, 0.0);
                prop_assert!(!actor.airborne);
                prop_assert_eq!(actor.jump_charges, 0);
            }
        }
    }
}
