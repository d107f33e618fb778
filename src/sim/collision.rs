//! Collision detection between the hero and obstacles
//!
//! Everything is an axis-aligned rectangle in field coordinates (origin at the
//! bottom-left, y up). Touching edges do not count as contact.

use glam::Vec2;

use super::state::{Actor, Obstacle, ObstacleKind};
use crate::consts::CHARACTER_X;

/// Axis-aligned hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

impl Actor {
    /// Hitbox at the fixed horizontal position, sized by the current stance
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            Vec2::new(CHARACTER_X, self.vertical_offset),
            Vec2::new(self.width, self.height),
        )
    }
}

impl Obstacle {
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Outcome of sweeping the hero against the obstacle field
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionOutcome {
    /// Nothing ended the tick; `shielded_hits` hurdles were smashed through
    Clear { shielded_hits: u32 },
    /// An unshielded hurdle was hit
    Crash { obstacle_id: u32 },
    /// A power-up was picked up; the tick stops here
    PickedUp {
        obstacle_id: u32,
        shielded_hits: u32,
    },
}

/// Sweep `obstacles` in order, removing whatever the hero consumes.
///
/// Shielded hurdle hits consume the hurdle and keep scanning. The first
/// unshielded hurdle hit or power-up pickup stops the scan.
pub fn resolve_collisions(
    hero: &Rect,
    obstacles: &mut Vec<Obstacle>,
    shielded: bool,
) -> CollisionOutcome {
    let mut shielded_hits = 0;
    let mut i = 0;
    while i < obstacles.len() {
        if !hero.overlaps(&obstacles[i].hitbox()) {
            i += 1;
            continue;
        }

        match obstacles[i].kind {
            ObstacleKind::Hurdle if shielded => {
                obstacles.remove(i);
                shielded_hits += 1;
            }
            ObstacleKind::Hurdle => {
                return CollisionOutcome::Crash {
                    obstacle_id: obstacles[i].id,
                };
            }
            ObstacleKind::PowerUp(_) => {
                let picked = obstacles.remove(i);
                return CollisionOutcome::PickedUp {
                    obstacle_id: picked.id,
                    shielded_hits,
                };
            }
        }
    }
    CollisionOutcome::Clear { shielded_hits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::PowerUpKind;

    fn hurdle(id: u32, x: f32) -> Obstacle {
        Obstacle {
            id,
            kind: ObstacleKind::Hurdle,
            pos: Vec2::new(x, GROUND_HEIGHT),
            size: Vec2::new(HURDLE_WIDTH, HURDLE_HEIGHT_LOW),
        }
    }

    fn shield(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle {
            id,
            kind: ObstacleKind::PowerUp(PowerUpKind::Shield),
            pos: Vec2::new(x, y),
            size: Vec2::new(POWERUP_WIDTH, POWERUP_HEIGHT),
        }
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let above = Rect::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
    }

    #[test]
    fn test_jumping_clears_low_hurdle() {
        let mut actor = Actor::default();
        let obstacle = hurdle(1, CHARACTER_X);
        assert!(actor.hitbox().overlaps(&obstacle.hitbox()));

        actor.vertical_offset = GROUND_HEIGHT + HURDLE_HEIGHT_LOW;
        assert!(!actor.hitbox().overlaps(&obstacle.hitbox()));
    }

    #[test]
    fn test_crouching_ducks_under_floating_obstacle() {
        let mut actor = Actor::default();
        let overhead = shield(1, CHARACTER_X, GROUND_HEIGHT + POWERUP_HIGH_OFFSET - 60.0);
        assert!(actor.hitbox().overlaps(&overhead.hitbox()));
        actor.crouch_start(false);
        assert!(!actor.hitbox().overlaps(&overhead.hitbox()));
    }

    #[test]
    fn test_unshielded_hit_crashes() {
        let hero = Actor::default().hitbox();
        let mut obstacles = vec![hurdle(1, 500.0), hurdle(2, CHARACTER_X)];
        let outcome = resolve_collisions(&hero, &mut obstacles, false);
        assert_eq!(outcome, CollisionOutcome::Crash { obstacle_id: 2 });
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn test_shield_smashes_every_overlapping_hurdle() {
        let hero = Actor::default().hitbox();
        let mut obstacles = vec![
            hurdle(1, CHARACTER_X),
            hurdle(2, 500.0),
            hurdle(3, CHARACTER_X + 10.0),
        ];
        let outcome = resolve_collisions(&hero, &mut obstacles, true);
        assert_eq!(outcome, CollisionOutcome::Clear { shielded_hits: 2 });
        assert_eq!(obstacles.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_pickup_stops_the_scan() {
        let hero = Actor::default().hitbox();
        let mut obstacles = vec![
            shield(1, CHARACTER_X, GROUND_HEIGHT + POWERUP_LOW_OFFSET),
            hurdle(2, CHARACTER_X),
        ];
        let outcome = resolve_collisions(&hero, &mut obstacles, false);
        assert_eq!(
            outcome,
            CollisionOutcome::PickedUp {
                obstacle_id: 1,
                shielded_hits: 0
            }
        );
        assert_eq!(obstacles.len(), 1);
        assert!(obstacles[0].is_hurdle());
    }
}
