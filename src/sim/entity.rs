//! Ship, projectile and enemy entities with their per-tick update rules

use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::*;
use crate::{polar_to_cartesian, wrap_rotation};

/// Axis-aligned box test used for every collision: both axes strictly
/// closer than `HIT_BOX`. This is not a circular distance check.
#[inline]
pub fn within_hit_box(a: Vector2, b: Vector2) -> bool {
    (a.x - b.x).abs() < HIT_BOX && (a.y - b.y).abs() < HIT_BOX
}

/// The player's ship
///
/// Velocity components only ever hold `-SHIP_SPEED`, `0` or `SHIP_SPEED`.
/// The ship is not clamped to the play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Ship {
    pub fn at(position: Vector2) -> Self {
        Self {
            position,
            velocity: Vector2::ZERO,
        }
    }

    /// Integrate one tick of motion
    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Projectile {
    /// Launch straight up from `origin`
    pub fn fired_from(origin: Vector2) -> Self {
        Self {
            position: origin,
            velocity: Vector2::new(0.0, -PROJECTILE_SPEED),
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Past the top edge of the play area
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.position.y < 0.0
    }
}

/// A homing, spinning enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vector2,
    /// Spin angle in [0, 2π), cosmetic only
    pub rotation: f64,
    /// Speed tier assigned at spawn (1, or 2 on hard). Homing ignores it
    /// unless the world has speed scaling enabled.
    pub speed: u32,
}

impl Enemy {
    pub fn new(position: Vector2, speed: u32) -> Self {
        Self {
            position,
            rotation: 0.0,
            speed,
        }
    }

    /// Place an enemy on the spawn ring around `center`
    pub fn spawn_around(center: Vector2, angle: f64, distance: f64, speed: u32) -> Self {
        Self::new(center + polar_to_cartesian(distance, angle), speed)
    }

    /// Pure pursuit: step `step_len` units straight at `target`, then spin.
    ///
    /// The heading is recomputed from scratch every tick. An enemy already
    /// sitting on the target gets `atan2(0, 0) = 0` and drifts along +x.
    pub fn home_toward(&mut self, target: Vector2, step_len: f64) {
        let angle = (target.y - self.position.y).atan2(target.x - self.position.x);
        let velocity = Vector2::new(angle.cos() * step_len, angle.sin() * step_len);
        self.position += velocity;
        self.rotation = wrap_rotation(self.rotation + ROTATION_STEP);
    }
}
