//! Space Dodge - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, world state)
//! - `input`: Key events to ship velocity and fire requests
//! - `snapshot`: Read-only frame view for the presentation layer
//! - `session`: Host-facing wrapper that owns the world and its random source
//! - `settings`: Difficulty and play-area configuration

pub mod input;
pub mod session;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use input::{Direction, InputEvent, apply_input};
pub use session::Session;
pub use settings::Settings;
pub use snapshot::RenderSnapshot;

use sim::Vector2;

/// Game configuration constants
pub mod consts {
    /// Host frame cadence (~60 Hz); the core itself never sleeps
    pub const TICK_MILLIS: u64 = 16;

    /// Default play area
    pub const WIDTH: f64 = 800.0;
    pub const HEIGHT: f64 = 600.0;

    /// Ship axis speed (units per tick)
    pub const SHIP_SPEED: f64 = 5.0;
    /// Projectile speed, always straight up
    pub const PROJECTILE_SPEED: f64 = 10.0;

    /// Enemy pursuit speed (units per tick)
    pub const HOMING_SPEED: f64 = 2.0;
    /// Enemy spin per tick (radians)
    pub const ROTATION_STEP: f64 = 0.1;
    /// Enemies appear on a ring MIN..MIN+SPAN away from the ship
    pub const SPAWN_DISTANCE_MIN: f64 = 50.0;
    pub const SPAWN_DISTANCE_SPAN: f64 = 100.0;

    /// Half-extent of the axis-aligned hit box (per axis, strict <)
    pub const HIT_BOX: f64 = 15.0;
    pub const SCORE_PER_KILL: u64 = 10;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_rotation(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f64::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> Vector2 {
    Vector2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_wrap_rotation() {
        assert!((wrap_rotation(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!((wrap_rotation(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert_eq!(wrap_rotation(TAU), 0.0);
        assert_eq!(wrap_rotation(PI), PI);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let v = polar_to_cartesian(50.0, 0.0);
        assert!((v.x - 50.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let v = polar_to_cartesian(10.0, PI / 2.0);
        assert!(v.x.abs() < 1e-9);
        assert!((v.y - 10.0).abs() < 1e-12);
    }
}
