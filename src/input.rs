//! Input mapping
//!
//! Turns discrete key events into ship velocity changes and projectile
//! launches. Events are applied between ticks, never during one.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Projectile, World};

/// Movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Input commands delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Direction),
    KeyUp(Direction),
    /// One projectile per event, key-repeat included; no rate limit
    Fire,
}

/// Apply a single input event to the world.
///
/// Releasing either horizontal key stops horizontal motion, even if the
/// opposite key is still held (same for the vertical pair).
pub fn apply_input(world: &mut World, event: InputEvent) {
    match event {
        InputEvent::KeyDown(Direction::Left) => world.ship.velocity.x = -SHIP_SPEED,
        InputEvent::KeyDown(Direction::Right) => world.ship.velocity.x = SHIP_SPEED,
        InputEvent::KeyDown(Direction::Up) => world.ship.velocity.y = -SHIP_SPEED,
        InputEvent::KeyDown(Direction::Down) => world.ship.velocity.y = SHIP_SPEED,
        InputEvent::KeyUp(Direction::Left | Direction::Right) => world.ship.velocity.x = 0.0,
        InputEvent::KeyUp(Direction::Up | Direction::Down) => world.ship.velocity.y = 0.0,
        InputEvent::Fire => {
            let origin = world.ship.position;
            world.projectiles.push(Projectile::fired_from(origin));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Difficulty, PlayArea, Vector2};

    fn world() -> World {
        World::new(Difficulty::Normal, PlayArea::default())
    }

    #[test]
    fn test_key_down_sets_axis() {
        let mut w = world();
        apply_input(&mut w, InputEvent::KeyDown(Direction::Left));
        assert_eq!(w.ship.velocity, Vector2::new(-5.0, 0.0));
        apply_input(&mut w, InputEvent::KeyDown(Direction::Down));
        assert_eq!(w.ship.velocity, Vector2::new(-5.0, 5.0));
        apply_input(&mut w, InputEvent::KeyDown(Direction::Right));
        assert_eq!(w.ship.velocity, Vector2::new(5.0, 5.0));
        apply_input(&mut w, InputEvent::KeyDown(Direction::Up));
        assert_eq!(w.ship.velocity, Vector2::new(5.0, -5.0));
    }

    #[test]
    fn test_release_either_key_zeroes_axis() {
        let mut w = world();
        apply_input(&mut w, InputEvent::KeyDown(Direction::Left));
        apply_input(&mut w, InputEvent::KeyDown(Direction::Up));
        // Right was never pressed, releasing it still stops horizontal motion
        apply_input(&mut w, InputEvent::KeyUp(Direction::Right));
        assert_eq!(w.ship.velocity, Vector2::new(0.0, -5.0));
        apply_input(&mut w, InputEvent::KeyUp(Direction::Down));
        assert_eq!(w.ship.velocity, Vector2::ZERO);
    }

    #[test]
    fn test_fire_spawns_at_ship() {
        let mut w = world();
        w.ship.position = Vector2::new(123.0, 456.0);
        apply_input(&mut w, InputEvent::Fire);
        apply_input(&mut w, InputEvent::Fire);
        assert_eq!(w.projectiles.len(), 2);
        for p in &w.projectiles {
            assert_eq!(p.position, Vector2::new(123.0, 456.0));
            assert_eq!(p.velocity, Vector2::new(0.0, -10.0));
        }
        assert_eq!(w.ship.velocity, Vector2::ZERO);
    }
}
