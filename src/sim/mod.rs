//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, no internal timing
//! - Injected random source only
//! - Stable iteration order (enemies and projectiles keep insertion order)
//! - No rendering or platform dependencies

pub mod entity;
pub mod random;
pub mod state;
pub mod tick;
pub mod vector;

pub use entity::{Enemy, Projectile, Ship, within_hit_box};
pub use random::{RandomSource, SeededSource};
pub use state::{Difficulty, GameEvent, PlayArea, World};
pub use tick::{spawn_enemy, tick};
pub use vector::{Vector2, Vector2Ext};
