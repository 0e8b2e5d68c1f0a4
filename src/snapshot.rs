//! Render snapshot
//!
//! Immutable per-frame view of the world for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::sim::{Vector2, World};

/// Where to draw an enemy and how far it has spun
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySprite {
    pub position: Vector2,
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub ship: Vector2,
    pub projectiles: Vec<Vector2>,
    pub enemies: Vec<EnemySprite>,
    pub score: u64,
    pub alive: bool,
}

impl RenderSnapshot {
    /// Pure projection; calling it twice on the same world gives equal output
    pub fn capture(world: &World) -> Self {
        Self {
            ship: world.ship.position,
            projectiles: world.projectiles.iter().map(|p| p.position).collect(),
            enemies: world
                .enemies
                .iter()
                .map(|e| EnemySprite {
                    position: e.position,
                    rotation: e.rotation,
                })
                .collect(),
            score: world.score,
            alive: world.alive,
        }
    }

    /// Host-facing game-over line, `None` while the round is running
    pub fn game_over_message(&self) -> Option<String> {
        (!self.alive).then(|| format!("Game Over! Your Score: {}", self.score))
    }
}

impl From<&World> for RenderSnapshot {
    fn from(world: &World) -> Self {
        Self::capture(world)
    }
}
