//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Projectile, Ship};
use super::vector::Vector2;
use crate::consts::*;

/// Difficulty, fixed for the lifetime of a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Case-insensitive lookup, `None` for unknown names
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Per-tick probability of spawning one enemy
    pub fn spawn_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.01,
            Difficulty::Normal => 0.03,
            Difficulty::Hard => 0.05,
        }
    }

    /// Speed tier stamped on newly spawned enemies
    pub fn enemy_speed(&self) -> u32 {
        match self {
            Difficulty::Hard => 2,
            _ => 1,
        }
    }
}

/// The rectangle `[0, width] × [0, height]` in which enemies are retained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

impl PlayArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive on all four edges
    pub fn contains(&self, p: Vector2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Something that happened during a tick, for the host to react to or log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { position: Vector2 },
    EnemyDestroyed { position: Vector2 },
    /// Projectile left through the top edge
    ProjectileExpired,
    /// Enemy pruned for leaving the play area
    EnemyEscaped { position: Vector2 },
    ShipDestroyed { score: u64 },
}

/// Complete game state
///
/// The world exclusively owns every entity. Entities have no identity beyond
/// their slot; both collections keep insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub score: u64,
    pub difficulty: Difficulty,
    pub bounds: PlayArea,
    /// False once an enemy reaches the ship; terminal
    pub alive: bool,
    /// When set, homing speed is `HOMING_SPEED * enemy.speed` instead of
    /// the flat `HOMING_SPEED`
    #[serde(default)]
    pub scale_enemy_speed: bool,
    /// Ticks applied so far
    pub time_ticks: u64,
    /// Enemies destroyed by projectiles
    pub kills: u32,
}

impl World {
    /// Fresh world with the ship parked at the center of the play area
    pub fn new(difficulty: Difficulty, bounds: PlayArea) -> Self {
        Self {
            ship: Ship::at(bounds.center()),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            difficulty,
            bounds,
            alive: true,
            scale_enemy_speed: false,
            time_ticks: 0,
            kills: 0,
        }
    }

    pub fn from_settings(settings: &crate::Settings) -> Self {
        let mut world = Self::new(settings.difficulty, settings.play_area());
        world.scale_enemy_speed = settings.scale_enemy_speed;
        world
    }

    /// Distance an enemy covers in one tick
    pub fn homing_step(&self, enemy: &Enemy) -> f64 {
        if self.scale_enemy_speed {
            HOMING_SPEED * enemy.speed as f64
        } else {
            HOMING_SPEED
        }
    }

    pub fn is_over(&self) -> bool {
        !self.alive
    }
}
