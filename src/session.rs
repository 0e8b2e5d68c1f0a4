//! Host-facing game session
//!
//! Owns one world and its random source. The host forwards key events,
//! calls `advance` once per frame and pulls a snapshot to draw.

use crate::input::{InputEvent, apply_input};
use crate::settings::Settings;
use crate::sim::{GameEvent, SeededSource, World, tick};
use crate::snapshot::RenderSnapshot;

pub struct Session {
    world: World,
    rng: SeededSource,
}

impl Session {
    /// Start a round; a missing seed is drawn from OS entropy
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Starting {} round on {}x{} with seed {}",
            settings.difficulty.as_str(),
            settings.width,
            settings.height,
            seed
        );
        Self::with_world(World::from_settings(settings), seed)
    }

    /// Wrap an existing world (handy for scripted scenarios)
    pub fn with_world(world: World, seed: u64) -> Self {
        Self {
            world,
            rng: SeededSource::new(seed),
        }
    }

    /// Input is ignored once the round is over
    pub fn handle(&mut self, event: InputEvent) {
        if self.world.alive {
            apply_input(&mut self.world, event);
        }
    }

    /// Run one tick
    pub fn advance(&mut self) -> Vec<GameEvent> {
        tick(&mut self.world, &mut self.rng)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_over(&self) -> bool {
        self.world.is_over()
    }

    pub fn score(&self) -> u64 {
        self.world.score
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
