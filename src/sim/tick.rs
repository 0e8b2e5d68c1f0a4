//! Per-frame simulation tick
//!
//! Core game loop that advances the world by exactly one frame.

use super::entity::{Enemy, within_hit_box};
use super::random::RandomSource;
use super::state::{GameEvent, World};
use crate::consts::*;

/// Advance the world by one tick.
///
/// Sub-steps run in a fixed order; collision and scoring outcomes depend on it:
/// 1. ship integration
/// 2. projectile integration, then expiry past the top edge
/// 3. per enemy: homing, first-projectile kill, ship contact (ends the tick)
/// 4. spawn roll
/// 5. pruning of enemies outside the play area
///
/// A dead world is left untouched and no randomness is consumed.
pub fn tick(world: &mut World, rng: &mut impl RandomSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !world.alive {
        return events;
    }
    world.time_ticks += 1;

    // 1. Ship
    world.ship.advance();
    let ship_pos = world.ship.position;

    // 2. Projectiles
    for projectile in &mut world.projectiles {
        projectile.advance();
    }
    let before = world.projectiles.len();
    world.projectiles.retain(|p| !p.is_expired());
    for _ in world.projectiles.len()..before {
        events.push(GameEvent::ProjectileExpired);
    }

    // 3. Enemies: homing, projectile hits, ship contact.
    // Survivors are collected into a fresh list so removal never skips an enemy.
    let enemies = std::mem::take(&mut world.enemies);
    let mut survivors = Vec::with_capacity(enemies.len());
    let mut pending = enemies.into_iter();
    while let Some(mut enemy) = pending.next() {
        let step = world.homing_step(&enemy);
        enemy.home_toward(ship_pos, step);

        // At most one kill per enemy per tick: the first projectile in range
        if let Some(hit) = world
            .projectiles
            .iter()
            .position(|p| within_hit_box(p.position, enemy.position))
        {
            world.projectiles.remove(hit);
            world.score += SCORE_PER_KILL;
            world.kills += 1;
            log::debug!(
                "Enemy destroyed at ({:.1}, {:.1}), score {}",
                enemy.position.x,
                enemy.position.y,
                world.score
            );
            events.push(GameEvent::EnemyDestroyed {
                position: enemy.position,
            });
            continue;
        }

        if within_hit_box(enemy.position, ship_pos) {
            world.alive = false;
            survivors.push(enemy);
            survivors.extend(pending);
            world.enemies = survivors;
            log::info!(
                "Ship destroyed after {} ticks, final score {}",
                world.time_ticks,
                world.score
            );
            events.push(GameEvent::ShipDestroyed { score: world.score });
            return events;
        }

        survivors.push(enemy);
    }
    world.enemies = survivors;

    // 4. Spawn roll: one independent trial per tick
    if rng.next_unit() < world.difficulty.spawn_chance() {
        let position = spawn_enemy(world, rng);
        log::debug!("Enemy spawned at ({:.1}, {:.1})", position.x, position.y);
        events.push(GameEvent::EnemySpawned { position });
    }

    // 5. Prune enemies outside the play area
    let bounds = world.bounds;
    world.enemies.retain(|enemy| {
        let keep = bounds.contains(enemy.position);
        if !keep {
            events.push(GameEvent::EnemyEscaped {
                position: enemy.position,
            });
        }
        keep
    });

    events
}

/// Place one new enemy on the spawn ring around the ship.
///
/// Draws the angle, then the distance, from `rng`. Returns the spawn position.
pub fn spawn_enemy(world: &mut World, rng: &mut impl RandomSource) -> super::Vector2 {
    let angle = rng.next_unit() * std::f64::consts::TAU;
    let distance = rng.next_unit() * SPAWN_DISTANCE_SPAN + SPAWN_DISTANCE_MIN;
    let enemy = Enemy::spawn_around(
        world.ship.position,
        angle,
        distance,
        world.difficulty.enemy_speed(),
    );
    world.enemies.push(enemy);
    enemy.position
}
