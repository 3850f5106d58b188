//! Collision detection and resolution
//!
//! Everything is an axis-aligned bounding box. The resolver runs once per
//! frame after movement: player vs enemies ends the run, projectiles vs
//! enemies score kills. Removal is deferred to a single filter pass after the
//! scan so no index shifts under the iteration.

use glam::Vec2;

use super::state::{Enemy, Player, Projectile};
use crate::consts::DEFAULT_HITBOX_SIZE;

/// Axis-aligned bounding box with a square side
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Aabb {
    /// Build a box, substituting the documented default side for degenerate
    /// (missing) sizes.
    pub fn new(pos: Vec2, size: Option<f32>) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            size: size.unwrap_or(DEFAULT_HITBOX_SIZE),
        }
    }
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Some(self.size))
    }
}

impl Projectile {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Some(self.size))
    }
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Some(self.size))
    }
}

/// AABB overlap test. Strict inequalities: boxes that merely touch do not
/// overlap.
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.x + b.size && a.x + a.size > b.x && a.y < b.y + b.size && a.y + a.size > b.y
}

/// What one resolution pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Enemy/projectile pairs consumed this pass (score delta)
    pub kills: u32,
    /// Player overlapped an enemy; the run is over
    pub player_hit: bool,
}

/// Resolve all overlaps for this frame.
///
/// Enemies are scanned in insertion order. The first enemy overlapping the
/// player ends the pass immediately: nothing after the lethal overlap may
/// keep scoring, while kills already resolved earlier in the pass stand.
/// Otherwise each enemy is tested against projectiles in firing order with
/// first-match-wins semantics: a consumed projectile is skipped for later
/// enemies and a killed enemy is not tested against further projectiles, so
/// one overlap never scores twice. Survivors keep their relative order.
pub fn resolve_collisions(
    player: &Player,
    enemies: &mut Vec<Enemy>,
    projectiles: &mut Vec<Projectile>,
) -> CollisionOutcome {
    let player_box = player.aabb();
    let mut enemy_consumed = vec![false; enemies.len()];
    let mut shot_consumed = vec![false; projectiles.len()];
    let mut outcome = CollisionOutcome::default();

    for (ei, enemy) in enemies.iter().enumerate() {
        let enemy_box = enemy.aabb();

        if aabb_overlap(&player_box, &enemy_box) {
            outcome.player_hit = true;
            break;
        }

        for (pi, shot) in projectiles.iter().enumerate() {
            if shot_consumed[pi] {
                continue;
            }
            if aabb_overlap(&shot.aabb(), &enemy_box) {
                enemy_consumed[ei] = true;
                shot_consumed[pi] = true;
                outcome.kills += 1;
                break;
            }
        }
    }

    if outcome.kills > 0 {
        *enemies = std::mem::take(enemies)
            .into_iter()
            .zip(enemy_consumed)
            .filter_map(|(enemy, consumed)| (!consumed).then_some(enemy))
            .collect();
        *projectiles = std::mem::take(projectiles)
            .into_iter()
            .zip(shot_consumed)
            .filter_map(|(shot, consumed)| (!consumed).then_some(shot))
            .collect();
    }

    outcome
}
