//! Frame stepper
//!
//! One `step` call advances the world by one frame: difficulty retune,
//! player movement, auto-fire, projectile and enemy motion/spawn/prune,
//! then collision resolution. The driver calls it with a monotonic game-time
//! timestamp only while the world is running, so paused time never leaks
//! into the timers.

use rand::Rng;

use super::collision::resolve_collisions;
use super::state::{Enemy, Projectile, RunState, World};
use crate::consts::*;
use crate::whole_seconds;

/// Current key state, sampled once per step. Fire is automatic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the world by one frame at game-time `now_ms`
pub fn step(world: &mut World, input: &InputSnapshot, now_ms: f64) {
    if world.run_state != RunState::Running {
        return;
    }

    world.clock.elapsed_seconds = whole_seconds(world.clock.start_ms, now_ms);

    let World {
        clock, difficulty, ..
    } = world;
    difficulty.retune_spawn(clock, now_ms);

    move_player(world, input);
    auto_fire(world, now_ms);
    advance_projectiles(&mut world.projectiles);
    spawn_enemy(world, now_ms);
    advance_enemies(&mut world.enemies);

    let World {
        player,
        enemies,
        projectiles,
        ..
    } = world;
    let outcome = resolve_collisions(player, enemies, projectiles);

    // Kills resolved before a lethal overlap in the same pass still count:
    // the pass only stops at the overlap that ends the run.
    if outcome.kills > 0 {
        world.player.score += outcome.kills;
        // One recompute after the tally; per-kill recomputes would land on
        // the same final value.
        world.difficulty.retune_fire(world.player.score);
        log::debug!(
            "{} kill(s), score {}, fire interval {:.0}ms",
            outcome.kills,
            world.player.score,
            world.difficulty.fire_interval_ms
        );
    }
    if outcome.player_hit {
        world.kill_player();
    }
}

/// Per-axis movement: an axis only translates when the whole sprite box
/// stays inside the playfield afterwards. Both axes applying in the same
/// frame is diagonal movement.
fn move_player(world: &mut World, input: &InputSnapshot) {
    let player = &mut world.player;
    let half = player.size / 2.0;

    if input.left && player.pos.x - player.speed >= half {
        player.pos.x -= player.speed;
    }
    if input.right && player.pos.x + player.speed <= CANVAS_WIDTH - half {
        player.pos.x += player.speed;
    }
    if input.up && player.pos.y - player.speed >= half {
        player.pos.y -= player.speed;
    }
    if input.down && player.pos.y + player.speed <= CANVAS_HEIGHT - half {
        player.pos.y += player.speed;
    }
}

/// Append a projectile at the player's position whenever the fire interval
/// has elapsed on the game-time clock.
fn auto_fire(world: &mut World, now_ms: f64) {
    if now_ms - world.clock.last_fire_ms > world.difficulty.fire_interval_ms {
        world.projectiles.push(Projectile::at(world.player.pos));
        world.clock.last_fire_ms = now_ms;
    }
}

fn advance_projectiles(projectiles: &mut Vec<Projectile>) {
    for shot in projectiles.iter_mut() {
        shot.pos.y -= PROJECTILE_SPEED;
    }
    projectiles.retain(|shot| shot.pos.y > 0.0);
}

/// Spawn one enemy at a uniformly random x just above the visible area when
/// the spawn interval has elapsed. The only random draw in the simulation.
fn spawn_enemy(world: &mut World, now_ms: f64) {
    if now_ms - world.clock.last_spawn_ms > world.difficulty.spawn_interval_ms {
        let x = world.rng.random_range(0.0..CANVAS_WIDTH - ENEMY_SIZE);
        world.enemies.push(Enemy::at_top(x));
        world.clock.last_spawn_ms = now_ms;
    }
}

fn advance_enemies(enemies: &mut Vec<Enemy>) {
    for enemy in enemies.iter_mut() {
        enemy.pos.y += ENEMY_SPEED;
    }
    enemies.retain(|enemy| enemy.pos.y < CANVAS_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const FRAME: f64 = FRAME_INTERVAL_MS;

    fn running_world() -> World {
        let mut world = World::new(12345);
        world.start(0.0);
        world
    }

    /// Run `frames` steps at the nominal 60 Hz spacing with fixed input
    fn run_frames(world: &mut World, input: InputSnapshot, frames: u32) {
        for i in 1..=frames {
            step(world, &input, i as f64 * FRAME);
        }
    }

    #[test]
    fn test_left_ten_frames() {
        let mut world = running_world();
        assert_eq!(world.player.pos.x, 400.0);

        let input = InputSnapshot {
            left: true,
            ..Default::default()
        };
        run_frames(&mut world, input, 10);
        assert_eq!(world.player.pos.x, 370.0);
    }

    #[test]
    fn test_player_clamped_at_left_edge() {
        let mut world = running_world();
        let input = InputSnapshot {
            left: true,
            ..Default::default()
        };
        // More than enough frames to reach the edge
        run_frames(&mut world, input, 300);
        let half = world.player.size / 2.0;
        assert!(world.player.pos.x >= half);
        assert!(world.player.pos.x < half + world.player.speed);
    }

    #[test]
    fn test_diagonal_is_both_axes() {
        let mut world = running_world();
        let input = InputSnapshot {
            left: true,
            up: true,
            ..Default::default()
        };
        step(&mut world, &input, FRAME);
        assert_eq!(world.player.pos, Vec2::new(397.0, 547.0));
    }

    #[test]
    fn test_auto_fire_after_interval() {
        let mut world = running_world();
        let input = InputSnapshot::default();

        // At base interval 500ms nothing fires for the first 500ms
        step(&mut world, &input, 400.0);
        assert!(world.projectiles.is_empty());

        step(&mut world, &input, 501.0);
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.clock.last_fire_ms, 501.0);

        // Interval restarts from the fire timestamp
        step(&mut world, &input, 900.0);
        assert_eq!(world.projectiles.len(), 1);
        step(&mut world, &input, 1002.0);
        assert_eq!(world.projectiles.len(), 2);
    }

    #[test]
    fn test_projectiles_move_up_and_prune() {
        let mut world = running_world();
        world
            .projectiles
            .push(Projectile::at(Vec2::new(100.0, 12.0)));
        let input = InputSnapshot::default();

        step(&mut world, &input, 1.0);
        assert_eq!(world.projectiles[0].pos.y, 7.0);
        step(&mut world, &input, 2.0);
        assert_eq!(world.projectiles[0].pos.y, 2.0);
        // y hits -3 <= 0: pruned
        step(&mut world, &input, 3.0);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_enemy_spawn_timing_and_bounds() {
        let mut world = running_world();
        let input = InputSnapshot::default();

        step(&mut world, &input, 999.0);
        assert!(world.enemies.is_empty());
        step(&mut world, &input, 1001.0);
        assert_eq!(world.enemies.len(), 1);

        let enemy = &world.enemies[0];
        assert!(enemy.pos.x >= 0.0);
        assert!(enemy.pos.x < CANVAS_WIDTH - ENEMY_SIZE);
        // Spawned just above the visible area, then advanced one frame
        assert_eq!(enemy.pos.y, -ENEMY_SIZE + ENEMY_SPEED);
    }

    #[test]
    fn test_enemy_pruned_at_bottom() {
        let mut world = running_world();
        world.enemies.push(Enemy {
            pos: Vec2::new(100.0, CANVAS_HEIGHT - 1.0),
            size: ENEMY_SIZE,
        });
        let input = InputSnapshot::default();
        step(&mut world, &input, 1.0);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_spawn_interval_after_three_seconds() {
        let mut world = running_world();
        let input = InputSnapshot::default();
        step(&mut world, &input, 3000.0);
        assert_eq!(world.difficulty.spawn_interval_ms, 512.0);
        assert_eq!(world.clock.elapsed_seconds, 3);
    }

    #[test]
    fn test_kill_scores_and_retunes_fire() {
        let mut world = running_world();
        world.enemies.push(Enemy {
            pos: Vec2::new(100.0, 100.0),
            size: ENEMY_SIZE,
        });
        // Positioned so that after this frame's motion it overlaps the enemy
        world
            .projectiles
            .push(Projectile::at(Vec2::new(105.0, 110.0 + PROJECTILE_SPEED - ENEMY_SPEED)));
        let input = InputSnapshot::default();

        step(&mut world, &input, 1.0);
        assert_eq!(world.player.score, 1);
        assert!(world.enemies.is_empty());
        assert!(world.projectiles.is_empty());
        assert_eq!(world.difficulty.fire_interval_ms, 500.0 * 0.97);
    }

    #[test]
    fn test_enemy_reaching_player_ends_run() {
        let mut world = running_world();
        world.enemies.push(Enemy {
            pos: Vec2::new(world.player.pos.x, world.player.pos.y - ENEMY_SPEED),
            size: ENEMY_SIZE,
        });
        let input = InputSnapshot::default();

        step(&mut world, &input, 1.0);
        assert!(world.player.is_dead);
        assert_eq!(world.run_state, RunState::Over);

        // Further steps are ignored
        let before = world.clock.elapsed_seconds;
        step(&mut world, &input, 10_000.0);
        assert_eq!(world.clock.elapsed_seconds, before);
    }

    #[test]
    fn test_kill_resolved_before_death_same_frame_scores() {
        let mut world = running_world();
        // Enemy far from the player sitting on a projectile, resolved first
        world.enemies.push(Enemy {
            pos: Vec2::new(100.0, 100.0),
            size: ENEMY_SIZE,
        });
        world
            .projectiles
            .push(Projectile::at(Vec2::new(105.0, 110.0 + PROJECTILE_SPEED - ENEMY_SPEED)));
        // Second enemy reaches the player this same frame
        world.enemies.push(Enemy {
            pos: Vec2::new(world.player.pos.x, world.player.pos.y - ENEMY_SPEED),
            size: ENEMY_SIZE,
        });
        let input = InputSnapshot::default();

        step(&mut world, &input, 1.0);
        // The run ends, but the kill that resolved first still scored
        assert!(world.player.is_dead);
        assert_eq!(world.run_state, RunState::Over);
        assert_eq!(world.player.score, 1);
        assert!(world.projectiles.is_empty());
        // Only the lethal enemy remains
        assert_eq!(world.enemies.len(), 1);
    }

    #[test]
    fn test_paused_world_does_not_advance() {
        let mut world = running_world();
        world.toggle_pause();
        let input = InputSnapshot {
            left: true,
            ..Default::default()
        };
        step(&mut world, &input, 5000.0);
        assert_eq!(world.player.pos.x, 400.0);
        assert!(world.projectiles.is_empty());
        assert_eq!(world.clock.elapsed_seconds, 0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = World::new(99);
        let mut b = World::new(99);
        a.start(0.0);
        b.start(0.0);
        let input = InputSnapshot {
            right: true,
            ..Default::default()
        };
        for i in 1..=600 {
            let now = i as f64 * FRAME;
            step(&mut a, &input, now);
            step(&mut b, &input, now);
        }
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
        }
    }

    proptest! {
        /// The player box never leaves the playfield under any key mashing
        #[test]
        fn prop_player_stays_in_bounds(keys in prop::collection::vec(0u8..16, 1..400)) {
            let mut world = running_world();
            for (i, bits) in keys.iter().enumerate() {
                let input = InputSnapshot {
                    up: bits & 1 != 0,
                    down: bits & 2 != 0,
                    left: bits & 4 != 0,
                    right: bits & 8 != 0,
                };
                step(&mut world, &input, (i as f64 + 1.0) * FRAME);
                if world.run_state != RunState::Running {
                    break;
                }
                let half = world.player.size / 2.0;
                let pos = world.player.pos;
                prop_assert!(pos.x >= half && pos.x <= CANVAS_WIDTH - half);
                prop_assert!(pos.y >= half && pos.y <= CANVAS_HEIGHT - half);
            }
        }

        /// Intervals respect the floor whatever the driver clock does
        #[test]
        fn prop_intervals_respect_floor(jumps in prop::collection::vec(1.0f64..20_000.0, 1..60)) {
            let mut world = running_world();
            let input = InputSnapshot::default();
            let mut now = 0.0;
            for jump in jumps {
                now += jump;
                step(&mut world, &input, now);
                prop_assert!(world.difficulty.spawn_interval_ms >= INTERVAL_FLOOR_MS);
                prop_assert!(world.difficulty.fire_interval_ms >= INTERVAL_FLOOR_MS);
                if world.run_state != RunState::Running {
                    break;
                }
            }
        }
    }
}
