//! Game state and core simulation types
//!
//! One `World` owns all mutable state for a session. It is created on start,
//! mutated every frame by the stepper and collision resolver while running,
//! frozen while paused, and replaced wholesale on restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session-level lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// World exists but the clock has not started
    NotStarted,
    /// Active gameplay, one step per driver callback
    Running,
    /// Frozen - the driver stops scheduling steps
    Paused,
    /// Player died; only a restart leaves this state
    Over,
}

/// The player sprite. Position is the sprite center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Monotonically non-decreasing kill count
    pub score: u32,
    pub is_dead: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - PLAYER_START_OFFSET_Y),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            score: 0,
            is_dead: false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A fired projectile. Spawned at the player center, moves up-screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: f32,
}

impl Projectile {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            size: PROJECTILE_SIZE,
        }
    }
}

/// A descending enemy sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
}

impl Enemy {
    /// Spawn just above the visible area at the given x
    pub fn at_top(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, -ENEMY_SIZE),
            size: ENEMY_SIZE,
        }
    }
}

/// Session timers. All fields are monotonic game-time milliseconds supplied
/// by the driver; paused frames never advance them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clock {
    /// Session epoch (game-time ms at `start`)
    pub start_ms: f64,
    /// Derived whole-second display value
    pub elapsed_seconds: u64,
    pub last_fire_ms: f64,
    pub last_spawn_ms: f64,
    /// Whole-second bucket of the last spawn-interval retune
    pub last_retune_second: u64,
}

impl Clock {
    /// Reset the epoch and all timers to `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
        self.elapsed_seconds = 0;
        self.last_fire_ms = now_ms;
        self.last_spawn_ms = now_ms;
        self.last_retune_second = 0;
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed (enemy spawn x is the only random draw)
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    /// Insertion order = firing order
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub clock: Clock,
    pub difficulty: super::Difficulty,
    pub run_state: RunState,
}

impl World {
    /// Create a fresh world in `NotStarted`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            clock: Clock::default(),
            difficulty: super::Difficulty::default(),
            run_state: RunState::NotStarted,
        }
    }

    /// `NotStarted -> Running`, resetting the clock epoch
    pub fn start(&mut self, now_ms: f64) {
        if self.run_state != RunState::NotStarted {
            return;
        }
        self.clock.start(now_ms);
        self.run_state = RunState::Running;
        log::info!("session started (seed {})", self.seed);
    }

    /// `Running <-> Paused`. No-op in any other state.
    pub fn toggle_pause(&mut self) {
        self.run_state = match self.run_state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            other => other,
        };
    }

    /// `Over -> Running` via wholesale reset. The seed carries over so a
    /// restarted run replays the same spawn sequence.
    pub fn restart(&mut self, now_ms: f64) {
        if self.run_state != RunState::Over {
            return;
        }
        *self = World::new(self.seed);
        self.start(now_ms);
    }

    /// Mark the player dead and end the run. Keeps the
    /// `is_dead <=> run_state == Over` invariant in one place.
    pub fn kill_player(&mut self) {
        self.player.is_dead = true;
        self.run_state = RunState::Over;
        log::info!(
            "game over: score {} after {}s",
            self.player.score,
            self.clock.elapsed_seconds
        );
    }

    /// Read-only snapshot handed to the render sink once per step
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            player: &self.player,
            projectiles: &self.projectiles,
            enemies: &self.enemies,
            score: self.player.score,
            elapsed_seconds: self.clock.elapsed_seconds,
            run_state: self.run_state,
        }
    }
}

/// Post-step world snapshot. Everything the render/UI layer is allowed to see.
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    pub player: &'a Player,
    pub projectiles: &'a [Projectile],
    pub enemies: &'a [Enemy],
    pub score: u32,
    pub elapsed_seconds: u64,
    pub run_state: RunState,
}
