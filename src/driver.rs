//! Frame scheduling and collaborator contracts
//!
//! The simulation core never schedules itself: an external driver calls
//! [`FrameDriver::tick`] roughly 60 times per second with the frame delta.
//! The driver keeps a game-time clock that only advances while the world is
//! running, so fire/spawn timing is independent of how long a pause lasts.
//!
//! Collaborators plug in at two seams: an [`InputProvider`] supplies the
//! current key-state snapshot once per step, and a [`RenderSink`] receives
//! the read-only post-step frame. Neither can mutate the world.

use crate::assets::AssetGate;
use crate::consts::*;
use crate::sim::{Frame, InputSnapshot, RunState, World, step};

/// Supplies the current key state, sampled once per step. The provider owns
/// raw event capture and debouncing.
pub trait InputProvider {
    fn sample(&self) -> InputSnapshot;
}

/// Consumes the post-step world snapshot and draws it. Presentation details
/// (sprites vs solid-color fallback) live entirely behind this trait.
pub trait RenderSink {
    fn present(&mut self, frame: &Frame<'_>);
}

/// Plain mutable key state for platform layers that set booleans from raw
/// key events.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub snapshot: InputSnapshot,
}

impl InputProvider for KeyState {
    fn sample(&self) -> InputSnapshot {
        self.snapshot
    }
}

/// Owns the world and the game-time clock; exposes the three lifecycle
/// triggers that make up the entire external control surface.
#[derive(Debug)]
pub struct FrameDriver {
    world: World,
    game_time_ms: f64,
}

impl FrameDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            world: World::new(seed),
            game_time_ms: 0.0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn run_state(&self) -> RunState {
        self.world.run_state
    }

    /// `NotStarted -> Running`. Refused while assets are still loading; the
    /// sim core itself never sees asset readiness.
    pub fn start(&mut self, assets: &AssetGate) {
        if !assets.all_ready() {
            log::warn!("start refused: {} asset(s) still loading", assets.pending());
            return;
        }
        self.world.start(self.game_time_ms);
    }

    /// `Running <-> Paused`. Pausing simply makes `tick` decline to step;
    /// no in-flight state is touched.
    pub fn toggle_pause(&mut self) {
        self.world.toggle_pause();
    }

    /// `Over -> Running` with a wholesale world reset
    pub fn restart(&mut self) {
        self.world.restart(self.game_time_ms);
    }

    /// Run one frame: advance game time by `dt_ms`, sample input, step, and
    /// hand the snapshot to the sink. Does nothing unless running.
    pub fn tick(&mut self, dt_ms: f64, input: &dyn InputProvider, sink: &mut dyn RenderSink) {
        if self.world.run_state != RunState::Running {
            return;
        }
        self.game_time_ms += dt_ms;
        let snapshot = input.sample();
        step(&mut self.world, &snapshot, self.game_time_ms);
        sink.present(&self.world.frame());
    }
}

/// Headless render sink: logs a one-line status once per second of frames.
/// Stands in for a real renderer in the demo binary and in tests.
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames_presented: u64,
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &Frame<'_>) {
        self.frames_presented += 1;
        if self.frames_presented % 60 == 0 {
            log::debug!(
                "t={}s score={} enemies={} shots={}",
                frame.elapsed_seconds,
                frame.score,
                frame.enemies.len(),
                frame.projectiles.len()
            );
        }
    }
}

/// Demo autopilot: sidesteps the most advanced threatening enemy, otherwise
/// drifts back toward the horizontal center. Fed the latest frame before
/// each tick.
#[derive(Debug, Default)]
pub struct DemoPilot {
    keys: InputSnapshot,
}

impl DemoPilot {
    /// Horizontal clearance at which an enemy counts as a threat
    const DODGE_MARGIN: f32 = 40.0;

    pub fn aim(&mut self, frame: &Frame<'_>) {
        let player_x = frame.player.pos.x;
        let half = frame.player.size / 2.0;

        // Most advanced enemy whose column overlaps the player's
        let threat = frame
            .enemies
            .iter()
            .filter(|e| {
                e.pos.x + e.size + Self::DODGE_MARGIN > player_x - half
                    && e.pos.x - Self::DODGE_MARGIN < player_x + half
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        self.keys = InputSnapshot::default();
        match threat {
            Some(enemy) => {
                // Step away from the threat's center of mass
                if enemy.pos.x + enemy.size / 2.0 > player_x {
                    self.keys.left = true;
                } else {
                    self.keys.right = true;
                }
            }
            None => {
                let center = CANVAS_WIDTH / 2.0;
                if player_x < center - PLAYER_SPEED {
                    self.keys.right = true;
                } else if player_x > center + PLAYER_SPEED {
                    self.keys.left = true;
                }
            }
        }
    }
}

impl InputProvider for DemoPilot {
    fn sample(&self) -> InputSnapshot {
        self.keys
    }
}
