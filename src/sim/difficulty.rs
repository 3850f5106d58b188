//! Difficulty scheduler
//!
//! Derives the active spawn and fire intervals from elapsed session time and
//! score. Both curves are exponential decays clamped to a shared floor:
//! enemies spawn faster as the run goes on, the auto-fire speeds up with
//! every kill. Pure over (elapsed, score) - no other state is touched.

use serde::{Deserialize, Serialize};

use super::state::Clock;
use crate::consts::*;
use crate::whole_seconds;

/// Spawn interval after `secs` whole elapsed seconds:
/// `max(floor, base * 0.8^secs)`
#[inline]
pub fn spawn_interval_for(secs: u64) -> f64 {
    (BASE_SPAWN_INTERVAL_MS * SPAWN_DECAY.powi(secs.min(i32::MAX as u64) as i32))
        .max(INTERVAL_FLOOR_MS)
}

/// Fire interval at `score` kills: `max(floor, base * 0.97^score)`
#[inline]
pub fn fire_interval_for(score: u32) -> f64 {
    (BASE_FIRE_INTERVAL_MS * FIRE_DECAY.powi(score.min(i32::MAX as u32) as i32))
        .max(INTERVAL_FLOOR_MS)
}

/// Active interval pair for the next frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    pub fire_interval_ms: f64,
    pub spawn_interval_ms: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            fire_interval_ms: BASE_FIRE_INTERVAL_MS,
            spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
        }
    }
}

impl Difficulty {
    /// Recompute the spawn interval at most once per whole-second boundary.
    /// The bucket comparison makes this run exactly once per crossed second
    /// no matter how many sub-frame calls land inside it.
    pub fn retune_spawn(&mut self, clock: &mut Clock, now_ms: f64) {
        let current_second = whole_seconds(clock.start_ms, now_ms);
        if current_second > clock.last_retune_second {
            self.spawn_interval_ms = spawn_interval_for(current_second);
            clock.last_retune_second = current_second;
            log::debug!(
                "spawn interval retuned to {:.0}ms at {}s",
                self.spawn_interval_ms,
                current_second
            );
        }
    }

    /// Recompute the fire interval from the current score. Called whenever
    /// the score changed this frame.
    pub fn retune_fire(&mut self, score: u32) {
        self.fire_interval_ms = fire_interval_for(score);
    }
}
