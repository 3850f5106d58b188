//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per driver callback, fed a monotonic timestamp
//! - Seeded RNG only (enemy spawn x is the single random draw)
//! - Stable iteration order (insertion order of the entity vectors)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod step;

pub use collision::{Aabb, CollisionOutcome, aabb_overlap, resolve_collisions};
pub use difficulty::{Difficulty, fire_interval_for, spawn_interval_for};
pub use state::{Clock, Enemy, Frame, Player, Projectile, RunState, World};
pub use step::{InputSnapshot, step};
