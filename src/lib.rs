//! Skyfall - a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, difficulty)
//! - `driver`: Frame scheduling and collaborator contracts (input, render sink)
//! - `assets`: Readiness gate for sprite loading
//! - `session`: In-memory run records for one process session
//! - `settings`: Presentation preferences

pub mod assets;
pub mod driver;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player sprite size - position is the sprite center
    pub const PLAYER_SIZE: f32 = 60.0;
    /// Player speed, pixels per frame, per axis
    pub const PLAYER_SPEED: f32 = 3.0;
    /// Vertical spawn offset from the bottom edge
    pub const PLAYER_START_OFFSET_Y: f32 = 50.0;

    /// Projectile defaults - moves up-screen
    pub const PROJECTILE_SIZE: f32 = 8.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy defaults - moves down-screen
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Baseline fire interval (ms) before any kills
    pub const BASE_FIRE_INTERVAL_MS: f64 = 500.0;
    /// Baseline enemy spawn interval (ms) at second zero
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Hard floor for both intervals (ms)
    pub const INTERVAL_FLOOR_MS: f64 = 100.0;
    /// Spawn interval decay factor, applied per whole elapsed second
    pub const SPAWN_DECAY: f64 = 0.8;
    /// Fire interval decay factor, applied per score point
    pub const FIRE_DECAY: f64 = 0.97;

    /// Hitbox size used when an entity carries no explicit size
    pub const DEFAULT_HITBOX_SIZE: f32 = 4.0;

    /// Nominal frame spacing for a 60 Hz driver (ms)
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;
}

/// Whole seconds elapsed between two monotonic millisecond timestamps
#[inline]
pub fn whole_seconds(start_ms: f64, now_ms: f64) -> u64 {
    ((now_ms - start_ms) / 1000.0).floor().max(0.0) as u64
}
