//! Asset readiness gate
//!
//! Sprite loading happens in the platform layer, asynchronously and outside
//! the simulation. The gate only tracks which expected assets have finished
//! loading; the driver refuses to start a session until all of them have.
//! The sim core never consults it.

use serde::{Deserialize, Serialize};

/// The sprites the presentation layer wants before a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKey {
    Player,
    Enemy,
    Projectile,
    Background,
}

/// Tracks expected vs completed asset loads
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    expected: Vec<AssetKey>,
    loaded: Vec<AssetKey>,
}

impl AssetGate {
    /// Gate over the standard sprite set
    pub fn for_sprites() -> Self {
        Self {
            expected: vec![
                AssetKey::Player,
                AssetKey::Enemy,
                AssetKey::Projectile,
                AssetKey::Background,
            ],
            loaded: Vec::new(),
        }
    }

    /// Gate that is ready immediately (headless runs, solid-color fallback)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record one finished load. Duplicate and unexpected keys are ignored.
    pub fn mark_loaded(&mut self, key: AssetKey) {
        if self.expected.contains(&key) && !self.loaded.contains(&key) {
            self.loaded.push(key);
            log::info!(
                "asset {:?} loaded ({}/{})",
                key,
                self.loaded.len(),
                self.expected.len()
            );
        }
    }

    /// Mark every expected asset loaded at once
    pub fn mark_all_loaded(&mut self) {
        for key in self.expected.clone() {
            self.mark_loaded(key);
        }
    }

    /// True once every expected asset finished loading
    pub fn all_ready(&self) -> bool {
        self.loaded.len() == self.expected.len()
    }

    /// Number of loads still outstanding
    pub fn pending(&self) -> usize {
        self.expected.len() - self.loaded.len()
    }
}
