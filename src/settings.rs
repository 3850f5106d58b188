//! Presentation preferences
//!
//! Settings only steer the render/UI layer; the simulation never reads them.
//! Loaded from an optional JSON file, falling back to defaults on any
//! failure rather than surfacing an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Render/UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw sprites; when false (or while assets are missing) the renderer
    /// falls back to solid-color rectangles
    pub sprites_enabled: bool,
    /// Score/time HUD overlay
    pub show_hud: bool,
    /// FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sprites_enabled: true,
            show_hud: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Load from a JSON file; any read or parse failure falls back to the
    /// defaults with a log line.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("bad settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
