//! Game settings and preferences
//!
//! Persisted as JSON next to the best score.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{KeyValueStore, StorageError};
use crate::sim::GridDimensions;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between simulation ticks
    pub tick_ms: u32,
    /// Particle bursts on food and death
    pub particles: bool,
    /// Pixel size of one tile
    pub tile_size: f32,
    /// Pixels kept free around the canvas
    pub viewport_margin: f32,
    /// Smallest grid along either axis
    pub min_tiles: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            particles: true,
            tile_size: TILE_SIZE,
            viewport_margin: VIEWPORT_MARGIN,
            min_tiles: MIN_TILES,
        }
    }
}

impl Settings {
    /// Tick period, never faster than `MIN_TICK_MS`
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(MIN_TICK_MS) as u64)
    }

    /// Tile size, falling back to the default for nonsense values
    pub fn effective_tile_size(&self) -> f32 {
        if self.tile_size.is_finite() && self.tile_size >= 1.0 {
            self.tile_size
        } else {
            TILE_SIZE
        }
    }

    /// Grid that fits a viewport of the given pixel size
    pub fn grid_for_viewport(&self, width: f32, height: f32) -> GridDimensions {
        GridDimensions::from_viewport(
            width,
            height,
            self.effective_tile_size(),
            self.viewport_margin,
            self.min_tiles,
        )
    }

    /// Load settings, using defaults when missing or malformed
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(SETTINGS_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(self).map_err(|e| StorageError::Backend(e.to_string()))?;
        store.set(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
