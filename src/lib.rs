//! Neon Snake - A grid Snake game for the browser canvas
//!
//! Core modules:
//! - `sim`: Grid simulation (movement, collisions, food, particles, game state)
//! - `controller`: Start/tick/input orchestration around the simulation
//! - `clock`: Cancellable repeating timer driving `tick()`
//! - `persistence`: Key-value storage seam (LocalStorage on web)
//! - `highscore`: Best score tracking
//! - `platform`: Keyboard/touch translation into game commands
//! - `renderer`: Canvas2D rendering (web only)

pub mod clock;
pub mod controller;
pub mod highscore;
pub mod persistence;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::Game;
pub use highscore::BestScore;
pub use settings::Settings;

use glam::Vec2;

use sim::Cell;

/// Game configuration constants
pub mod consts {
    /// Default tick period in milliseconds
    pub const TICK_MS: u32 = 100;
    /// Fastest tick period accepted from settings
    pub const MIN_TICK_MS: u32 = 16;

    /// Size of one grid square in pixels
    pub const TILE_SIZE: f32 = 20.0;
    /// Space left around the canvas when fitting it to the window
    pub const VIEWPORT_MARGIN: f32 = 40.0;
    /// Smallest playfield along either axis
    pub const MIN_TILES: i32 = 10;

    /// Starting snake length
    pub const START_LENGTH: usize = 3;
    /// Points per food eaten
    pub const FOOD_REWARD: u64 = 10;

    /// Particles per burst
    pub const BURST_COUNT: usize = 10;
    /// Max absolute particle speed per axis (pixels/tick)
    pub const BURST_SPEED: f32 = 2.5;
    /// Particle life lost per tick
    pub const PARTICLE_DECAY: f32 = 0.05;

    /// Random draws before food placement falls back to scanning free cells
    pub const FOOD_ATTEMPTS: u32 = 64;

    /// Storage keys
    pub const BEST_SCORE_KEY: &str = "neon-snake-high-score";
    pub const SETTINGS_KEY: &str = "neon-snake-settings";
}

/// Pixel-space center of a grid cell
#[inline]
pub fn cell_center(cell: Cell, tile_size: f32) -> Vec2 {
    Vec2::new(
        cell.x as f32 * tile_size + tile_size / 2.0,
        cell.y as f32 * tile_size + tile_size / 2.0,
    )
}
