//! Canvas2D rendering module
//!
//! Read-only view of the game state. Draws particles, food and snake each frame.

pub mod canvas;

pub use canvas::CanvasRenderer;

/// Snake body and head glow
pub const COLOR_PRIMARY: &str = "#00ff88";
/// Food and food bursts
pub const COLOR_SECONDARY: &str = "#00d4ff";
/// Death bursts
pub const COLOR_DANGER: &str = "#ff0055";
/// Snake head fill
pub const COLOR_HEAD: &str = "#fff";
