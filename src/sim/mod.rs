//! Grid simulation module
//!
//! All gameplay logic lives here:
//! - Discrete steps only, driven by an external clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod input;
pub mod particles;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction, GridDimensions};
pub use input::InputBuffer;
pub use particles::{ColorTag, Particle, advance_particles, spawn_burst};
pub use state::{DeathCause, GameEvent, GamePhase, GameState};
pub use tick::tick;
