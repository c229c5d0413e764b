//! Burst particle effects
//!
//! Purely visual. Particles live in pixel space and never affect gameplay.

use glam::Vec2;
use rand::Rng;

use crate::consts::{BURST_COUNT, BURST_SPEED, PARTICLE_DECAY};

/// Life at or below this counts as expired. Absorbs f32 drift so a full-life
/// particle expires on exactly its 20th tick.
const LIFE_EPSILON: f32 = 1e-4;

/// Palette slot for a particle, resolved to a colour by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    /// Food eaten
    Food,
    /// Snake died
    Danger,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 0-1, decreases each tick
    pub color: ColorTag,
}

impl Particle {
    /// Opacity for drawing
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Push `BURST_COUNT` fresh particles at `pos`, each with a random velocity
/// uniform in `[-BURST_SPEED, BURST_SPEED)` per axis.
pub fn spawn_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    pos: Vec2,
    color: ColorTag,
) {
    particles.reserve(BURST_COUNT);
    for _ in 0..BURST_COUNT {
        let vel = Vec2::new(
            rng.random_range(-BURST_SPEED..BURST_SPEED),
            rng.random_range(-BURST_SPEED..BURST_SPEED),
        );
        particles.push(Particle {
            pos,
            vel,
            life: 1.0,
            color,
        });
    }
}

/// Move every particle by its velocity, age it, and drop the expired ones
pub fn advance_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > LIFE_EPSILON);
}
