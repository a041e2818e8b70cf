//! Particle effects
//!
//! Explosion bursts and engine trails. Particles carry no collision and no
//! identity; the system only moves them and ages them out. The live count is
//! capped so a chain of explosions cannot grow the pool without bound.

use crate::foundation::math::Vec3;
use crate::foundation::random::GameRng;

/// Default cap on live particles
pub const DEFAULT_MAX_PARTICLES: usize = 500;

const EXPLOSION_MAX_LIFE: f32 = 2.0;
const TRAIL_MAX_LIFE: f32 = 1.0;
const TRAIL_COLOR: [f32; 3] = [0.2, 0.8, 1.0];

/// A single visual particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Lane position
    pub position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec3,
    /// Seconds left to live
    pub life: f32,
    /// Lifetime used to fade the particle
    pub max_life: f32,
    /// Render size
    pub size: f32,
    /// RGB color
    pub color: [f32; 3],
}

impl Particle {
    /// Whether the particle still has time left
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Fade factor in `[0, 1]`
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Owner of every live particle in the world
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl ParticleSystem {
    /// Create an empty system holding at most `max_particles`
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles.min(DEFAULT_MAX_PARTICLES)),
            max_particles,
        }
    }

    /// Emit a burst of `count` sparks at `position`.
    ///
    /// The burst is truncated when the pool is full.
    pub fn create_explosion(&mut self, position: Vec3, count: usize, rng: &mut GameRng) {
        let count = count.min(self.free_slots());
        for _ in 0..count {
            let particle = Particle {
                position,
                velocity: rng.vec3((-2.0, 2.0), (-2.0, 2.0), (-1.0, 1.0)),
                life: rng.range(0.5, EXPLOSION_MAX_LIFE),
                max_life: EXPLOSION_MAX_LIFE,
                size: rng.range(0.1, 0.3),
                color: [rng.range(0.8, 1.0), rng.range(0.3, 0.6), rng.range(0.0, 0.2)],
            };
            self.particles.push(particle);
        }
    }

    /// Emit one trail particle drifting back against `velocity`
    pub fn create_engine_trail(&mut self, position: Vec3, velocity: Vec3, rng: &mut GameRng) {
        if self.free_slots() == 0 {
            return;
        }
        self.particles.push(Particle {
            position,
            velocity: velocity * -0.5 + rng.symmetric_vec3(0.1),
            life: rng.range(0.3, TRAIL_MAX_LIFE),
            max_life: TRAIL_MAX_LIFE,
            size: rng.range(0.05, 0.15),
            color: TRAIL_COLOR,
        });
    }

    /// Move and age every particle, then drop the expired ones
    pub fn update(&mut self, delta_time: f32) {
        for particle in &mut self.particles {
            particle.position += particle.velocity * delta_time;
            particle.life -= delta_time;
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Live particles, oldest first
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether there are no live particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Maximum number of live particles
    pub fn capacity(&self) -> usize {
        self.max_particles
    }

    /// Remove every particle
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn free_slots(&self) -> usize {
        self.max_particles.saturating_sub(self.particles.len())
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PARTICLES)
    }
}
