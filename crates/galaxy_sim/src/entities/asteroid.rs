//! Asteroids

use super::{Entity, EntityCore, EntityKind, FrameContext};
use crate::foundation::math::Vec3;

/// Health granted per unit of asteroid size in the stock tuning
pub const HEALTH_PER_SIZE: f32 = 20.0;

/// A tumbling asteroid
///
/// Its size doubles as the collision radius and the visual scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    core: EntityCore,
    size: f32,
    rotation_velocity: Vec3,
}

impl Asteroid {
    /// Create a motionless asteroid with the stock health per size
    pub fn new(position: Vec3, size: f32) -> Self {
        Self::with_health_per_size(position, size, HEALTH_PER_SIZE)
    }

    /// Create a motionless asteroid; health is `floor(size * health_per_size)`,
    /// at least 1
    pub fn with_health_per_size(position: Vec3, size: f32, health_per_size: f32) -> Self {
        let health = ((size * health_per_size).floor() as i32).max(1);
        let mut core = EntityCore::new(position, health);
        core.scale = Vec3::new(size, size, size);
        Self {
            core,
            size,
            rotation_velocity: Vec3::zeros(),
        }
    }

    /// Set the per-axis spin in radians per second
    pub fn with_spin(mut self, rotation_velocity: Vec3) -> Self {
        self.rotation_velocity = rotation_velocity;
        self
    }

    /// Set the drift velocity
    pub fn with_drift(mut self, velocity: Vec3) -> Self {
        self.core.velocity = velocity;
        self
    }

    /// Size, also the collision radius
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Per-axis spin in radians per second
    pub fn rotation_velocity(&self) -> Vec3 {
        self.rotation_velocity
    }
}

impl Entity for Asteroid {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Asteroid
    }

    fn update(&mut self, delta_time: f32, _context: &FrameContext) {
        if !self.core.is_alive() {
            return;
        }
        self.core.integrate(delta_time);
        self.core.rotation += self.rotation_velocity * delta_time;
    }

    fn collision_radius(&self) -> f32 {
        self.size
    }
}
