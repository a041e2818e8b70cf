//! Spawning policy
//!
//! Decides *when* and *what* to spawn; the world decides how. Enemies and
//! power-ups arrive on fixed intervals at random lane positions. Asteroids
//! are not scheduled here since the world replaces each lost asteroid 1:1,
//! but their random placement lives here so both paths draw the same way.

use crate::core::config::{AsteroidConfig, SpawnRegion, SpawningConfig};
use crate::entities::{Asteroid, EnemyType, PowerType};
use crate::foundation::math::Vec3;
use crate::foundation::random::GameRng;
use crate::foundation::time::IntervalTimer;

/// Something the world should create this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRequest {
    /// A new enemy ship
    Enemy {
        /// Where it appears
        position: Vec3,
        /// Archetype
        enemy_type: EnemyType,
    },
    /// A new power-up
    PowerUp {
        /// Where it appears
        position: Vec3,
        /// Effect
        power_type: PowerType,
    },
}

/// Interval-driven enemy and power-up scheduler
#[derive(Debug, Clone)]
pub struct SpawnPolicy {
    config: SpawningConfig,
    enemy_timer: IntervalTimer,
    powerup_timer: IntervalTimer,
}

impl SpawnPolicy {
    /// Create a policy with both timers at zero
    pub fn new(config: SpawningConfig) -> Self {
        Self {
            enemy_timer: IntervalTimer::new(config.enemy_interval),
            powerup_timer: IntervalTimer::new(config.powerup_interval),
            config,
        }
    }

    /// Advance the timers and return what is due, enemies first
    pub fn tick(&mut self, delta_time: f32, rng: &mut GameRng) -> Vec<SpawnRequest> {
        let mut requests = Vec::new();

        for _ in 0..self.enemy_timer.tick(delta_time) {
            requests.push(SpawnRequest::Enemy {
                position: random_point(&self.config.enemy_region, rng),
                enemy_type: random_enemy_type(rng),
            });
        }
        for _ in 0..self.powerup_timer.tick(delta_time) {
            requests.push(SpawnRequest::PowerUp {
                position: random_point(&self.config.enemy_region, rng),
                power_type: random_power_type(rng),
            });
        }

        if !requests.is_empty() {
            log::trace!("Spawn policy due: {} request(s)", requests.len());
        }
        requests
    }

    /// Restart both intervals
    pub fn reset(&mut self) {
        self.enemy_timer.reset();
        self.powerup_timer.reset();
    }

    /// Current configuration
    pub fn config(&self) -> &SpawningConfig {
        &self.config
    }
}

/// Uniform point inside a spawn region
pub fn random_point(region: &SpawnRegion, rng: &mut GameRng) -> Vec3 {
    rng.vec3(region.x, region.y, region.z)
}

/// Uniform pick over the enemy archetypes
pub fn random_enemy_type(rng: &mut GameRng) -> EnemyType {
    rng.choose(&EnemyType::ALL).copied().unwrap_or(EnemyType::Fighter)
}

/// Uniform pick over the power-up types
pub fn random_power_type(rng: &mut GameRng) -> PowerType {
    rng.choose(&PowerType::ALL).copied().unwrap_or(PowerType::Health)
}

/// Build a drifting, spinning asteroid.
///
/// Missing position or size are drawn from the asteroid region and size range.
pub fn random_asteroid(
    position: Option<Vec3>,
    size: Option<f32>,
    region: &SpawnRegion,
    config: &AsteroidConfig,
    rng: &mut GameRng,
) -> Asteroid {
    let position = position.unwrap_or_else(|| random_point(region, rng));
    let size = size.unwrap_or_else(|| rng.in_range(config.size));
    let drift = rng.vec3(config.drift_lateral, config.drift_lateral, config.drift_forward);
    let spin = rng.vec3(config.spin, config.spin, config.spin);

    Asteroid::with_health_per_size(position, size, config.health_per_size)
        .with_drift(drift)
        .with_spin(spin)
}
