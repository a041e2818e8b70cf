//! Projectiles fired by the player and by enemies

use serde::{Serialize, Deserialize};

use super::{Entity, EntityCore, EntityKind, FrameContext};
use crate::core::config::ProjectileConfig;
use crate::foundation::math::{utils::tick_down, Vec3, Vec3Ext};

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectileOwner {
    /// Player shot, hits enemies
    Player,
    /// Enemy shot, hits the player
    Enemy,
}

/// A straight-line shot with a limited lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    core: EntityCore,
    direction: Vec3,
    speed: f32,
    owner: ProjectileOwner,
    damage: i32,
    lifetime: f32,
}

impl Projectile {
    /// Create a shot with the stock speed, damage and lifetime
    pub fn new(position: Vec3, direction: Vec3, owner: ProjectileOwner) -> Self {
        Self::from_config(position, direction, owner, &ProjectileConfig::default())
    }

    /// Create a shot from configuration. The direction is normalized.
    pub fn from_config(
        position: Vec3,
        direction: Vec3,
        owner: ProjectileOwner,
        config: &ProjectileConfig,
    ) -> Self {
        let direction = direction.normalize_or_zero();
        let mut core = EntityCore::new(position, 1);
        core.velocity = direction * config.speed;
        Self {
            core,
            direction,
            speed: config.speed,
            owner,
            damage: match owner {
                ProjectileOwner::Player => config.player_damage,
                ProjectileOwner::Enemy => config.enemy_damage,
            },
            lifetime: config.lifetime,
        }
    }

    /// Unit travel direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Travel speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Who fired the shot
    pub fn owner(&self) -> ProjectileOwner {
        self.owner
    }

    /// Damage dealt on impact
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Seconds left before the shot expires
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Whether the shot has travelled beyond `max_abs_z` along the lane
    pub fn is_out_of_lane(&self, max_abs_z: f32) -> bool {
        self.core.position.z.abs() > max_abs_z
    }
}

impl Entity for Projectile {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Projectile
    }

    fn update(&mut self, delta_time: f32, _context: &FrameContext) {
        if !self.core.is_alive() {
            return;
        }
        self.core.integrate(delta_time);
        self.lifetime = tick_down(self.lifetime, delta_time);
        if self.lifetime <= 0.0 {
            self.core.expire();
        }
    }
}
