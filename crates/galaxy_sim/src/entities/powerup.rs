//! Collectible power-ups

use std::fmt;

use serde::{Serialize, Deserialize};

use super::{Entity, EntityCore, EntityKind, FrameContext, PlayerShip};
use crate::core::config::PowerUpConfig;
use crate::foundation::math::Vec3;

/// What a power-up does when collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerType {
    /// Restore health
    Health,
    /// Refuel; handled by the session's fuel tank
    Fuel,
    /// Raise the fire rate
    Weapon,
    /// Temporary invulnerability
    Shield,
}

impl PowerType {
    /// Every power-up type, in spawn-table order
    pub const ALL: [PowerType; 4] = [
        PowerType::Health,
        PowerType::Fuel,
        PowerType::Weapon,
        PowerType::Shield,
    ];

    /// Apply the effect to the player.
    ///
    /// Fuel is tracked outside the world, so it has no effect on the ship.
    pub fn apply(self, player: &mut PlayerShip, config: &PowerUpConfig) {
        match self {
            PowerType::Health => player.heal(config.health_restore),
            PowerType::Fuel => {}
            PowerType::Weapon => player.boost_weapon_rate(config.weapon_rate_multiplier),
            PowerType::Shield => player.set_invulnerable(config.shield_duration),
        }
    }
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PowerType::Health => "health",
            PowerType::Fuel => "fuel",
            PowerType::Weapon => "weapon",
            PowerType::Shield => "shield",
        })
    }
}

/// A slowly spinning pickup
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    core: EntityCore,
    power_type: PowerType,
    spin_speed: f32,
}

impl PowerUp {
    /// Create a pickup with the stock spin
    pub fn new(position: Vec3, power_type: PowerType) -> Self {
        Self::from_config(position, power_type, &PowerUpConfig::default())
    }

    /// Create a pickup from configuration
    pub fn from_config(position: Vec3, power_type: PowerType, config: &PowerUpConfig) -> Self {
        Self {
            core: EntityCore::new(position, 1),
            power_type,
            spin_speed: config.spin_speed,
        }
    }

    /// Effect granted on pickup
    pub fn power_type(&self) -> PowerType {
        self.power_type
    }
}

impl Entity for PowerUp {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn kind(&self) -> EntityKind {
        EntityKind::PowerUp
    }

    fn update(&mut self, delta_time: f32, _context: &FrameContext) {
        self.core.integrate(delta_time);
        self.core.rotation.y += self.spin_speed * delta_time;
    }
}
