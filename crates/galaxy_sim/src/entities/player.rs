//! Player ship

use super::{Entity, EntityCore, EntityKind, FrameContext, Projectile, ProjectileOwner};
use crate::core::config::{PlayerConfig, ProjectileConfig};
use crate::foundation::math::{utils::tick_down, Vec3, Vec3Ext};

/// The player-controlled ship
///
/// Movement is a direct velocity assignment rather than a force model, and a
/// hit grants a short invulnerability window during which all damage is
/// ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerShip {
    core: EntityCore,
    speed: f32,
    rotation_speed: f32,
    weapon_cooldown: f32,
    weapon_rate: f32,
    max_weapon_rate: f32,
    invulnerable: f32,
    hit_invulnerability: f32,
    muzzle_offset: Vec3,
    forward: Vec3,
    projectile: ProjectileConfig,
}

impl PlayerShip {
    /// Create a ship with the stock tuning
    pub fn new() -> Self {
        Self::from_config(&PlayerConfig::default(), &ProjectileConfig::default())
    }

    /// Create a ship from configuration
    pub fn from_config(config: &PlayerConfig, projectile: &ProjectileConfig) -> Self {
        Self {
            core: EntityCore::new(Vec3::from(config.spawn_position), config.health),
            speed: config.speed,
            rotation_speed: config.rotation_speed,
            weapon_cooldown: 0.0,
            weapon_rate: config.weapon_rate,
            max_weapon_rate: config.max_weapon_rate,
            invulnerable: 0.0,
            hit_invulnerability: config.hit_invulnerability,
            muzzle_offset: Vec3::from(config.muzzle_offset),
            forward: Vec3::from(config.forward).normalize_or_zero(),
            projectile: projectile.clone(),
        }
    }

    /// Set velocity toward `direction` at full speed.
    ///
    /// A zero direction stops the ship.
    pub fn move_in(&mut self, direction: Vec3, _delta_time: f32) {
        self.core.velocity = direction.normalize_or_zero() * self.speed;
    }

    /// Add `delta_rotation * rotation_speed * dt` to the rotation, per axis
    pub fn rotate(&mut self, delta_rotation: Vec3, delta_time: f32) {
        self.core.rotation += delta_rotation * self.rotation_speed * delta_time;
    }

    /// Whether the weapon has cooled down
    pub fn can_shoot(&self) -> bool {
        self.weapon_cooldown <= 0.0
    }

    /// Fire a forward shot if the weapon is ready
    pub fn shoot(&mut self) -> Option<Projectile> {
        if !self.can_shoot() {
            return None;
        }
        self.weapon_cooldown = 1.0 / self.weapon_rate;
        Some(Projectile::from_config(
            self.core.position + self.muzzle_offset,
            self.forward,
            ProjectileOwner::Player,
            &self.projectile,
        ))
    }

    /// Multiply the fire rate, never exceeding the configured cap
    pub fn boost_weapon_rate(&mut self, multiplier: f32) {
        self.weapon_rate = (self.weapon_rate * multiplier).min(self.max_weapon_rate);
    }

    /// Restore health up to the maximum
    pub fn heal(&mut self, amount: i32) {
        self.core.heal(amount);
    }

    /// Overwrite the remaining invulnerability
    pub fn set_invulnerable(&mut self, seconds: f32) {
        self.invulnerable = seconds.max(0.0);
    }

    /// Overwrite the weapon cooldown
    pub fn set_weapon_cooldown(&mut self, seconds: f32) {
        self.weapon_cooldown = seconds.max(0.0);
    }

    /// Movement speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Rotation speed multiplier
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Seconds until the next shot is allowed
    pub fn weapon_cooldown(&self) -> f32 {
        self.weapon_cooldown
    }

    /// Shots per second
    pub fn weapon_rate(&self) -> f32 {
        self.weapon_rate
    }

    /// Seconds of damage immunity left
    pub fn invulnerable(&self) -> f32 {
        self.invulnerable
    }

    /// Whether damage is currently ignored
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0.0
    }
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for PlayerShip {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn update(&mut self, delta_time: f32, _context: &FrameContext) {
        if !self.core.is_alive() {
            return;
        }
        self.core.integrate(delta_time);
        self.weapon_cooldown = tick_down(self.weapon_cooldown, delta_time);
        self.invulnerable = tick_down(self.invulnerable, delta_time);
    }

    fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_invulnerable() || !self.core.is_alive() {
            return false;
        }
        if self.core.apply_damage(amount) {
            self.on_death();
        }
        self.invulnerable = self.hit_invulnerability;
        true
    }

    fn on_death(&mut self) {
        log::debug!("Player ship destroyed at {:?}", self.core.position);
    }
}
