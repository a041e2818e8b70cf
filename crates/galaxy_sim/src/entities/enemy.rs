//! Enemy ships and their chase AI

use std::fmt;

use serde::{Serialize, Deserialize};

use super::{Entity, EntityCore, EntityKind, FrameContext, Projectile, ProjectileOwner};
use crate::core::config::{EnemyConfig, ProjectileConfig};
use crate::foundation::math::{utils::tick_down, Vec3, Vec3Ext};

/// Enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyType {
    /// Balanced: 50 hp, one shot per second
    Fighter,
    /// Tough and slow firing: 100 hp, one shot every two seconds
    Bomber,
    /// Fragile and fast firing: 30 hp, two shots per second
    Scout,
}

impl EnemyType {
    /// Every archetype, in spawn-table order
    pub const ALL: [EnemyType; 3] = [EnemyType::Fighter, EnemyType::Bomber, EnemyType::Scout];

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            EnemyType::Fighter => "fighter",
            EnemyType::Bomber => "bomber",
            EnemyType::Scout => "scout",
        }
    }
}

impl fmt::Display for EnemyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An enemy ship
///
/// Steering is purely reactive and recomputed every frame: inside detection
/// range the ship closes on the player until it reaches attack range, where it
/// holds position. Outside detection range the last velocity is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyShip {
    core: EntityCore,
    enemy_type: EnemyType,
    speed: f32,
    detection_range: f32,
    attack_range: f32,
    weapon_rate: f32,
    weapon_cooldown: f32,
    projectile: ProjectileConfig,
}

impl EnemyShip {
    /// Create an enemy with the stock tuning
    pub fn new(position: Vec3, enemy_type: EnemyType) -> Self {
        Self::from_config(
            position,
            enemy_type,
            &EnemyConfig::default(),
            &ProjectileConfig::default(),
        )
    }

    /// Create an enemy from configuration
    pub fn from_config(
        position: Vec3,
        enemy_type: EnemyType,
        config: &EnemyConfig,
        projectile: &ProjectileConfig,
    ) -> Self {
        let stats = config.stats(enemy_type);
        Self {
            core: EntityCore::new(position, stats.health),
            enemy_type,
            speed: config.speed,
            detection_range: config.detection_range,
            attack_range: config.attack_range,
            weapon_rate: stats.weapon_rate,
            weapon_cooldown: 0.0,
            projectile: projectile.clone(),
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.core.velocity = velocity;
        self
    }

    /// Steer relative to the player's position
    fn steer(&mut self, player_position: Vec3) {
        let to_player = player_position - self.core.position;
        let distance = to_player.length();

        if distance < self.detection_range {
            self.core.velocity = if distance > self.attack_range {
                to_player.normalize_or_zero() * self.speed
            } else {
                Vec3::zeros()
            };
        }
    }

    /// Whether the weapon is ready and the player is within attack range
    pub fn can_shoot(&self, player_position: Vec3) -> bool {
        self.weapon_cooldown <= 0.0
            && self.core.position.distance_to(&player_position) <= self.attack_range
    }

    /// Fire at the player's current position.
    ///
    /// The shot travels in a straight line; it does not home.
    pub fn shoot(&mut self, player_position: Vec3) -> Option<Projectile> {
        if !self.can_shoot(player_position) {
            return None;
        }
        self.weapon_cooldown = 1.0 / self.weapon_rate;
        let direction = (player_position - self.core.position).normalize_or_zero();
        Some(Projectile::from_config(
            self.core.position,
            direction,
            ProjectileOwner::Enemy,
            &self.projectile,
        ))
    }

    /// Archetype
    pub fn enemy_type(&self) -> EnemyType {
        self.enemy_type
    }

    /// Chase speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Distance under which the ship reacts to the player
    pub fn detection_range(&self) -> f32 {
        self.detection_range
    }

    /// Distance at which the ship stops and fires
    pub fn attack_range(&self) -> f32 {
        self.attack_range
    }

    /// Shots per second
    pub fn weapon_rate(&self) -> f32 {
        self.weapon_rate
    }

    /// Seconds until the next shot is allowed
    pub fn weapon_cooldown(&self) -> f32 {
        self.weapon_cooldown
    }

    /// Overwrite the weapon cooldown
    pub fn set_weapon_cooldown(&mut self, seconds: f32) {
        self.weapon_cooldown = seconds.max(0.0);
    }
}

impl Entity for EnemyShip {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Enemy
    }

    fn update(&mut self, delta_time: f32, context: &FrameContext) {
        if !self.core.is_alive() {
            return;
        }
        self.core.integrate(delta_time);
        self.weapon_cooldown = tick_down(self.weapon_cooldown, delta_time);

        if let Some(player_position) = context.player_position {
            self.steer(player_position);
        }
    }

    fn on_death(&mut self) {
        log::debug!("{} {} destroyed", self.enemy_type, self.core.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn player() -> Vec3 {
        Vec3::new(0.0, 0.0, -2.0)
    }

    #[test]
    fn test_type_fixes_health_and_rate() {
        let cases = [
            (EnemyType::Fighter, 50, 1.0),
            (EnemyType::Bomber, 100, 0.5),
            (EnemyType::Scout, 30, 2.0),
        ];
        for (enemy_type, health, rate) in cases {
            let enemy = EnemyShip::new(Vec3::zeros(), enemy_type);
            assert_eq!(enemy.core().health(), health);
            assert_eq!(enemy.core().max_health(), health);
            assert_relative_eq!(enemy.weapon_rate(), rate);
            assert_relative_eq!(enemy.detection_range(), 10.0);
            assert_relative_eq!(enemy.attack_range(), 5.0);
        }
    }

    #[test]
    fn test_chases_inside_detection_range() {
        let mut enemy = EnemyShip::new(Vec3::new(0.0, 0.0, -10.0), EnemyType::Fighter);
        enemy.update(0.0, &FrameContext::tracking(player()));
        assert_relative_eq!(enemy.core().velocity, Vec3::new(0.0, 0.0, 2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_holds_inside_attack_range() {
        let mut enemy = EnemyShip::new(Vec3::new(0.0, 0.0, -6.0), EnemyType::Fighter)
            .with_velocity(Vec3::new(0.0, 0.0, 2.0));
        enemy.update(0.0, &FrameContext::tracking(player()));
        assert_eq!(enemy.core().velocity, Vec3::zeros());
    }

    #[test]
    fn test_keeps_velocity_outside_detection_range() {
        let drift = Vec3::new(0.0, 0.0, 0.5);
        let mut enemy =
            EnemyShip::new(Vec3::new(0.0, 0.0, -20.0), EnemyType::Scout).with_velocity(drift);
        enemy.update(1.0, &FrameContext::tracking(player()));
        assert_eq!(enemy.core().velocity, drift);
        assert_relative_eq!(enemy.position(), Vec3::new(0.0, 0.0, -19.5));
    }

    #[test]
    fn test_update_without_player_only_integrates() {
        let mut enemy = EnemyShip::new(Vec3::zeros(), EnemyType::Bomber).with_velocity(Vec3::x());
        enemy.set_weapon_cooldown(1.0);
        enemy.update(0.5, &FrameContext::default());
        assert_relative_eq!(enemy.position(), Vec3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(enemy.weapon_cooldown(), 0.5);
    }

    #[test]
    fn test_fighter_in_range_fires_at_player() {
        let mut enemy = EnemyShip::new(Vec3::new(0.0, 3.0, -2.0), EnemyType::Fighter);
        assert!(enemy.can_shoot(player()));

        let projectile = enemy.shoot(player()).expect("in range with a ready weapon");
        assert_eq!(projectile.owner(), ProjectileOwner::Enemy);
        assert_eq!(projectile.damage(), 10);
        assert_relative_eq!(projectile.direction(), Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(projectile.position(), Vec3::new(0.0, 3.0, -2.0));
        assert_relative_eq!(enemy.weapon_cooldown(), 1.0);
        assert!(!enemy.can_shoot(player()));
    }

    #[test]
    fn test_cannot_shoot_out_of_range() {
        let mut enemy = EnemyShip::new(Vec3::new(0.0, 0.0, -8.0), EnemyType::Scout);
        assert!(!enemy.can_shoot(player()));
        assert!(enemy.shoot(player()).is_none());
        assert_eq!(enemy.weapon_cooldown(), 0.0);
    }

    #[test]
    fn test_attack_range_is_inclusive() {
        let enemy = EnemyShip::new(Vec3::new(0.0, 0.0, -7.0), EnemyType::Scout);
        assert!(enemy.can_shoot(player()));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(EnemyType::Scout.to_string(), "scout");
        assert_eq!(EnemyType::ALL.len(), 3);
    }
}
