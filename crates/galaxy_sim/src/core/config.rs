//! # Simulation Configuration
//!
//! Every tuning constant of the lane shooter lives here, grouped by the
//! subsystem that reads it. `Default` reproduces the stock game balance, and
//! the whole tree can be loaded from TOML or RON through [`Config`].
//!
//! ## Configuration Categories
//!
//! - **Entities**: player, enemy, asteroid, projectile and power-up stats
//! - **Collisions**: contact damage
//! - **Lane**: the exit thresholds that despawn or recycle entities
//! - **Spawning**: placement regions and spawn intervals
//! - **Session**: score, fuel and lives bookkeeping

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::entities::EnemyType;

/// Inclusive `(min, max)` range used for random draws
pub type Range = (f32, f32);

/// # Player Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Where a fresh ship is placed
    pub spawn_position: [f32; 3],
    /// Starting and maximum health
    pub health: i32,
    /// Movement speed in units per second
    pub speed: f32,
    /// Rotation speed multiplier
    pub rotation_speed: f32,
    /// Shots per second
    pub weapon_rate: f32,
    /// Upper bound for weapon power-up stacking
    pub max_weapon_rate: f32,
    /// Damage immunity granted by a hit (seconds)
    pub hit_invulnerability: f32,
    /// Offset from the ship where shots appear
    pub muzzle_offset: [f32; 3],
    /// Direction player shots travel
    pub forward: [f32; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_position: [0.0, 0.0, -2.0],
            health: 100,
            speed: 5.0,
            rotation_speed: 2.0,
            weapon_rate: 0.2,
            max_weapon_rate: 5.0,
            hit_invulnerability: 1.0,
            muzzle_offset: [0.0, 0.0, 0.5],
            forward: [0.0, 0.0, 1.0],
        }
    }
}

/// Per-type enemy stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    /// Starting and maximum health
    pub health: i32,
    /// Shots per second
    pub weapon_rate: f32,
}

/// # Enemy Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Chase speed in units per second
    pub speed: f32,
    /// Drift along +z a freshly spawned enemy has before it detects the player
    pub approach_speed: f32,
    /// Distance under which the enemy starts steering toward the player
    pub detection_range: f32,
    /// Distance at which the enemy holds position and may fire
    pub attack_range: f32,
    /// Whether the world lets enemies fire on their own
    pub fire_at_player: bool,
    /// Particle count of the death burst
    pub explosion_particles: usize,
    /// Fighter stats
    pub fighter: EnemyStats,
    /// Bomber stats
    pub bomber: EnemyStats,
    /// Scout stats
    pub scout: EnemyStats,
}

impl EnemyConfig {
    /// Stats for one enemy type
    pub fn stats(&self, enemy_type: EnemyType) -> EnemyStats {
        match enemy_type {
            EnemyType::Fighter => self.fighter,
            EnemyType::Bomber => self.bomber,
            EnemyType::Scout => self.scout,
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            approach_speed: 1.0,
            detection_range: 10.0,
            attack_range: 5.0,
            fire_at_player: true,
            explosion_particles: 20,
            fighter: EnemyStats { health: 50, weapon_rate: 1.0 },
            bomber: EnemyStats { health: 100, weapon_rate: 0.5 },
            scout: EnemyStats { health: 30, weapon_rate: 2.0 },
        }
    }
}

/// # Asteroid Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Health granted per unit of size (floored)
    pub health_per_size: f32,
    /// Range of the per-axis spin in radians per second
    pub spin: Range,
    /// Range of the sideways drift on x and y
    pub drift_lateral: Range,
    /// Range of the drift toward the player along +z
    pub drift_forward: Range,
    /// Range of sizes for randomly spawned asteroids
    pub size: Range,
    /// Particle count of the destruction burst
    pub explosion_particles: usize,
    /// Asteroids placed when a session starts
    pub initial_count: usize,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            health_per_size: 20.0,
            spin: (-2.0, 2.0),
            drift_lateral: (-0.5, 0.5),
            drift_forward: (1.0, 4.0),
            size: (0.5, 3.0),
            explosion_particles: 30,
            initial_count: 20,
        }
    }
}

/// # Projectile Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Travel speed in units per second
    pub speed: f32,
    /// Seconds before a shot expires
    pub lifetime: f32,
    /// Damage of player-owned shots
    pub player_damage: i32,
    /// Damage of enemy-owned shots
    pub enemy_damage: i32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            lifetime: 3.0,
            player_damage: 25,
            enemy_damage: 10,
        }
    }
}

/// # Collision Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Damage the player takes from ramming an enemy
    pub ship_contact_player_damage: i32,
    /// Damage an enemy takes from being rammed
    pub ship_contact_enemy_damage: i32,
    /// Damage the player takes from an asteroid
    pub asteroid_player_damage: i32,
    /// Damage an asteroid takes from the player
    pub asteroid_damage: i32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            ship_contact_player_damage: 10,
            ship_contact_enemy_damage: 20,
            asteroid_player_damage: 15,
            asteroid_damage: 50,
        }
    }
}

/// # Power-up Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpConfig {
    /// Spin about the Y axis in radians per second
    pub spin_speed: f32,
    /// Health restored by a health pickup
    pub health_restore: i32,
    /// Weapon rate multiplier of a weapon pickup
    pub weapon_rate_multiplier: f32,
    /// Invulnerability granted by a shield pickup (seconds, overwrites)
    pub shield_duration: f32,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            spin_speed: 2.0,
            health_restore: 30,
            weapon_rate_multiplier: 1.5,
            shield_duration: 5.0,
        }
    }
}

/// # Particle Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Hard cap on live particles
    pub max_particles: usize,
    /// Emit an engine trail behind the moving player
    pub engine_trail: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: 500,
            engine_trail: true,
        }
    }
}

/// # Lane Configuration
///
/// Exit thresholds of the play volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneConfig {
    /// Enemies past this z have flown by the player
    pub enemy_exit_z: f32,
    /// Asteroids past this z are recycled
    pub asteroid_exit_z: f32,
    /// Projectiles beyond this |z| are discarded
    pub projectile_max_abs_z: f32,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            enemy_exit_z: 2.0,
            asteroid_exit_z: 5.0,
            projectile_max_abs_z: 20.0,
        }
    }
}

/// Axis-aligned box spawn entities are placed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    /// X range
    pub x: Range,
    /// Y range
    pub y: Range,
    /// Z range
    pub z: Range,
}

impl SpawnRegion {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        for (axis, range) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            check_range(&format!("{name}.{axis}"), range)?;
        }
        Ok(())
    }
}

/// # Spawning Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawningConfig {
    /// Seconds between enemy spawns
    pub enemy_interval: f32,
    /// Seconds between power-up spawns (0 disables them)
    pub powerup_interval: f32,
    /// Where enemies and power-ups appear
    pub enemy_region: SpawnRegion,
    /// Where random and replacement asteroids appear
    pub asteroid_region: SpawnRegion,
}

impl Default for SpawningConfig {
    fn default() -> Self {
        Self {
            enemy_interval: 2.0,
            powerup_interval: 10.0,
            enemy_region: SpawnRegion {
                x: (-7.0, 7.0),
                y: (-5.0, 5.0),
                z: (-12.0, -8.0),
            },
            asteroid_region: SpawnRegion {
                x: (-15.0, 15.0),
                y: (-10.0, 10.0),
                z: (-20.0, -10.0),
            },
        }
    }
}

/// # Session Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lives at the start of a game
    pub starting_lives: u32,
    /// Fuel tank capacity, also the starting level
    pub max_fuel: f32,
    /// Fuel burned per second of play
    pub fuel_drain_per_second: f32,
    /// Fuel lost whenever the player takes damage
    pub fuel_loss_on_hit: f32,
    /// Fuel restored by a fuel pickup
    pub fuel_pickup_amount: f32,
    /// Points for destroying an enemy
    pub enemy_score: u32,
    /// Points for destroying an asteroid
    pub asteroid_score: u32,
    /// Invulnerability of a respawned ship (seconds)
    pub respawn_invulnerability: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            max_fuel: 100.0,
            fuel_drain_per_second: 1.2,
            fuel_loss_on_hit: 20.0,
            fuel_pickup_amount: 30.0,
            enemy_score: 100,
            asteroid_score: 50,
            respawn_invulnerability: 2.0,
        }
    }
}

/// # Complete Simulation Configuration
///
/// Top-level configuration handed to the world and the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Player ship
    pub player: PlayerConfig,
    /// Enemy ships
    pub enemies: EnemyConfig,
    /// Asteroids
    pub asteroids: AsteroidConfig,
    /// Projectiles
    pub projectiles: ProjectileConfig,
    /// Collision resolution
    pub collisions: CollisionConfig,
    /// Power-ups
    pub powerups: PowerUpConfig,
    /// Particle effects
    pub particles: ParticleConfig,
    /// Lane bounds
    pub lane: LaneConfig,
    /// Spawn regions and intervals
    pub spawning: SpawningConfig,
    /// Session bookkeeping
    pub session: SessionConfig,
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let player = &self.player;
        check_positive("player.health", player.health as f32)?;
        check_non_negative("player.speed", player.speed)?;
        check_positive("player.weapon_rate", player.weapon_rate)?;
        if player.max_weapon_rate < player.weapon_rate {
            return Err(ConfigError::Invalid(format!(
                "player.max_weapon_rate ({}) is below player.weapon_rate ({})",
                player.max_weapon_rate, player.weapon_rate
            )));
        }

        let enemies = &self.enemies;
        check_non_negative("enemies.speed", enemies.speed)?;
        check_non_negative("enemies.approach_speed", enemies.approach_speed)?;
        check_positive("enemies.detection_range", enemies.detection_range)?;
        check_non_negative("enemies.attack_range", enemies.attack_range)?;
        for enemy_type in EnemyType::ALL {
            let stats = enemies.stats(enemy_type);
            check_positive(&format!("enemies.{enemy_type}.health"), stats.health as f32)?;
            check_positive(&format!("enemies.{enemy_type}.weapon_rate"), stats.weapon_rate)?;
        }

        let asteroids = &self.asteroids;
        check_positive("asteroids.health_per_size", asteroids.health_per_size)?;
        check_range("asteroids.spin", asteroids.spin)?;
        check_range("asteroids.drift_lateral", asteroids.drift_lateral)?;
        check_range("asteroids.drift_forward", asteroids.drift_forward)?;
        check_range("asteroids.size", asteroids.size)?;
        check_positive("asteroids.size.min", asteroids.size.0)?;

        check_positive("projectiles.speed", self.projectiles.speed)?;
        check_positive("projectiles.lifetime", self.projectiles.lifetime)?;
        check_positive("powerups.weapon_rate_multiplier", self.powerups.weapon_rate_multiplier)?;

        check_interval("spawning.enemy_interval", self.spawning.enemy_interval)?;
        check_interval("spawning.powerup_interval", self.spawning.powerup_interval)?;
        self.spawning.enemy_region.validate("spawning.enemy_region")?;
        self.spawning.asteroid_region.validate("spawning.asteroid_region")?;

        check_positive("session.max_fuel", self.session.max_fuel)?;
        check_non_negative("session.fuel_drain_per_second", self.session.fuel_drain_per_second)?;

        Ok(())
    }
}

impl Config for SimulationConfig {}

fn check_positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")))
    }
}

/// Zero disables a spawn timer; anything else must be at least this long
pub const MIN_SPAWN_INTERVAL: f32 = 0.001;

fn check_interval(name: &str, value: f32) -> Result<(), ConfigError> {
    if value == 0.0 || value >= MIN_SPAWN_INTERVAL {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be 0 or at least {MIN_SPAWN_INTERVAL}s, got {value}"
        )))
    }
}

fn check_range(name: &str, (min, max): Range) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(ConfigError::Invalid(format!(
            "{name} must have finite bounds and span, got ({min}, {max})"
        )));
    }
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} has min {min} above max {max}")))
    }
}
