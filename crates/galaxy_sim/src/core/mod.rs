//! # Core Simulation Modules
//!
//! Shared configuration consumed by the world, spawning and session layers.

pub mod config;

pub use config::{
    SimulationConfig, PlayerConfig, EnemyConfig, EnemyStats, AsteroidConfig,
    ProjectileConfig, CollisionConfig, PowerUpConfig, ParticleConfig, LaneConfig,
    SpawnRegion, SpawningConfig, SessionConfig, Range,
};
