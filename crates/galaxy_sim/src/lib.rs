//! # Galaxy Sim
//!
//! Simulation core of a 3D lane space-shooter: the player's ship flies at the
//! near end of a lane while enemies, asteroids and power-ups come toward it.
//!
//! ## Features
//!
//! - **Entities**: player ship, enemy ships with chase AI, asteroids,
//!   projectiles and power-ups sharing one [`entities::Entity`] interface
//! - **Collisions**: per-frame sphere tests with fixed priority rules
//! - **Particles**: explosion bursts and engine trails
//! - **Spawning**: interval-driven enemies and power-ups, self-replacing
//!   asteroid field
//! - **Session**: score, fuel, lives and the menu/pause/game-over states
//! - **Deterministic**: all randomness comes from an injected, seedable RNG
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use galaxy_sim::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let mut session = GameSession::new(SimulationConfig::default(), 7)?;
//!     session.start();
//!
//!     let intent = PlayerIntent { fire: true, ..PlayerIntent::default() };
//!     for _ in 0..600 {
//!         for event in session.tick(1.0 / 60.0, &intent) {
//!             log::debug!("{event:?}");
//!         }
//!     }
//!     println!("score: {}", session.score());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod config;
pub mod core;
pub mod entities;
pub mod foundation;
pub mod particles;
pub mod physics;
pub mod session;
pub mod spawning;
pub mod world;

/// Common imports for simulation users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::SimulationConfig,
        entities::{
            Asteroid, EnemyShip, EnemyType, Entity, EntityId, EntityKind, EntityView, PlayerShip,
            PowerType, PowerUp, Projectile, ProjectileOwner,
        },
        foundation::{
            math::{Vec3, Vec3Ext},
            random::GameRng,
        },
        particles::{Particle, ParticleSystem},
        physics::is_colliding,
        session::{GameOverReason, GameSession, GameState, PlayerIntent},
        spawning::{SpawnPolicy, SpawnRequest},
        world::{GameWorld, WorldEvent},
    };
}
