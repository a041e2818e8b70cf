//! Transitions the world reports to its host
//!
//! The world queues an event for every state change a host may want to react
//! to (score, fuel, audio). Events are deferred: they accumulate during
//! `update` and `check_collisions` and are handed over by `drain_events`.

use crate::entities::{EnemyType, EntityId, PowerType, ProjectileOwner};
use crate::foundation::math::Vec3;

/// A game event raised during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    /// A projectile entered the world
    ProjectileFired {
        /// Projectile identifier
        id: EntityId,
        /// Who fired it
        owner: ProjectileOwner,
    },
    /// An enemy was destroyed and removed
    EnemyDestroyed {
        /// Enemy identifier
        id: EntityId,
        /// Archetype
        enemy_type: EnemyType,
        /// Last position
        position: Vec3,
    },
    /// An enemy flew past the player and left the lane
    EnemyEscaped {
        /// Enemy identifier
        id: EntityId,
    },
    /// An asteroid was destroyed and replaced
    AsteroidDestroyed {
        /// Asteroid identifier
        id: EntityId,
        /// Last position
        position: Vec3,
        /// Size of the destroyed asteroid
        size: f32,
    },
    /// An asteroid drifted out of the lane and was replaced
    AsteroidRecycled {
        /// Asteroid identifier
        id: EntityId,
    },
    /// The player lost health
    PlayerDamaged {
        /// Damage taken
        amount: i32,
        /// Health after the hit
        health: i32,
    },
    /// The player ship was destroyed
    PlayerDestroyed {
        /// Where it died
        position: Vec3,
    },
    /// The player picked up a power-up
    PowerUpCollected {
        /// Effect applied
        power_type: PowerType,
    },
}

/// FIFO of events raised since the last drain
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Vec<WorldEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&mut self, event: WorldEvent) {
        log::trace!("World event: {event:?}");
        self.pending.push(event);
    }

    /// Take every pending event in the order it was raised
    pub fn drain(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Pending events without draining them
    pub fn pending(&self) -> &[WorldEvent] {
        &self.pending
    }

    /// Drop every pending event
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
