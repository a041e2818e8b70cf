//! Simulated entities
//!
//! Every object in the lane shares one data record ([`EntityCore`]) and the
//! [`Entity`] capability trait. The variants add their own fields and
//! override the per-frame `update` and, for the player, `take_damage`.
//!
//! The set of variants is closed. Heterogeneous read-only access (rendering,
//! HUD) goes through [`EntityView`].

pub mod asteroid;
pub mod enemy;
pub mod player;
pub mod powerup;
pub mod projectile;

use std::fmt;

use crate::foundation::math::Vec3;

pub use asteroid::Asteroid;
pub use enemy::{EnemyShip, EnemyType};
pub use player::PlayerShip;
pub use powerup::{PowerType, PowerUp};
pub use projectile::{Projectile, ProjectileOwner};

/// Collision radius of every entity that does not define its own size
pub const DEFAULT_COLLISION_RADIUS: f32 = 0.5;

/// Stable identifier assigned by the world when an entity is inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Identifier of an entity that has not been added to a world yet
    pub const UNASSIGNED: Self = Self(0);

    /// Whether a world has assigned this identifier
    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which variant an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The player's ship
    Player,
    /// An enemy ship
    Enemy,
    /// A drifting asteroid
    Asteroid,
    /// A shot fired by the player or an enemy
    Projectile,
    /// A collectible power-up
    PowerUp,
}

/// State shared by every entity variant
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCore {
    id: EntityId,
    /// Position in lane space
    pub position: Vec3,
    /// Euler rotation in radians, unbounded
    pub rotation: Vec3,
    /// Linear velocity in units per second
    pub velocity: Vec3,
    /// Visual scale
    pub scale: Vec3,
    health: i32,
    max_health: i32,
    alive: bool,
}

impl EntityCore {
    /// Create a live record at `position` with full health
    pub fn new(position: Vec3, max_health: i32) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            position,
            rotation: Vec3::zeros(),
            velocity: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            health: max_health,
            max_health,
            alive: true,
        }
    }

    /// World-assigned identifier
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    /// Current health. May be negative after the killing blow.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Maximum health
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Whether the entity is still part of the simulation
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Explicit Euler step: position += velocity * dt
    pub fn integrate(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;
    }

    /// Subtract `amount` from health.
    ///
    /// Returns `true` when this call was the killing blow. Damage to a dead
    /// entity is ignored, so health moves past zero at most once.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Restore health up to the maximum. Dead entities stay dead.
    pub fn heal(&mut self, amount: i32) {
        if self.alive {
            self.health = self.health.saturating_add(amount).min(self.max_health);
        }
    }

    /// Remove the entity independent of its health (lifetime, lane exit)
    pub fn expire(&mut self) {
        self.alive = false;
    }
}

/// Extra inputs an entity may need for its per-frame update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    /// Where the live player currently is, if there is one
    pub player_position: Option<Vec3>,
}

impl FrameContext {
    /// Context with a player to track
    pub fn tracking(player_position: Vec3) -> Self {
        Self {
            player_position: Some(player_position),
        }
    }
}

/// Capability interface shared by all entity variants
pub trait Entity {
    /// Shared state
    fn core(&self) -> &EntityCore;

    /// Mutable shared state
    fn core_mut(&mut self) -> &mut EntityCore;

    /// Variant tag
    fn kind(&self) -> EntityKind;

    /// Advance the entity by `delta_time` seconds
    fn update(&mut self, delta_time: f32, context: &FrameContext);

    /// Radius of the sphere used for collision tests
    fn collision_radius(&self) -> f32 {
        DEFAULT_COLLISION_RADIUS
    }

    /// Take damage. Returns `true` if the damage was applied.
    fn take_damage(&mut self, amount: i32) -> bool {
        let core = self.core_mut();
        if !core.is_alive() {
            return false;
        }
        if core.apply_damage(amount) {
            self.on_death();
        }
        true
    }

    /// Called once, on the transition to dead
    fn on_death(&mut self) {}

    /// World-assigned identifier
    fn id(&self) -> EntityId {
        self.core().id()
    }

    /// Current position
    fn position(&self) -> Vec3 {
        self.core().position
    }

    /// Whether the entity is still part of the simulation
    fn is_alive(&self) -> bool {
        self.core().is_alive()
    }
}

/// Read-only handle to any entity in the world
#[derive(Debug, Clone, Copy)]
pub enum EntityView<'a> {
    /// The player's ship
    Player(&'a PlayerShip),
    /// An enemy ship
    Enemy(&'a EnemyShip),
    /// An asteroid
    Asteroid(&'a Asteroid),
    /// A projectile
    Projectile(&'a Projectile),
    /// A power-up
    PowerUp(&'a PowerUp),
}

impl<'a> EntityView<'a> {
    /// The entity behind the view as a trait object
    pub fn as_entity(&self) -> &'a dyn Entity {
        match *self {
            EntityView::Player(player) => player,
            EntityView::Enemy(enemy) => enemy,
            EntityView::Asteroid(asteroid) => asteroid,
            EntityView::Projectile(projectile) => projectile,
            EntityView::PowerUp(powerup) => powerup,
        }
    }

    /// Shared state
    pub fn core(&self) -> &'a EntityCore {
        self.as_entity().core()
    }

    /// Variant tag
    pub fn kind(&self) -> EntityKind {
        self.as_entity().kind()
    }

    /// World-assigned identifier
    pub fn id(&self) -> EntityId {
        self.core().id()
    }
}
