//! The lane simulation
//!
//! `GameWorld` owns every entity and advances them in a fixed order. A frame
//! is one `update` followed by one `check_collisions`:
//!
//! 1. player, then the engine trail behind it
//! 2. enemies (steering toward the player, auto-fire), dead ones pruned with an
//!    explosion, escaped ones pruned silently
//! 3. asteroids, lost ones replaced 1:1
//! 4. projectiles, expired or out-of-lane ones pruned
//! 5. power-ups
//! 6. particles
//!
//! Pruning is two-phase: every entity of a kind is updated first, then the
//! survivors are kept. Collisions only mark entities dead (or consume
//! projectiles and power-ups); dead ships and asteroids leave on the next
//! `update` so their death effects are produced in one place.

use crate::core::config::SimulationConfig;
use crate::entities::{
    Asteroid, EnemyShip, EnemyType, Entity, EntityId, EntityView, FrameContext, PlayerShip,
    PowerType, PowerUp, Projectile, ProjectileOwner,
};
use crate::foundation::math::Vec3;
use crate::foundation::random::GameRng;
use crate::particles::ParticleSystem;
use crate::physics::is_colliding;
use crate::spawning::{self, SpawnRequest};

use super::events::{EventQueue, WorldEvent};

/// Container and orchestrator of every entity in the lane
#[derive(Debug, Clone)]
pub struct GameWorld {
    config: SimulationConfig,
    rng: GameRng,
    player: Option<PlayerShip>,
    enemies: Vec<EnemyShip>,
    asteroids: Vec<Asteroid>,
    projectiles: Vec<Projectile>,
    powerups: Vec<PowerUp>,
    particles: ParticleSystem,
    events: EventQueue,
    next_id: u32,
}

impl GameWorld {
    /// Create an empty world drawing randomness from `rng`
    pub fn new(config: SimulationConfig, rng: GameRng) -> Self {
        let particles = ParticleSystem::new(config.particles.max_particles);
        Self {
            config,
            rng,
            player: None,
            enemies: Vec::new(),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            powerups: Vec::new(),
            particles,
            events: EventQueue::new(),
            next_id: 1,
        }
    }

    /// Create an empty world with a seeded generator
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::new(config, GameRng::seeded(seed))
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    // ---- Spawning ----

    /// Install a player ship, replacing any existing one
    pub fn set_player(&mut self, mut player: PlayerShip) -> EntityId {
        let id = self.allocate_id();
        player.core_mut().assign_id(id);
        log::debug!("Player {} placed at {:?}", id, player.position());
        self.player = Some(player);
        id
    }

    /// Install a fresh player ship built from the configuration
    pub fn spawn_player(&mut self) -> EntityId {
        let player = PlayerShip::from_config(&self.config.player, &self.config.projectiles);
        self.set_player(player)
    }

    /// Remove the player ship
    pub fn remove_player(&mut self) -> Option<PlayerShip> {
        self.player.take()
    }

    /// Add an enemy at `position`, drifting toward the player
    pub fn spawn_enemy(&mut self, position: Vec3, enemy_type: EnemyType) -> EntityId {
        let approach = Vec3::new(0.0, 0.0, self.config.enemies.approach_speed);
        let mut enemy = EnemyShip::from_config(
            position,
            enemy_type,
            &self.config.enemies,
            &self.config.projectiles,
        )
        .with_velocity(approach);
        let id = self.allocate_id();
        enemy.core_mut().assign_id(id);
        log::debug!("Spawned {} {} at {:?}", enemy_type, id, position);
        self.enemies.push(enemy);
        id
    }

    /// Add an asteroid. Missing position or size are drawn at random.
    pub fn spawn_asteroid(&mut self, position: Option<Vec3>, size: Option<f32>) -> EntityId {
        let mut asteroid = spawning::random_asteroid(
            position,
            size,
            &self.config.spawning.asteroid_region,
            &self.config.asteroids,
            &mut self.rng,
        );
        let id = self.allocate_id();
        asteroid.core_mut().assign_id(id);
        log::trace!("Spawned asteroid {} (size {:.2})", id, asteroid.size());
        self.asteroids.push(asteroid);
        id
    }

    /// Add a power-up at `position`
    pub fn spawn_powerup(&mut self, position: Vec3, power_type: PowerType) -> EntityId {
        let mut powerup = PowerUp::from_config(position, power_type, &self.config.powerups);
        let id = self.allocate_id();
        powerup.core_mut().assign_id(id);
        log::debug!("Spawned {} power-up {} at {:?}", power_type, id, position);
        self.powerups.push(powerup);
        id
    }

    /// Add a projectile fired by anyone
    pub fn add_projectile(&mut self, mut projectile: Projectile) -> EntityId {
        let id = self.allocate_id();
        projectile.core_mut().assign_id(id);
        self.events.push(WorldEvent::ProjectileFired {
            id,
            owner: projectile.owner(),
        });
        self.projectiles.push(projectile);
        id
    }

    /// Fire the player's weapon if there is a live player and it is ready
    pub fn player_shoot(&mut self) -> Option<EntityId> {
        let projectile = self
            .player
            .as_mut()
            .filter(|player| player.is_alive())
            .and_then(PlayerShip::shoot)?;
        Some(self.add_projectile(projectile))
    }

    /// Fill the lane with `count` random asteroids
    pub fn populate_asteroids(&mut self, count: usize) {
        for _ in 0..count {
            self.spawn_asteroid(None, None);
        }
        log::debug!("Populated {} asteroids", count);
    }

    /// Carry out a spawn request
    pub fn spawn(&mut self, request: SpawnRequest) -> EntityId {
        match request {
            SpawnRequest::Enemy { position, enemy_type } => self.spawn_enemy(position, enemy_type),
            SpawnRequest::PowerUp {
                position,
                power_type,
            } => self.spawn_powerup(position, power_type),
        }
    }

    // ---- Frame ----

    /// Advance every entity by `delta_time` seconds and prune the departed
    pub fn update(&mut self, delta_time: f32) {
        self.update_player(delta_time);

        let context = FrameContext {
            player_position: self.live_player_position(),
        };
        self.update_enemies(delta_time, &context);
        self.update_asteroids(delta_time, &context);
        self.update_projectiles(delta_time, &context);

        for powerup in &mut self.powerups {
            powerup.update(delta_time, &context);
        }

        self.particles.update(delta_time);
    }

    fn update_player(&mut self, delta_time: f32) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if !player.is_alive() {
            return;
        }

        player.update(delta_time, &FrameContext::default());

        let velocity = player.core().velocity;
        if self.config.particles.engine_trail && velocity != Vec3::zeros() {
            self.particles
                .create_engine_trail(player.position(), velocity, &mut self.rng);
        }
    }

    fn update_enemies(&mut self, delta_time: f32, context: &FrameContext) {
        let mut fired = Vec::new();
        for enemy in &mut self.enemies {
            enemy.update(delta_time, context);
            if !self.config.enemies.fire_at_player || !enemy.is_alive() {
                continue;
            }
            let shot = context
                .player_position
                .and_then(|target| enemy.shoot(target));
            if let Some(projectile) = shot {
                fired.push(projectile);
            }
        }
        for projectile in fired {
            self.add_projectile(projectile);
        }

        let exit_z = self.config.lane.enemy_exit_z;
        let explosion = self.config.enemies.explosion_particles;
        let enemies = std::mem::take(&mut self.enemies);
        for enemy in enemies {
            if !enemy.is_alive() {
                self.particles
                    .create_explosion(enemy.position(), explosion, &mut self.rng);
                self.events.push(WorldEvent::EnemyDestroyed {
                    id: enemy.id(),
                    enemy_type: enemy.enemy_type(),
                    position: enemy.position(),
                });
            } else if enemy.position().z > exit_z {
                log::trace!("Enemy {} left the lane", enemy.id());
                self.events.push(WorldEvent::EnemyEscaped { id: enemy.id() });
            } else {
                self.enemies.push(enemy);
            }
        }
    }

    fn update_asteroids(&mut self, delta_time: f32, context: &FrameContext) {
        for asteroid in &mut self.asteroids {
            asteroid.update(delta_time, context);
        }

        let exit_z = self.config.lane.asteroid_exit_z;
        let explosion = self.config.asteroids.explosion_particles;
        let mut replacements = 0;
        let asteroids = std::mem::take(&mut self.asteroids);
        for asteroid in asteroids {
            if !asteroid.is_alive() {
                self.particles
                    .create_explosion(asteroid.position(), explosion, &mut self.rng);
                self.events.push(WorldEvent::AsteroidDestroyed {
                    id: asteroid.id(),
                    position: asteroid.position(),
                    size: asteroid.size(),
                });
                replacements += 1;
            } else if asteroid.position().z > exit_z {
                self.events.push(WorldEvent::AsteroidRecycled { id: asteroid.id() });
                replacements += 1;
            } else {
                self.asteroids.push(asteroid);
            }
        }

        for _ in 0..replacements {
            self.spawn_asteroid(None, None);
        }
    }

    fn update_projectiles(&mut self, delta_time: f32, context: &FrameContext) {
        for projectile in &mut self.projectiles {
            projectile.update(delta_time, context);
        }
        let max_abs_z = self.config.lane.projectile_max_abs_z;
        self.projectiles
            .retain(|projectile| projectile.is_alive() && !projectile.is_out_of_lane(max_abs_z));
    }

    /// Resolve every collision of the current state.
    ///
    /// Does nothing without a player. Rules run in priority order and each
    /// re-checks liveness before applying:
    ///
    /// 1. player shot vs enemy: first enemy hit takes the damage, shot consumed
    /// 2. enemy shot vs player: player takes the damage, shot consumed
    /// 3. player vs enemy: contact damage to both
    /// 4. player vs asteroid: contact damage to both
    /// 5. player vs power-up: effect applied, power-up consumed
    pub fn check_collisions(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let collisions = &self.config.collisions;
        let events = &mut self.events;

        let mut consumed = vec![false; self.projectiles.len()];
        for (index, projectile) in self.projectiles.iter().enumerate() {
            if !projectile.is_alive() {
                continue;
            }
            match projectile.owner() {
                ProjectileOwner::Player => {
                    let target = self
                        .enemies
                        .iter_mut()
                        .find(|enemy| enemy.is_alive() && is_colliding(projectile, &**enemy));
                    if let Some(enemy) = target {
                        enemy.take_damage(projectile.damage());
                        consumed[index] = true;
                    }
                }
                ProjectileOwner::Enemy => {
                    if player.is_alive() && is_colliding(projectile, &*player) {
                        damage_player(player, projectile.damage(), events);
                        consumed[index] = true;
                    }
                }
            }
        }
        let mut consumed = consumed.into_iter();
        self.projectiles
            .retain(|_| !consumed.next().unwrap_or(false));

        for enemy in &mut self.enemies {
            if player.is_alive() && enemy.is_alive() && is_colliding(&*player, &*enemy) {
                damage_player(player, collisions.ship_contact_player_damage, events);
                enemy.take_damage(collisions.ship_contact_enemy_damage);
            }
        }

        for asteroid in &mut self.asteroids {
            if player.is_alive() && asteroid.is_alive() && is_colliding(&*player, &*asteroid) {
                damage_player(player, collisions.asteroid_player_damage, events);
                asteroid.take_damage(collisions.asteroid_damage);
            }
        }

        let powerup_config = &self.config.powerups;
        self.powerups.retain(|powerup| {
            if !player.is_alive() || !is_colliding(&*player, powerup) {
                return true;
            }
            powerup.power_type().apply(player, powerup_config);
            events.push(WorldEvent::PowerUpCollected {
                power_type: powerup.power_type(),
            });
            false
        });
    }

    /// Apply a power-up effect to the live player.
    ///
    /// Returns `false` when there is no live player to receive it.
    pub fn apply_powerup(&mut self, power_type: PowerType) -> bool {
        match self.player.as_mut().filter(|player| player.is_alive()) {
            Some(player) => {
                power_type.apply(player, &self.config.powerups);
                true
            }
            None => false,
        }
    }

    // ---- Queries ----

    /// Read-only view of every entity: player first, then enemies,
    /// asteroids, projectiles and power-ups in insertion order
    pub fn get_all_entities(&self) -> Vec<EntityView<'_>> {
        let mut views = Vec::with_capacity(self.entity_count());
        if let Some(player) = &self.player {
            views.push(EntityView::Player(player));
        }
        views.extend(self.enemies.iter().map(EntityView::Enemy));
        views.extend(self.asteroids.iter().map(EntityView::Asteroid));
        views.extend(self.projectiles.iter().map(EntityView::Projectile));
        views.extend(self.powerups.iter().map(EntityView::PowerUp));
        views
    }

    /// Number of entities, player included
    pub fn entity_count(&self) -> usize {
        usize::from(self.player.is_some())
            + self.enemies.len()
            + self.asteroids.len()
            + self.projectiles.len()
            + self.powerups.len()
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        self.events.drain()
    }

    /// Remove every entity, particle and pending event
    pub fn clear(&mut self) {
        self.player = None;
        self.enemies.clear();
        self.asteroids.clear();
        self.projectiles.clear();
        self.powerups.clear();
        self.particles.clear();
        self.events.clear();
    }

    fn live_player_position(&self) -> Option<Vec3> {
        self.player
            .as_ref()
            .filter(|player| player.is_alive())
            .map(Entity::position)
    }

    /// The player ship, alive or not
    pub fn player(&self) -> Option<&PlayerShip> {
        self.player.as_ref()
    }

    /// Mutable player ship
    pub fn player_mut(&mut self) -> Option<&mut PlayerShip> {
        self.player.as_mut()
    }

    /// Enemies in spawn order
    pub fn enemies(&self) -> &[EnemyShip] {
        &self.enemies
    }

    /// Mutable enemies
    pub fn enemies_mut(&mut self) -> &mut [EnemyShip] {
        &mut self.enemies
    }

    /// Asteroids in spawn order
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Mutable asteroids
    pub fn asteroids_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    /// Projectiles in firing order
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Power-ups in spawn order
    pub fn powerups(&self) -> &[PowerUp] {
        &self.powerups
    }

    /// Particle effects
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Configuration the world was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The world's random source
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}

/// Damage the player and report what happened
fn damage_player(player: &mut PlayerShip, amount: i32, events: &mut EventQueue) {
    if !player.take_damage(amount) {
        return;
    }
    events.push(WorldEvent::PlayerDamaged {
        amount,
        health: player.core().health(),
    });
    if !player.is_alive() {
        log::info!("Player destroyed at {:?}", player.position());
        events.push(WorldEvent::PlayerDestroyed {
            position: player.position(),
        });
    }
}
