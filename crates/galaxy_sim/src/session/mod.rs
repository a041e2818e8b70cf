//! Game session
//!
//! The host-facing loop around a [`GameWorld`]: menu and pause states, the
//! spawn schedule, and the score, fuel and lives bookkeeping that react to
//! world events. A host feeds it one [`PlayerIntent`] and a frame delta per
//! tick and gets the frame's events back (for audio and HUD).

pub mod fuel;

use std::fmt;

use crate::core::config::{ConfigError, SimulationConfig};
use crate::entities::{Entity, PowerType};
use crate::foundation::math::Vec3;
use crate::foundation::time::FrameClock;
use crate::spawning::SpawnPolicy;
use crate::world::{GameWorld, WorldEvent};

pub use fuel::FuelTank;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for `start`
    MainMenu,
    /// Frames advance
    Playing,
    /// Frames are ignored until unpaused
    Paused,
    /// The run has ended; `restart` begins a new one
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The last life was lost
    OutOfLives,
    /// The fuel tank ran dry
    OutOfFuel,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::OutOfLives => write!(f, "out of lives"),
            GameOverReason::OutOfFuel => write!(f, "out of fuel"),
        }
    }
}

/// What the player wants to do this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerIntent {
    /// Desired movement direction; zero stops the ship
    pub movement: Vec3,
    /// Per-axis rotation input
    pub rotation: Vec3,
    /// Fire when the weapon is ready
    pub fire: bool,
}

/// One playthrough: a world plus score, fuel and lives
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SimulationConfig,
    world: GameWorld,
    spawner: SpawnPolicy,
    clock: FrameClock,
    state: GameState,
    game_over_reason: Option<GameOverReason>,
    score: u32,
    lives: u32,
    fuel: FuelTank,
}

impl GameSession {
    /// Create a session in the main menu.
    ///
    /// The configuration is validated first.
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: GameWorld::with_seed(config.clone(), seed),
            spawner: SpawnPolicy::new(config.spawning.clone()),
            clock: FrameClock::new(),
            state: GameState::MainMenu,
            game_over_reason: None,
            score: 0,
            lives: config.session.starting_lives,
            fuel: FuelTank::new(config.session.max_fuel),
            config,
        })
    }

    /// Begin a run from the main menu or after a game over
    pub fn start(&mut self) {
        match self.state {
            GameState::MainMenu | GameState::GameOver => self.begin_run(),
            GameState::Playing | GameState::Paused => {
                log::debug!("start() ignored while {:?}", self.state);
            }
        }
    }

    /// Throw away the current run and begin a new one
    pub fn restart(&mut self) {
        self.begin_run();
    }

    fn begin_run(&mut self) {
        self.world.clear();
        self.world.spawn_player();
        self.world.populate_asteroids(self.config.asteroids.initial_count);
        self.spawner.reset();
        self.clock.reset();
        self.score = 0;
        self.lives = self.config.session.starting_lives;
        self.fuel.reset();
        self.game_over_reason = None;
        self.state = GameState::Playing;
        log::info!("Run started with {} lives", self.lives);
    }

    /// Switch between playing and paused. Other states are unaffected.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            other => other,
        };
        log::info!("Session state: {:?}", self.state);
    }

    /// Advance one frame and return the events it produced.
    ///
    /// Outside the playing state nothing happens and no events are returned.
    pub fn tick(&mut self, delta_time: f32, intent: &PlayerIntent) -> Vec<WorldEvent> {
        if self.state != GameState::Playing {
            return Vec::new();
        }

        self.apply_intent(delta_time, intent);
        self.clock.advance(delta_time);

        for request in self.spawner.tick(delta_time, self.world.rng_mut()) {
            self.world.spawn(request);
        }

        self.world.update(delta_time);
        self.world.check_collisions();
        let events = self.world.drain_events();

        self.fuel
            .drain(self.config.session.fuel_drain_per_second * delta_time.max(0.0));
        for event in &events {
            self.apply_event(event);
        }

        if self.world.player().is_some_and(|player| !player.is_alive()) {
            self.lose_life();
        }
        if self.state == GameState::Playing && self.fuel.is_empty() {
            self.end_run(GameOverReason::OutOfFuel);
        }

        events
    }

    fn apply_intent(&mut self, delta_time: f32, intent: &PlayerIntent) {
        let Some(player) = self.world.player_mut().filter(|player| player.is_alive()) else {
            return;
        };
        player.move_in(intent.movement, delta_time);
        player.rotate(intent.rotation, delta_time);
        if intent.fire {
            self.world.player_shoot();
        }
    }

    fn apply_event(&mut self, event: &WorldEvent) {
        let session = &self.config.session;
        match event {
            WorldEvent::EnemyDestroyed { .. } => self.score += session.enemy_score,
            WorldEvent::AsteroidDestroyed { .. } => self.score += session.asteroid_score,
            WorldEvent::PlayerDamaged { .. } => self.fuel.drain(session.fuel_loss_on_hit),
            WorldEvent::PowerUpCollected {
                power_type: PowerType::Fuel,
            } => self.fuel.refill(session.fuel_pickup_amount),
            _ => {}
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.end_run(GameOverReason::OutOfLives);
            return;
        }

        log::info!("Life lost, {} remaining", self.lives);
        self.world.spawn_player();
        let invulnerability = self.config.session.respawn_invulnerability;
        if let Some(player) = self.world.player_mut() {
            player.set_invulnerable(invulnerability);
        }
    }

    fn end_run(&mut self, reason: GameOverReason) {
        self.state = GameState::GameOver;
        self.game_over_reason = Some(reason);
        log::info!("Game over ({}), final score {}", reason, self.score);
    }

    /// Lifecycle state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Why the last run ended, if it has
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    /// Points earned this run
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lives left, including the current ship
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Fuel tank
    pub fn fuel(&self) -> &FuelTank {
        &self.fuel
    }

    /// Frame timing of this run
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// The simulated world
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Mutable world, for hosts that script extra entities
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MIN_SPAWN_INTERVAL;
    use crate::entities::{EnemyType, Projectile, ProjectileOwner};
    use crate::foundation::time::MAX_FIRES_PER_TICK;
    use approx::assert_relative_eq;

    /// A lane with no scheduled spawns and no initial asteroids
    fn empty_lane() -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.asteroids.initial_count = 0;
        config.spawning.enemy_interval = 0.0;
        config.spawning.powerup_interval = 0.0;
        config.particles.engine_trail = false;
        config
    }

    fn playing(config: SimulationConfig) -> GameSession {
        let mut session = GameSession::new(config, 3).unwrap();
        session.start();
        session
    }

    fn kill_player(session: &mut GameSession) {
        let player = session.world_mut().player_mut().unwrap();
        player.set_invulnerable(0.0);
        player.take_damage(10_000);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = SimulationConfig::default();
        config.projectiles.speed = 0.0;
        assert!(matches!(GameSession::new(config, 1), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_new_rejects_configs_that_cannot_run() {
        let mut config = SimulationConfig::default();
        config.spawning.enemy_interval = 1e-10;
        assert!(GameSession::new(config, 1).is_err());

        let mut config = SimulationConfig::default();
        config.asteroids.size = (0.5, f32::INFINITY);
        assert!(GameSession::new(config, 1).is_err());

        let mut config = SimulationConfig::default();
        config.spawning.asteroid_region.x = (-3e38, 3e38);
        assert!(GameSession::new(config, 1).is_err());
    }

    #[test]
    fn test_fast_spawn_interval_still_ticks() {
        let mut config = empty_lane();
        config.spawning.enemy_interval = MIN_SPAWN_INTERVAL;
        let mut session = playing(config);
        session.tick(1.0 / 60.0, &PlayerIntent::default());
        assert_eq!(session.world().enemies().len(), MAX_FIRES_PER_TICK as usize);
    }

    #[test]
    fn test_menu_ignores_ticks() {
        let mut session = GameSession::new(SimulationConfig::default(), 1).unwrap();
        assert_eq!(session.state(), GameState::MainMenu);
        assert!(session.tick(1.0, &PlayerIntent::default()).is_empty());
        assert_eq!(session.clock().frame_count(), 0);
        assert!(session.world().player().is_none());
    }

    #[test]
    fn test_start_builds_initial_field() {
        let session = playing(SimulationConfig::default());
        assert_eq!(session.state(), GameState::Playing);
        assert!(session.world().player().is_some());
        assert_eq!(session.world().asteroids().len(), 20);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.fuel().level(), 100.0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_pause_freezes_frames() {
        let mut session = playing(empty_lane());
        session.toggle_pause();
        assert_eq!(session.state(), GameState::Paused);
        session.tick(1.0, &PlayerIntent::default());
        assert_eq!(session.fuel().level(), 100.0);
        assert_eq!(session.clock().frame_count(), 0);

        session.toggle_pause();
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn test_fuel_drains_over_time() {
        let mut session = playing(empty_lane());
        session.tick(1.0, &PlayerIntent::default());
        assert_relative_eq!(session.fuel().level(), 98.8, epsilon = 1e-4);
    }

    #[test]
    fn test_empty_tank_ends_run() {
        let mut config = empty_lane();
        config.session.fuel_drain_per_second = 50.0;
        let mut session = playing(config);

        session.tick(1.0, &PlayerIntent::default());
        assert_eq!(session.state(), GameState::Playing);
        session.tick(1.0, &PlayerIntent::default());
        assert_eq!(session.state(), GameState::GameOver);
        assert_eq!(session.game_over_reason(), Some(GameOverReason::OutOfFuel));
    }

    #[test]
    fn test_destroyed_enemy_scores() {
        let mut session = playing(empty_lane());
        session
            .world_mut()
            .spawn_enemy(Vec3::new(6.0, 5.0, -12.0), EnemyType::Bomber);
        session.world_mut().enemies_mut()[0].take_damage(500);

        let events = session.tick(0.01, &PlayerIntent::default());

        assert_eq!(session.score(), 100);
        assert!(events
            .iter()
            .any(|event| matches!(event, WorldEvent::EnemyDestroyed { .. })));
    }

    #[test]
    fn test_hit_costs_fuel_and_pickup_refuels() {
        let mut config = empty_lane();
        config.session.fuel_drain_per_second = 0.0;
        config.session.fuel_loss_on_hit = 50.0;
        let mut session = playing(config);
        let target = session.world().player().unwrap().position();
        session
            .world_mut()
            .add_projectile(Projectile::new(target, Vec3::y(), ProjectileOwner::Enemy));
        session.world_mut().spawn_powerup(target, PowerType::Fuel);

        session.tick(0.01, &PlayerIntent::default());

        assert_eq!(session.fuel().level(), 80.0);
        assert_eq!(session.world().player().unwrap().core().health(), 90);
    }

    #[test]
    fn test_death_respawns_with_invulnerability() {
        let mut session = playing(empty_lane());
        let first = session.world().player().unwrap().id();
        kill_player(&mut session);

        session.tick(0.01, &PlayerIntent::default());

        assert_eq!(session.lives(), 2);
        assert_eq!(session.state(), GameState::Playing);
        let player = session.world().player().unwrap();
        assert!(player.is_alive());
        assert_ne!(player.id(), first);
        assert_relative_eq!(player.invulnerable(), 2.0);
    }

    #[test]
    fn test_last_life_ends_run() {
        let mut session = playing(empty_lane());
        for _ in 0..3 {
            kill_player(&mut session);
            session.tick(0.01, &PlayerIntent::default());
        }
        assert_eq!(session.lives(), 0);
        assert_eq!(session.state(), GameState::GameOver);
        assert_eq!(session.game_over_reason(), Some(GameOverReason::OutOfLives));
        assert!(session.tick(0.01, &PlayerIntent::default()).is_empty());
    }

    #[test]
    fn test_restart_resets_run() {
        let mut session = playing(empty_lane());
        for _ in 0..3 {
            kill_player(&mut session);
            session.tick(0.01, &PlayerIntent::default());
        }
        session.start();
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.fuel().level(), 100.0);
        assert_eq!(session.game_over_reason(), None);
    }

    #[test]
    fn test_intent_moves_and_fires() {
        let mut session = playing(empty_lane());
        let intent = PlayerIntent {
            movement: Vec3::new(1.0, 0.0, 0.0),
            rotation: Vec3::zeros(),
            fire: true,
        };

        let events = session.tick(0.1, &intent);

        let player = session.world().player().unwrap();
        assert_relative_eq!(player.position(), Vec3::new(0.5, 0.0, -2.0), epsilon = 1e-5);
        assert_eq!(session.world().projectiles().len(), 1);
        assert!(events.iter().any(|event| matches!(
            event,
            WorldEvent::ProjectileFired { owner: ProjectileOwner::Player, .. }
        )));
    }

    #[test]
    fn test_enemies_arrive_on_schedule() {
        let mut config = empty_lane();
        config.spawning.enemy_interval = 2.0;
        let mut session = playing(config);
        for _ in 0..4 {
            session.tick(0.5, &PlayerIntent::default());
        }
        assert_eq!(session.world().enemies().len(), 1);
    }
}
