//! Collision resolution rules and their priority

use crate::core::config::SimulationConfig;
use crate::entities::{EnemyType, Entity, PowerType, Projectile, ProjectileOwner};
use crate::foundation::math::Vec3;
use crate::world::{GameWorld, WorldEvent};

/// World where enemies neither drift nor fire and the player leaves no trail
fn quiet_world() -> GameWorld {
    let mut config = SimulationConfig::default();
    config.enemies.approach_speed = 0.0;
    config.enemies.fire_at_player = false;
    config.particles.engine_trail = false;
    GameWorld::with_seed(config, 42)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_player_shot_damages_scout_then_destroys_it() {
        let mut world = quiet_world();
        world.spawn_player();
        let scout_position = Vec3::new(3.0, 0.0, -8.0);
        world.spawn_enemy(scout_position, EnemyType::Scout);

        world.add_projectile(Projectile::new(scout_position, Vec3::z(), ProjectileOwner::Player));
        world.check_collisions();

        let scout = &world.enemies()[0];
        assert_eq!(scout.core().health(), 5);
        assert!(scout.is_alive());
        assert!(world.projectiles().is_empty());

        world.add_projectile(Projectile::new(scout_position, Vec3::z(), ProjectileOwner::Player));
        world.check_collisions();
        assert_eq!(world.enemies()[0].core().health(), -20);
        assert!(!world.enemies()[0].is_alive());

        // Pruned, with its explosion, on the next update
        world.update(0.0);
        assert!(world.enemies().is_empty());
        assert_eq!(world.particles().len(), 20);
        let events = world.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            WorldEvent::EnemyDestroyed { enemy_type: EnemyType::Scout, .. }
        )));
    }

    #[test]
    fn test_first_enemy_hit_takes_the_shot() {
        let mut world = quiet_world();
        world.spawn_player();
        let position = Vec3::new(-4.0, 2.0, -9.0);
        world.spawn_enemy(position, EnemyType::Fighter);
        world.spawn_enemy(position, EnemyType::Fighter);

        world.add_projectile(Projectile::new(position, Vec3::z(), ProjectileOwner::Player));
        world.check_collisions();

        assert_eq!(world.enemies()[0].core().health(), 25);
        assert_eq!(world.enemies()[1].core().health(), 50);
    }

    #[test]
    fn test_shot_skips_dead_enemy() {
        let mut world = quiet_world();
        world.spawn_player();
        let position = Vec3::new(-4.0, 2.0, -9.0);
        world.spawn_enemy(position, EnemyType::Fighter);
        world.spawn_enemy(position, EnemyType::Fighter);
        world.enemies_mut()[0].take_damage(500);

        world.add_projectile(Projectile::new(position, Vec3::z(), ProjectileOwner::Player));
        world.check_collisions();

        assert_eq!(world.enemies()[0].core().health(), -450);
        assert_eq!(world.enemies()[1].core().health(), 25);
        assert!(world.projectiles().is_empty());
    }

    #[test]
    fn test_ramming_can_kill_both_ships() {
        let mut config = SimulationConfig::default();
        config.enemies.fire_at_player = false;
        config.particles.engine_trail = false;
        config.collisions.ship_contact_player_damage = 150;
        config.collisions.ship_contact_enemy_damage = 150;
        let mut world = GameWorld::with_seed(config, 9);
        world.spawn_player();
        let position = world.player().unwrap().position();
        world.spawn_enemy(position, EnemyType::Fighter);
        world.drain_events();

        world.check_collisions();

        assert!(!world.player().unwrap().is_alive());
        assert!(!world.enemies()[0].is_alive());
        assert_eq!(
            world.drain_events(),
            vec![
                WorldEvent::PlayerDamaged { amount: 150, health: -50 },
                WorldEvent::PlayerDestroyed { position },
            ]
        );

        world.update(0.0);
        assert!(world.enemies().is_empty());
        assert!(world.drain_events().iter().any(|event| matches!(
            event,
            WorldEvent::EnemyDestroyed { enemy_type: EnemyType::Fighter, .. }
        )));
    }

    #[test]
    fn test_nothing_resolves_without_player() {
        let mut world = quiet_world();
        let position = Vec3::new(0.0, 0.0, -8.0);
        world.spawn_enemy(position, EnemyType::Bomber);
        world.add_projectile(Projectile::new(position, Vec3::z(), ProjectileOwner::Player));

        world.check_collisions();

        assert_eq!(world.enemies()[0].core().health(), 100);
        assert_eq!(world.projectiles().len(), 1);
    }

    #[test]
    fn test_enemy_shot_hits_player() {
        let mut world = quiet_world();
        world.spawn_player();
        let shot_position = Vec3::new(0.0, 0.2, -2.0);
        world.add_projectile(Projectile::new(shot_position, Vec3::z(), ProjectileOwner::Enemy));
        world.drain_events();

        world.check_collisions();

        let player = world.player().unwrap();
        assert_eq!(player.core().health(), 90);
        assert_relative_eq!(player.invulnerable(), 1.0);
        assert!(world.projectiles().is_empty());
        assert_eq!(
            world.drain_events(),
            vec![WorldEvent::PlayerDamaged { amount: 10, health: 90 }]
        );
    }

    #[test]
    fn test_invulnerable_player_still_consumes_enemy_shot() {
        let mut world = quiet_world();
        world.spawn_player();
        world.player_mut().unwrap().set_invulnerable(1.0);
        let shot_position = Vec3::new(0.0, 0.0, -2.0);
        world.add_projectile(Projectile::new(shot_position, Vec3::z(), ProjectileOwner::Enemy));
        world.drain_events();

        world.check_collisions();

        assert_eq!(world.player().unwrap().core().health(), 100);
        assert!(world.projectiles().is_empty());
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_player_shots_ignore_player() {
        let mut world = quiet_world();
        world.spawn_player();
        world.player_shoot();
        world.check_collisions();
        assert_eq!(world.player().unwrap().core().health(), 100);
        assert_eq!(world.projectiles().len(), 1);
    }

    #[test]
    fn test_ramming_an_enemy_damages_both() {
        let mut world = quiet_world();
        world.spawn_player();
        world.spawn_enemy(Vec3::new(0.5, 0.0, -2.0), EnemyType::Fighter);

        world.check_collisions();

        assert_eq!(world.player().unwrap().core().health(), 90);
        assert_eq!(world.enemies()[0].core().health(), 30);
    }

    #[test]
    fn test_invulnerable_ram_still_hurts_enemy() {
        let mut world = quiet_world();
        world.spawn_player();
        world.player_mut().unwrap().set_invulnerable(3.0);
        world.spawn_enemy(Vec3::new(0.0, 0.0, -2.0), EnemyType::Scout);

        world.check_collisions();

        assert_eq!(world.player().unwrap().core().health(), 100);
        assert_eq!(world.enemies()[0].core().health(), 10);
    }

    #[test]
    fn test_asteroid_contact_and_replacement() {
        let mut world = quiet_world();
        world.spawn_player();
        let original = world.spawn_asteroid(Some(Vec3::new(0.0, 0.0, -3.0)), Some(1.0));
        assert_eq!(world.asteroids()[0].core().health(), 20);

        world.check_collisions();
        assert_eq!(world.player().unwrap().core().health(), 85);
        assert!(!world.asteroids()[0].is_alive());

        world.update(0.0);
        assert_eq!(world.asteroids().len(), 1);
        let replacement = &world.asteroids()[0];
        assert_ne!(replacement.id(), original);
        assert!(replacement.is_alive());
        assert!(replacement.position().z <= -10.0);
        assert_eq!(world.particles().len(), 30);
        assert!(world
            .drain_events()
            .iter()
            .any(|event| matches!(
                event,
                WorldEvent::AsteroidDestroyed { id, .. } if *id == original
            )));
    }

    #[test]
    fn test_lethal_contact_stops_later_rules() {
        let mut config = SimulationConfig::default();
        config.collisions.asteroid_player_damage = 200;
        config.particles.engine_trail = false;
        let mut world = GameWorld::with_seed(config, 7);
        world.spawn_player();
        world.spawn_asteroid(Some(Vec3::new(0.0, 0.5, -2.0)), Some(1.0));
        world.spawn_asteroid(Some(Vec3::new(0.0, -0.5, -2.0)), Some(1.0));
        world.spawn_powerup(Vec3::new(0.0, 0.0, -2.0), PowerType::Health);
        world.drain_events();

        world.check_collisions();

        assert!(!world.player().unwrap().is_alive());
        assert_eq!(world.asteroids()[0].core().health(), -30);
        assert_eq!(world.asteroids()[1].core().health(), 20);
        assert_eq!(world.powerups().len(), 1);
        assert_eq!(
            world.drain_events(),
            vec![
                WorldEvent::PlayerDamaged { amount: 200, health: -100 },
                WorldEvent::PlayerDestroyed { position: Vec3::new(0.0, 0.0, -2.0) },
            ]
        );
    }

    #[test]
    fn test_shield_pickup_overwrites_invulnerability() {
        let mut world = quiet_world();
        world.spawn_player();
        world.player_mut().unwrap().set_invulnerable(2.0);
        world.spawn_powerup(Vec3::new(0.3, 0.0, -2.0), PowerType::Shield);

        world.check_collisions();

        assert_relative_eq!(world.player().unwrap().invulnerable(), 5.0);
        assert!(world.powerups().is_empty());
        assert_eq!(
            world.drain_events(),
            vec![WorldEvent::PowerUpCollected { power_type: PowerType::Shield }]
        );
    }

    #[test]
    fn test_distant_powerup_stays() {
        let mut world = quiet_world();
        world.spawn_player();
        world.spawn_powerup(Vec3::new(0.0, 0.0, -9.0), PowerType::Weapon);
        world.check_collisions();
        assert_eq!(world.powerups().len(), 1);
    }
}
