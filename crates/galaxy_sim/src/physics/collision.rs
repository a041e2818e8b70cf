//! Sphere-sphere collision tests

use crate::entities::Entity;
use crate::foundation::math::Vec3;

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in lane space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere around an entity's position using its collision radius
    pub fn from_entity<E: Entity + ?Sized>(entity: &E) -> Self {
        Self::new(entity.position(), entity.collision_radius())
    }

    /// Check if this sphere overlaps another. Touching spheres do not collide.
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared < radius_sum * radius_sum
    }
}

/// Whether two entities' collision spheres overlap
pub fn is_colliding<A, B>(a: &A, b: &B) -> bool
where
    A: Entity + ?Sized,
    B: Entity + ?Sized,
{
    BoundingSphere::from_entity(a).intersects(&BoundingSphere::from_entity(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Asteroid, EnemyShip, EnemyType, PlayerShip, PowerType, PowerUp};

    #[test]
    fn test_sphere_intersection() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        let c = BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_spheres_do_not_collide() {
        let a = BoundingSphere::new(Vec3::zeros(), 0.5);
        let b = BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 0.5);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_ships_use_default_radius() {
        let player = PlayerShip::new();
        let near = EnemyShip::new(Vec3::new(0.0, 0.9, -2.0), EnemyType::Fighter);
        let far = EnemyShip::new(Vec3::new(0.0, 1.1, -2.0), EnemyType::Fighter);

        assert!(is_colliding(&player, &near));
        assert!(!is_colliding(&player, &far));
    }

    #[test]
    fn test_asteroid_radius_is_its_size() {
        let player = PlayerShip::new();
        let asteroid = Asteroid::new(Vec3::new(0.0, 0.0, -4.4), 2.0);
        assert!(is_colliding(&player, &asteroid));

        let small = Asteroid::new(Vec3::new(0.0, 0.0, -4.4), 1.0);
        assert!(!is_colliding(&player, &small));
    }

    #[test]
    fn test_collision_is_symmetric() {
        let asteroid = Asteroid::new(Vec3::new(1.0, 1.0, -6.0), 1.5);
        let powerup = PowerUp::new(Vec3::new(1.5, 2.0, -5.5), PowerType::Fuel);
        let enemy = EnemyShip::new(Vec3::new(4.0, 1.0, -6.0), EnemyType::Scout);

        assert_eq!(is_colliding(&asteroid, &powerup), is_colliding(&powerup, &asteroid));
        assert_eq!(is_colliding(&asteroid, &enemy), is_colliding(&enemy, &asteroid));
        assert!(is_colliding(&asteroid, &powerup));
        assert!(!is_colliding(&asteroid, &enemy));
    }

    #[test]
    fn test_trait_objects_collide() {
        let player = PlayerShip::new();
        let asteroid = Asteroid::new(Vec3::new(0.0, 0.0, -2.5), 1.0);
        let a: &dyn Entity = &player;
        let b: &dyn Entity = &asteroid;
        assert!(is_colliding(a, b));
    }
}
