//! Physics module for collision detection
//!
//! The lane holds a few dozen entities at most, so every pair is tested
//! directly with bounding spheres; there is no broad phase.

pub mod collision;

pub use collision::{BoundingSphere, is_colliding};
