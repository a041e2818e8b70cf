//! Math utilities and types
//!
//! Provides the vector type used by every entity in the lane.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Extension trait for Vec3 with the operations the simulation relies on
pub trait Vec3Ext {
    /// Euclidean length
    fn length(&self) -> f32;

    /// Unit vector in the same direction, or the zero vector when the input
    /// has zero length
    fn normalize_or_zero(&self) -> Vec3;

    /// Distance to another point
    fn distance_to(&self, other: &Vec3) -> f32;
}

impl Vec3Ext for Vec3 {
    fn length(&self) -> f32 {
        self.magnitude()
    }

    fn normalize_or_zero(&self) -> Vec3 {
        let length = self.magnitude();
        if length > 0.0 {
            self / length
        } else {
            Vec3::zeros()
        }
    }

    fn distance_to(&self, other: &Vec3) -> f32 {
        (self - other).magnitude()
    }
}

/// Math utility functions
pub mod utils {
    /// Subtract `delta_time` from a countdown timer, clamping at zero
    pub fn tick_down(timer: f32, delta_time: f32) -> f32 {
        (timer - delta_time).max(0.0)
    }
}
