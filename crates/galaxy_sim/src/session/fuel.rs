//! Fuel bookkeeping

/// A tank that drains over time and refills from pickups.
/// The level always stays within `[0, capacity]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelTank {
    level: f32,
    capacity: f32,
}

impl FuelTank {
    /// A full tank
    pub fn new(capacity: f32) -> Self {
        let capacity = capacity.max(0.0);
        Self {
            level: capacity,
            capacity,
        }
    }

    /// Remove fuel
    pub fn drain(&mut self, amount: f32) {
        self.level = (self.level - amount.max(0.0)).max(0.0);
    }

    /// Add fuel, up to capacity
    pub fn refill(&mut self, amount: f32) {
        self.level = (self.level + amount.max(0.0)).min(self.capacity);
    }

    /// Fill the tank completely
    pub fn reset(&mut self) {
        self.level = self.capacity;
    }

    /// Current level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Maximum level
    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    /// Level as a fraction of capacity
    pub fn fraction(&self) -> f32 {
        if self.capacity > 0.0 {
            self.level / self.capacity
        } else {
            0.0
        }
    }

    /// Whether the tank is dry
    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }
}
