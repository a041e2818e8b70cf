//! Time management utilities
//!
//! The simulation never samples the wall clock. Hosts feed elapsed seconds
//! in, and these types keep the running totals.

/// Frame clock advanced by caller-supplied deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Create a new clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame of `delta_time` seconds
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time.max(0.0);
        self.total_time += self.delta_time;
        self.frame_count += 1;
    }

    /// Get the time of the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total simulated time
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average frame rate of the simulated run
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }

    /// Reset to time zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Most firings a single `IntervalTimer::tick` reports
pub const MAX_FIRES_PER_TICK: u32 = 8;

/// Repeating timer that fires once every `interval` seconds
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: f32,
    elapsed: f32,
}

impl IntervalTimer {
    /// Create a timer firing every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Advance the timer and return how many times it fired.
    ///
    /// A non-positive interval never fires. At most [`MAX_FIRES_PER_TICK`]
    /// firings are reported; whole periods beyond that are dropped.
    #[allow(clippy::cast_sign_loss)]
    pub fn tick(&mut self, delta_time: f32) -> u32 {
        if self.interval <= 0.0 || !self.interval.is_finite() {
            return 0;
        }
        self.elapsed += delta_time.max(0.0);
        if self.elapsed < self.interval {
            return 0;
        }
        let periods = (self.elapsed / self.interval).floor();
        self.elapsed = self.elapsed.rem_euclid(self.interval).min(self.interval);
        periods.min(MAX_FIRES_PER_TICK as f32) as u32
    }

    /// Seconds accumulated toward the next firing
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Configured interval
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Restart the countdown
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
