//! Release velocity estimation.
//!
//! Keeps a short history of pointer samples and reports the average velocity
//! over the most recent window, which is what fling detection needs.

use std::collections::VecDeque;
use std::time::Duration;

use slideout_core::math::Vec2;

/// Only samples this recent contribute to the estimate.
pub const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Upper bound on retained samples.
const MAX_SAMPLES: usize = 20;

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Vec2,
    timestamp: Duration,
}

/// Tracks pointer motion for one session.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
        }
    }

    pub fn add(&mut self, position: Vec2, timestamp: Duration) {
        // Out-of-order timestamps would yield negative intervals.
        if let Some(last) = self.samples.back()
            && timestamp < last.timestamp
        {
            self.samples.clear();
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample {
            position,
            timestamp,
        });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Velocity in px/s over the trailing window, or zero if undetermined.
    pub fn velocity(&self) -> Vec2 {
        let Some(newest) = self.samples.back() else {
            return Vec2::ZERO;
        };
        let oldest = self
            .samples
            .iter()
            .find(|s| newest.timestamp - s.timestamp <= VELOCITY_WINDOW)
            .unwrap_or(newest);

        let dt = (newest.timestamp - oldest.timestamp).as_secs_f32();
        if dt <= f32::EPSILON {
            return Vec2::ZERO;
        }
        (newest.position - oldest.position) / dt
    }
}
