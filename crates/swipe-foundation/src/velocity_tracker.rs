//! Horizontal velocity tracking for swipe releases.
//!
//! Uses the impulse strategy: each segment between two samples imparts
//! kinetic energy, and the accumulated energy is converted back into a speed.
//! This weighs the most recent motion heavily without the jitter of a plain
//! last-two-samples difference.

use crate::input::PointerEvent;

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Records the horizontal position of a pointer event.
    pub fn add_movement(&mut self, event: &PointerEvent) {
        self.add_data_point(event.uptime_millis, event.position.x);
    }

    /// Velocity in px/s, or 0.0 when fewer than two recent samples exist.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Collected newest first; `offsets` are non-positive ages in ms.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut offsets = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut newer = newest;

        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = newer.time_ms - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            newer = sample;
            positions[count] = sample.position;
            offsets[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &offsets[..count]) * 1000.0
    }

    /// Velocity clamped the way a drag release expects it: magnitudes below
    /// `min` collapse to zero and magnitudes above `max` are capped.
    pub fn release_velocity(&self, min: f32, max: f32) -> f32 {
        clamp_magnitude(self.calculate_velocity(), min, max)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Clamps `value` into `[min, max]` by magnitude, keeping its sign.
pub fn clamp_magnitude(value: f32, min: f32, max: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let magnitude = value.abs();
    if magnitude < min {
        0.0
    } else if magnitude > max {
        max.copysign(value)
    } else {
        value
    }
}

/// Per-millisecond velocity from samples ordered newest first.
fn impulse_velocity(positions: &[f32], offsets: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let (from_time, to_time) = (offsets[i], offsets[i - 1]);
        if from_time == to_time {
            continue;
        }
        let segment = (positions[i - 1] - positions[i]) / (to_time - from_time);
        let previous = kinetic_energy_to_velocity(work);
        work += (segment - previous) * segment.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = ½·v² with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
