use std::f32::consts::PI;

use swipe_foundation::velocity_tracker::clamp_magnitude;

use crate::animation::Easing;

/// Settle duration for a release without velocity over no distance.
pub const BASE_SETTLE_DURATION_MS: u64 = 256;

/// Upper bound for any settle run.
pub const MAX_SETTLE_DURATION_MS: u64 = 600;

/// Integrates one settle run of a released surface.
///
/// The run is anchored at the first frame it sees, like a tween, and
/// positions are rounded to whole pixels.
#[derive(Clone, Debug)]
pub struct SettleScroller {
    start_x: i32,
    delta_x: i32,
    duration_millis: u64,
    start_time_nanos: Option<u64>,
    current_x: i32,
    finished: bool,
}

impl SettleScroller {
    pub fn new(start_x: i32, delta_x: i32, duration_millis: u64) -> Self {
        Self {
            start_x,
            delta_x,
            duration_millis,
            start_time_nanos: None,
            current_x: start_x,
            finished: delta_x == 0,
        }
    }

    pub fn final_x(&self) -> i32 {
        self.start_x + self.delta_x
    }

    pub fn current_x(&self) -> i32 {
        self.current_x
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances to `frame_time_nanos` and returns the new position.
    pub fn compute(&mut self, frame_time_nanos: u64) -> i32 {
        if self.finished {
            return self.current_x;
        }
        let start = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_millis = frame_time_nanos.saturating_sub(start) / 1_000_000;

        if elapsed_millis >= self.duration_millis {
            self.current_x = self.final_x();
            self.finished = true;
        } else {
            let t = elapsed_millis as f32 / self.duration_millis as f32;
            let eased = Easing::QuinticOutEasing.transform(t);
            self.current_x = self.start_x + (eased * self.delta_x as f32).round() as i32;
        }
        self.current_x
    }

    /// Jumps straight to the final position.
    pub fn abort(&mut self) {
        self.current_x = self.final_x();
        self.finished = true;
    }
}

/// Settle duration in milliseconds for travelling `dx` pixels after a release
/// at `xvel` px/s.
///
/// `xvel` is clamped by magnitude to `[min_velocity, max_velocity]` first,
/// smaller magnitudes counting as no velocity. With velocity the duration
/// follows the distance the finger would have covered at that speed; without
/// it, the duration grows with the share of `drag_range` to travel.
pub fn settle_duration_millis(
    dx: i32,
    xvel: f32,
    drag_range: i32,
    parent_width: i32,
    min_velocity: f32,
    max_velocity: f32,
) -> u64 {
    if dx == 0 {
        return 0;
    }
    let velocity = clamp_magnitude(xvel, min_velocity, max_velocity).abs();
    let width = parent_width.max(1) as f32;
    let half_width = width / 2.0;
    let distance_ratio = (dx.abs() as f32 / width).min(1.0);
    let distance = half_width + half_width * distance_influence(distance_ratio);

    let duration = if velocity > 0.0 {
        4 * (1000.0 * (distance / velocity).abs()).round() as u64
    } else {
        let range = dx.abs() as f32 / drag_range.max(1) as f32;
        ((range + 1.0) * BASE_SETTLE_DURATION_MS as f32) as u64
    };
    duration.min(MAX_SETTLE_DURATION_MS)
}

/// Eases the influence of travel distance on the settle duration.
fn distance_influence(fraction: f32) -> f32 {
    ((fraction - 0.5) * 0.3 * PI / 2.0).sin()
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
