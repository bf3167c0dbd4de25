use crate::gesture_constants::{
    MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, SWIPE_VELOCITY_THRESHOLD, TOUCH_SLOP,
};
use crate::unit::Px;

/// Density-scaled gesture thresholds for one display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    density: f32,
}

impl ViewConfiguration {
    pub fn new(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            log::warn!("invalid display density {density}, falling back to 1.0");
            1.0
        };
        Self { density }
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Touch slop in whole pixels.
    pub fn scaled_touch_slop(&self) -> i32 {
        Px(TOUCH_SLOP.to_px(self.density)).round_to_int()
    }

    /// Fling threshold for swipe releases, in px/s.
    pub fn swipe_velocity_threshold(&self) -> f32 {
        SWIPE_VELOCITY_THRESHOLD.to_px(self.density)
    }

    pub fn min_fling_velocity(&self) -> f32 {
        MIN_FLING_VELOCITY.to_px(self.density)
    }

    pub fn max_fling_velocity(&self) -> f32 {
        MAX_FLING_VELOCITY.to_px(self.density)
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::new(1.0)
    }
}
