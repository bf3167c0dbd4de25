//! Shared gesture constants for touch handling.
//!
//! All values are density-independent. [`crate::ViewConfiguration`] scales
//! them to device pixels for a given display density.

use crate::unit::Dp;

/// Minimum travel before a gesture is classified as horizontal or vertical.
/// Same as the common platform touch slop.
pub const TOUCH_SLOP: Dp = Dp(8.0);

/// Release speed above which a swipe counts as a fling, in dp per second.
pub const SWIPE_VELOCITY_THRESHOLD: Dp = Dp(1500.0);

/// Release speeds with a smaller magnitude are treated as zero, in dp per second.
pub const MIN_FLING_VELOCITY: Dp = Dp(50.0);

/// Release speeds are capped to this magnitude, in dp per second.
pub const MAX_FLING_VELOCITY: Dp = Dp(8_000.0);

/// Duration of programmatic open/close animations.
pub const PROGRAMMATIC_ANIMATION_MS: u64 = 200;
