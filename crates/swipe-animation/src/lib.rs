//! Animation primitives for SwipeLayout.
//!
//! [`TweenAnimation`] drives time-based value changes from frame callbacks.
//! [`SettleScroller`] is the release-settle integrator: a quintic ease-out
//! over a duration derived from the release velocity.

mod animation;
mod scroller;

pub use animation::{AnimationSpec, Easing, Lerp, TweenAnimation};
pub use scroller::{
    settle_duration_millis, SettleScroller, BASE_SETTLE_DURATION_MS, MAX_SETTLE_DURATION_MS,
};
