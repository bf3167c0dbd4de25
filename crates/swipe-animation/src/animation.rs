//! Time-based tweens driven by the frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use swipe_core::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Quadratic ease-in, `t²`. Used for programmatic open and close.
    AccelerateEasing,
    /// Quintic ease-out, `1 + (t - 1)⁵`. Used for release settles.
    QuinticOutEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::AccelerateEasing => fraction * fraction,
            Easing::QuinticOutEasing => {
                let t = fraction - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

/// A running tween from `start` to `target`.
///
/// Every frame hands the interpolated value to `on_value`. After the frame
/// that reaches `target`, `on_end` runs once. Both callbacks run outside the
/// animation's own borrow, so they may cancel this tween or start another.
/// Dropping every handle cancels the pending frame.
pub struct TweenAnimation<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<TweenInner<T>>>,
}

struct TweenInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    running: bool,
    on_value: Rc<dyn Fn(T)>,
    on_end: Option<Box<dyn FnOnce()>>,
}

impl<T: Lerp + Clone + 'static> TweenAnimation<T> {
    /// Starts the tween. The first value is delivered on the next frame.
    pub fn start(
        clock: FrameClock,
        start: T,
        target: T,
        spec: AnimationSpec,
        on_value: impl Fn(T) + 'static,
        on_end: impl FnOnce() + 'static,
    ) -> Self {
        let inner = Rc::new(RefCell::new(TweenInner {
            clock,
            start,
            target,
            spec,
            start_time_nanos: None,
            registration: None,
            running: true,
            on_value: Rc::new(on_value),
            on_end: Some(Box::new(on_end)),
        }));
        Self::schedule_frame(&inner);
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Stops the tween without delivering further values or `on_end`.
    pub fn cancel(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            inner.running = false;
            inner.on_end = None;
            inner.registration.take()
        };
        if let Some(registration) = registration {
            registration.cancel();
        }
    }

    fn schedule_frame(this: &Rc<RefCell<TweenInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<TweenInner<T>>>, frame_time_nanos: u64) {
        let (value, on_value, on_end) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

            if linear_progress >= 1.0 {
                log::trace!("tween finished after {} ms", spec.duration_millis);
                inner.running = false;
                (inner.target.clone(), inner.on_value.clone(), inner.on_end.take())
            } else {
                let progress = spec.easing.transform(linear_progress);
                let value = inner.start.lerp(&inner.target, progress);
                (value, inner.on_value.clone(), None)
            }
        };

        on_value(value);

        match on_end {
            Some(on_end) => on_end(),
            None => Self::schedule_frame(this),
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for TweenAnimation<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
