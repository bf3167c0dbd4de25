use std::cell::RefCell;
use std::rc::Rc;

use swipe_animation::{AnimationSpec, Easing, TweenAnimation};
use swipe_core::{FrameClock, RuntimeHandle};
use swipe_foundation::gesture_constants::PROGRAMMATIC_ANIMATION_MS;
use swipe_foundation::{PointerEvent, PointerEventKind};

use crate::classifier::{ClassifyContext, SessionTransition, TouchClassifier, TouchState};
use crate::config::SwipeConfig;
use crate::drag::{resolve_release, ReleaseDecision, SurfaceSnapshot};
use crate::drag_tracker::{Capture, DragOutcome, DragTracker};
use crate::error::SwipeLayoutError;
use crate::host::SwipeHost;
use crate::notifier::StateNotifier;
use crate::settle::{SettleAnimator, SettleParams, SettleStep};
use crate::suppress::AncestorSuppressor;
use crate::surface::{Gravity, SurfaceSet};

/// Handle to one swipe panel.
///
/// Clones share the same panel. The panel reads every position from its
/// [`SwipeHost`]; `offset` is the CENTER surface's left edge, and the panel is
/// closed exactly when it is zero.
///
/// Before the first successful [`SwipeLayout::on_layout`] the panel has no
/// surfaces: `offset` reads 0, touch events are declined and animations do
/// not start.
#[derive(Clone)]
pub struct SwipeLayout {
    inner: Rc<RefCell<SwipeLayoutInner>>,
}

struct SwipeLayoutInner {
    host: Rc<dyn SwipeHost>,
    frame_clock: FrameClock,
    velocity_threshold: f32,
    touch_slop: i32,
    min_velocity: f32,
    max_velocity: f32,
    left_swipe_enabled: bool,
    right_swipe_enabled: bool,
    surfaces: Option<SurfaceSet>,
    classifier: TouchClassifier,
    tracker: DragTracker,
    suppressor: AncestorSuppressor,
    motion: Option<Motion>,
    next_motion_id: u64,
    interrupted: Option<Interrupted>,
    notifier: StateNotifier,
}

/// A motion a down grabbed, and the time of that down.
#[derive(Clone, Copy, Debug)]
struct Interrupted {
    target: i32,
    grabbed_at: i64,
}

/// The single animation a panel may run.
enum Motion {
    Settle {
        id: u64,
        animator: SettleAnimator,
    },
    Tween {
        id: u64,
        animation: TweenAnimation<f32>,
        target_offset: i32,
    },
}

impl Motion {
    fn target_offset(&self) -> i32 {
        match self {
            Motion::Settle { animator, .. } => animator.target_offset(),
            Motion::Tween { target_offset, .. } => *target_offset,
        }
    }

    fn cancel(self) {
        match self {
            Motion::Settle { .. } => {}
            Motion::Tween { animation, .. } => animation.cancel(),
        }
    }
}

impl SwipeLayoutInner {
    fn is_swipe_enabled(&self) -> bool {
        self.left_swipe_enabled || self.right_swipe_enabled
    }

    fn offset(&self) -> i32 {
        self.surfaces
            .map(|surfaces| self.host.bounds(surfaces.center()).left)
            .unwrap_or(0)
    }

    fn snapshot(&self) -> Option<SurfaceSnapshot> {
        self.surfaces
            .map(|surfaces| SurfaceSnapshot::capture(self.host.as_ref(), &surfaces))
    }

    fn hit(&self, event: &PointerEvent) -> Option<Gravity> {
        let surfaces = self.surfaces?;
        self.host
            .surface_at(event.position.x, event.position.y)
            .and_then(|id| surfaces.gravity_of(id))
    }

    fn settling_surface(&self) -> Option<Gravity> {
        match &self.motion {
            Some(Motion::Settle { animator, .. }) => Some(animator.surface()),
            _ => None,
        }
    }

    fn settle_params(&self) -> SettleParams {
        SettleParams {
            parent_width: self.host.width(),
            min_velocity: self.min_velocity,
            max_velocity: self.max_velocity,
        }
    }

    fn next_motion_id(&mut self) -> u64 {
        self.next_motion_id += 1;
        self.next_motion_id
    }

    /// Stops the running motion and returns the offset it was heading for.
    fn cancel_motion(&mut self) -> Option<i32> {
        let motion = self.motion.take()?;
        let target = motion.target_offset();
        motion.cancel();
        Some(target)
    }

    fn apply_offset(&self, offset: i32) {
        if self.surfaces.is_none() {
            return;
        }
        let dx = offset - self.offset();
        if dx != 0 {
            self.host.offset_surfaces(dx);
            self.host.invalidate();
        }
    }

    /// A new down that is not the one which grabbed a motion forgets it.
    fn forget_stale_grab(&mut self, event: &PointerEvent) {
        if event.kind == PointerEventKind::Down
            && self
                .interrupted
                .is_some_and(|grab| grab.grabbed_at != event.uptime_millis)
        {
            self.interrupted = None;
        }
    }

    fn apply_transition(&mut self, transition: SessionTransition) {
        match transition {
            SessionTransition::EnterSwipe => {
                self.host.request_disallow_intercept(true);
                self.suppressor.suppress(self.host.as_ref());
            }
            SessionTransition::ExitSwipe => {
                self.suppressor.restore();
                self.host.request_disallow_intercept(false);
            }
        }
    }
}

impl Drop for SwipeLayoutInner {
    fn drop(&mut self) {
        self.suppressor.restore();
    }
}

impl SwipeLayout {
    pub fn new(host: Rc<dyn SwipeHost>, runtime: RuntimeHandle, config: SwipeConfig) -> Self {
        let view_configuration = config.view_configuration();
        let (left_swipe_enabled, right_swipe_enabled) = config.attributes.resolve();
        let touch_slop = view_configuration.scaled_touch_slop();
        let min_velocity = view_configuration.min_fling_velocity();
        let max_velocity = view_configuration.max_fling_velocity();

        let inner = SwipeLayoutInner {
            host,
            frame_clock: runtime.frame_clock(),
            velocity_threshold: config.resolved_velocity_threshold(),
            touch_slop,
            min_velocity,
            max_velocity,
            left_swipe_enabled,
            right_swipe_enabled,
            surfaces: None,
            classifier: TouchClassifier::new(),
            tracker: DragTracker::new(touch_slop, min_velocity, max_velocity),
            suppressor: AncestorSuppressor::new(),
            motion: None,
            next_motion_id: 0,
            interrupted: None,
            notifier: StateNotifier::default(),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Re-reads the surface set from the host.
    ///
    /// Call after the host lays its surfaces out. Without a visible center
    /// surface the panel drops back to having no surfaces.
    pub fn on_layout(&self) -> Result<(), SwipeLayoutError> {
        let mut inner = self.inner.borrow_mut();
        let specs = inner.host.surfaces();
        match SurfaceSet::resolve(&specs) {
            Ok(surfaces) => {
                inner.surfaces = Some(surfaces);
                Ok(())
            }
            Err(err) => {
                log::error!("{err}");
                inner.cancel_motion();
                inner.interrupted = None;
                inner.tracker.abort();
                if let Some(transition) = inner.classifier.reset() {
                    inner.apply_transition(transition);
                }
                inner.surfaces = None;
                Err(err)
            }
        }
    }

    pub fn offset(&self) -> i32 {
        self.inner.borrow().offset()
    }

    /// Moves the panel to `offset` at once, stopping any animation.
    pub fn set_offset(&self, offset: i32) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_motion();
        inner.interrupted = None;
        inner.apply_offset(offset);
    }

    pub fn is_open(&self) -> bool {
        self.offset() != 0
    }

    pub fn is_close(&self) -> bool {
        self.offset() == 0
    }

    /// Animates back to the closed position. Does nothing when closed.
    pub fn close(&self) {
        let closed = {
            let inner = self.inner.borrow();
            inner.surfaces.is_none() || inner.offset() == 0
        };
        if !closed {
            self.start_tween(0);
        }
    }

    pub fn animate_reset(&self) {
        self.close();
    }

    /// Animates the RIGHT surface fully into view. Ignores the enable flags.
    pub fn animate_swipe_left(&self) {
        let target = {
            let inner = self.inner.borrow();
            inner
                .surfaces
                .and_then(|surfaces| surfaces.right())
                .map(|side| -inner.host.bounds(side.id).width)
        };
        if let Some(target) = target {
            self.start_tween(target);
        }
    }

    /// Animates the LEFT surface fully into view. Ignores the enable flags.
    pub fn animate_swipe_right(&self) {
        let target = {
            let inner = self.inner.borrow();
            inner
                .surfaces
                .and_then(|surfaces| surfaces.left())
                .map(|side| inner.host.bounds(side.id).width)
        };
        if let Some(target) = target {
            self.start_tween(target);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().motion.is_some()
    }

    pub fn touch_state(&self) -> TouchState {
        self.inner.borrow().classifier.state()
    }

    pub fn is_swipe_enabled(&self) -> bool {
        self.inner.borrow().is_swipe_enabled()
    }

    pub fn is_left_swipe_enabled(&self) -> bool {
        self.inner.borrow().left_swipe_enabled
    }

    pub fn is_right_swipe_enabled(&self) -> bool {
        self.inner.borrow().right_swipe_enabled
    }

    pub fn set_swipe_enabled(&self, enabled: bool) {
        let mut inner = self.inner.borrow_mut();
        inner.left_swipe_enabled = enabled;
        inner.right_swipe_enabled = enabled;
    }

    pub fn set_left_swipe_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().left_swipe_enabled = enabled;
    }

    pub fn set_right_swipe_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().right_swipe_enabled = enabled;
    }

    /// Replaces the listener called whenever a gesture or animation resolves.
    ///
    /// The listener gets the layout as an argument; capturing a clone of it
    /// would keep the panel alive forever.
    pub fn set_on_state_changed_listener(&self, listener: impl Fn(bool, &SwipeLayout) + 'static) {
        self.inner.borrow_mut().notifier.set(Rc::new(listener));
    }

    pub fn clear_on_state_changed_listener(&self) {
        self.inner.borrow_mut().notifier.clear();
    }

    /// Watches an event headed for a child surface. Returns `true` once the
    /// panel takes the gesture over; later events then go to
    /// [`SwipeLayout::on_touch_event`].
    pub fn on_intercept_touch_event(&self, event: &PointerEvent) -> bool {
        let (outcome, intercept) = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if !inner.is_swipe_enabled() {
                return false;
            }
            let Some(snapshot) = inner.snapshot() else {
                return false;
            };
            inner.forget_stale_grab(event);
            if event.kind == PointerEventKind::Down {
                if let Some(transition) = inner.classifier.begin(event.position) {
                    inner.apply_transition(transition);
                }
            }
            let settling = inner.settling_surface();
            let hit = inner.hit(event);
            let outcome = inner.tracker.intercept(event, hit, &snapshot, settling);
            (outcome, inner.tracker.is_dragging())
        };
        self.handle_outcome(outcome, event.uptime_millis);
        intercept
    }

    /// Handles an event the panel owns. Returns whether the panel consumed it.
    pub fn on_touch_event(&self, event: &PointerEvent) -> bool {
        let outcome = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if !inner.is_swipe_enabled() {
                return false;
            }
            let Some(snapshot) = inner.snapshot() else {
                return false;
            };
            inner.forget_stale_grab(event);
            let context = ClassifyContext {
                touch_slop: inner.touch_slop,
                left_swipe_enabled: inner.left_swipe_enabled,
                right_swipe_enabled: inner.right_swipe_enabled,
                is_closed: snapshot.center.left == 0,
            };
            let classification = inner.classifier.classify(event, &context);
            if let Some(transition) = classification.transition {
                inner.apply_transition(transition);
            }
            if !classification.handled {
                return false;
            }
            if classification.forward_to_drag {
                let hit = inner.hit(event);
                inner.tracker.process(event, hit, &snapshot)
            } else {
                DragOutcome::None
            }
        };
        event.consume();
        self.handle_outcome(outcome, event.uptime_millis);
        true
    }

    fn handle_outcome(&self, outcome: DragOutcome, uptime_millis: i64) {
        match outcome {
            DragOutcome::None => {}
            DragOutcome::Captured(_) => {
                let mut inner = self.inner.borrow_mut();
                if let Some(target) = inner.cancel_motion() {
                    inner.interrupted = Some(Interrupted {
                        target,
                        grabbed_at: uptime_millis,
                    });
                }
            }
            DragOutcome::Moved { dx } => {
                let inner = self.inner.borrow();
                inner.host.offset_surfaces(dx);
                inner.host.invalidate();
                log::trace!("dragged by {dx}");
            }
            DragOutcome::Released { capture, xvel } => self.on_release(capture, xvel),
        }
    }

    fn on_release(&self, capture: Capture, xvel: f32) {
        let (decision, interrupted, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.interrupted.take().map(|grab| grab.target);
            let Some(snapshot) = inner.snapshot() else {
                return;
            };
            let decision = resolve_release(
                &snapshot,
                capture.surface,
                capture.capture_left,
                xvel,
                inner.velocity_threshold,
            );
            (decision, interrupted, snapshot)
        };
        log::debug!(
            "released {:?} at {xvel} px/s: {:?}",
            capture.surface,
            decision
        );

        let from_left = snapshot.bounds(capture.surface).left;
        match decision {
            ReleaseDecision::Ignore => {
                // A tap on a moving panel lets it carry on to where it was going.
                if let Some(target) = interrupted {
                    let target_left = from_left + (target - snapshot.center.left);
                    self.start_settle(capture.surface, from_left, target_left, xvel);
                }
            }
            ReleaseDecision::OpenInPlace => self.notify_state(),
            ReleaseDecision::Settle { target_left, .. } => {
                self.start_settle(capture.surface, from_left, target_left, xvel);
            }
        }
    }

    fn start_settle(&self, surface: Gravity, from_left: i32, target_left: i32, xvel: f32) {
        let started = {
            let mut inner = self.inner.borrow_mut();
            let offset = inner.offset();
            let params = inner.settle_params();
            inner.cancel_motion();
            match SettleAnimator::start(surface, from_left, target_left, offset, xvel, params) {
                Some(animator) => {
                    let id = inner.next_motion_id();
                    inner.motion = Some(Motion::Settle { id, animator });
                    Some(id)
                }
                None => None,
            }
        };
        match started {
            Some(id) => self.schedule_settle_frame(id),
            None => self.notify_state(),
        }
    }

    fn schedule_settle_frame(&self, id: u64) {
        let weak = Rc::downgrade(&self.inner);
        let clock = self.inner.borrow().frame_clock.clone();
        let registration = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(inner) = weak.upgrade() {
                SwipeLayout { inner }.on_settle_frame(id, frame_time_nanos);
            }
        });
        let mut inner = self.inner.borrow_mut();
        if let Some(Motion::Settle {
            id: current,
            animator,
        }) = inner.motion.as_mut()
        {
            if *current == id {
                animator.set_registration(registration);
            }
        }
    }

    fn on_settle_frame(&self, id: u64, frame_time_nanos: u64) {
        let step = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let Some(surfaces) = inner.surfaces else {
                inner.motion = None;
                return;
            };
            match inner.motion.as_mut() {
                Some(Motion::Settle {
                    id: current,
                    animator,
                }) if *current == id => {
                    animator.step(inner.host.as_ref(), &surfaces, frame_time_nanos)
                }
                _ => return,
            }
        };

        match step {
            SettleStep::Continue => self.schedule_settle_frame(id),
            SettleStep::Finished => {
                self.inner.borrow_mut().motion = None;
                self.notify_state();
            }
        }
    }

    fn start_tween(&self, target: i32) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        inner.cancel_motion();
        inner.tracker.abort();
        inner.interrupted = None;

        let id = inner.next_motion_id();
        let start = inner.offset();
        log::debug!("animating offset from {start} to {target}");

        let on_value = {
            let weak = weak.clone();
            move |value: f32| {
                if let Some(inner) = weak.upgrade() {
                    SwipeLayout { inner }.on_tween_value(id, value as i32);
                }
            }
        };
        let on_end = move || {
            if let Some(inner) = weak.upgrade() {
                SwipeLayout { inner }.on_tween_end(id);
            }
        };
        let animation = TweenAnimation::start(
            inner.frame_clock.clone(),
            start as f32,
            target as f32,
            AnimationSpec::tween(PROGRAMMATIC_ANIMATION_MS, Easing::AccelerateEasing),
            on_value,
            on_end,
        );
        inner.motion = Some(Motion::Tween {
            id,
            animation,
            target_offset: target,
        });
    }

    fn on_tween_value(&self, id: u64, offset: i32) {
        let inner = self.inner.borrow();
        if matches!(inner.motion, Some(Motion::Tween { id: current, .. }) if current == id) {
            inner.apply_offset(offset);
        }
    }

    fn on_tween_end(&self, id: u64) {
        {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.motion, Some(Motion::Tween { id: current, .. }) if current == id) {
                return;
            }
            inner.motion = None;
        }
        self.notify_state();
    }

    fn notify_state(&self) {
        let (listener, is_open) = {
            let inner = self.inner.borrow();
            (inner.notifier.listener(), inner.offset() != 0)
        };
        log::debug!("swipe state resolved, open: {is_open}");
        if let Some(listener) = listener {
            listener(is_open, self);
        }
    }
}
