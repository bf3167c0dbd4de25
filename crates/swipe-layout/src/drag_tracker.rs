//! Pointer tracking for the captured surface.
//!
//! The tracker turns pointer events into capture, move and release outcomes.
//! It never touches the host: callers pass the surface under the pointer and
//! a snapshot of the current positions, and apply the outcome themselves.

use swipe_foundation::{Point, PointerEvent, PointerEventKind, VelocityTracker1D};

use crate::drag::{clamp_horizontal, SurfaceSnapshot};
use crate::surface::Gravity;

/// The surface being dragged and where its left edge was when captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub surface: Gravity,
    pub capture_left: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    None,
    Captured(Capture),
    /// The captured surface should move by `dx` px, already clamped.
    Moved { dx: i32 },
    /// The pointer let go. `xvel` is the clamped release velocity in px/s.
    Released { capture: Capture, xvel: f32 },
}

pub struct DragTracker {
    capture: Option<Capture>,
    velocity: VelocityTracker1D,
    initial: Point,
    last: Point,
    touch_slop: i32,
    min_velocity: f32,
    max_velocity: f32,
}

impl DragTracker {
    pub fn new(touch_slop: i32, min_velocity: f32, max_velocity: f32) -> Self {
        Self {
            capture: None,
            velocity: VelocityTracker1D::new(),
            initial: Point::ZERO,
            last: Point::ZERO,
            touch_slop,
            min_velocity,
            max_velocity,
        }
    }

    pub fn capture(&self) -> Option<Capture> {
        self.capture
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    /// Drops the capture without a release.
    pub fn abort(&mut self) {
        self.capture = None;
        self.velocity.reset();
    }

    /// Handles an event the panel already owns.
    ///
    /// A down captures whatever surface lies under it. Moves drag the
    /// captured surface by the distance since the previous event. Up and
    /// cancel release it, cancel with zero velocity.
    pub fn process(
        &mut self,
        event: &PointerEvent,
        hit: Option<Gravity>,
        snapshot: &SurfaceSnapshot,
    ) -> DragOutcome {
        if event.kind == PointerEventKind::Down {
            self.velocity.reset();
        }
        self.velocity.add_movement(event);

        match event.kind {
            PointerEventKind::Down => {
                self.initial = event.position;
                self.last = event.position;
                match hit {
                    Some(surface) => self.capture_surface(surface, snapshot),
                    None => {
                        self.capture = None;
                        DragOutcome::None
                    }
                }
            }
            PointerEventKind::Move => {
                let outcome = match self.capture {
                    Some(capture) => {
                        let idx = (event.position.x - self.last.x) as i32;
                        self.drag_by(capture.surface, idx, snapshot)
                    }
                    None => match hit {
                        Some(surface) if self.past_slop(event.position) => {
                            self.capture_surface(surface, snapshot)
                        }
                        _ => DragOutcome::None,
                    },
                };
                self.last = event.position;
                outcome
            }
            PointerEventKind::Up => self.release(true),
            PointerEventKind::Cancel => self.release(false),
        }
    }

    /// Watches an event on its way to a child and reports whether the panel
    /// should take over the gesture.
    ///
    /// `settling` is the surface of a running settle, which a down on that
    /// same surface grabs immediately.
    pub fn intercept(
        &mut self,
        event: &PointerEvent,
        hit: Option<Gravity>,
        snapshot: &SurfaceSnapshot,
        settling: Option<Gravity>,
    ) -> DragOutcome {
        if event.kind == PointerEventKind::Down {
            self.velocity.reset();
        }
        self.velocity.add_movement(event);

        match event.kind {
            PointerEventKind::Down => {
                self.initial = event.position;
                self.last = event.position;
                match (hit, settling) {
                    (Some(surface), Some(moving)) if surface == moving => {
                        self.capture_surface(surface, snapshot)
                    }
                    _ => {
                        self.capture = None;
                        DragOutcome::None
                    }
                }
            }
            PointerEventKind::Move => {
                let outcome = match (self.capture, hit) {
                    (None, Some(surface)) if self.past_slop(event.position) => {
                        let dx = (event.position.x - self.initial.x) as i32;
                        let old_left = snapshot.bounds(surface).left;
                        let clamped = clamp_horizontal(snapshot, surface, old_left + dx, dx);
                        // Only take over when the surface can actually move that way.
                        if clamped != old_left {
                            self.capture_surface(surface, snapshot)
                        } else {
                            DragOutcome::None
                        }
                    }
                    _ => DragOutcome::None,
                };
                self.last = event.position;
                outcome
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.velocity.reset();
                DragOutcome::None
            }
        }
    }

    fn past_slop(&self, position: Point) -> bool {
        (position.x - self.initial.x).abs() > self.touch_slop as f32
    }

    fn capture_surface(&mut self, surface: Gravity, snapshot: &SurfaceSnapshot) -> DragOutcome {
        let capture = Capture {
            surface,
            capture_left: snapshot.bounds(surface).left,
        };
        log::debug!("captured {:?} at {}", surface, capture.capture_left);
        self.capture = Some(capture);
        DragOutcome::Captured(capture)
    }

    fn drag_by(&self, surface: Gravity, idx: i32, snapshot: &SurfaceSnapshot) -> DragOutcome {
        let old_left = snapshot.bounds(surface).left;
        let clamped = clamp_horizontal(snapshot, surface, old_left + idx, idx);
        match clamped - old_left {
            0 => DragOutcome::None,
            dx => DragOutcome::Moved { dx },
        }
    }

    fn release(&mut self, with_velocity: bool) -> DragOutcome {
        let outcome = match self.capture.take() {
            Some(capture) => {
                let xvel = if with_velocity {
                    self.velocity
                        .release_velocity(self.min_velocity, self.max_velocity)
                } else {
                    0.0
                };
                DragOutcome::Released { capture, xvel }
            }
            None => DragOutcome::None,
        };
        self.velocity.reset();
        outcome
    }
}
