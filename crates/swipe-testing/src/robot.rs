//! Robot-style gesture driver for swipe panels.
//!
//! # Example
//!
//! ```
//! use swipe_layout::SwipeConfig;
//! use swipe_testing::{SwipeRobot, TestHost};
//!
//! let host = TestHost::builder(300).left(100).build();
//! let mut robot = SwipeRobot::launch(host, SwipeConfig::default()).expect("center surface");
//!
//! robot.drag_horizontally(150.0, 10.0, 290.0, 14, 4);
//! robot.run_until_idle();
//! assert_eq!(robot.layout().offset(), 100);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use swipe_core::{Runtime, RuntimeHandle};
use swipe_foundation::{Point, PointerEvent, PointerEventKind};
use swipe_layout::{SwipeConfig, SwipeHost, SwipeLayout, SwipeLayoutError};

use crate::test_host::TestHost;

/// One display frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames `run_until_idle` will pump.
const MAX_IDLE_FRAMES: usize = 1_000;

/// How pointer events reach the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// No child consumes the down, so the panel sees every event through
    /// `on_touch_event` (the down also passes the intercept check first).
    Direct,
    /// A child consumes events until the panel intercepts. The intercepting
    /// event itself only reaches `on_touch_event` when it is the down.
    ThroughChild,
}

/// Owns a runtime, a host and a panel, and plays gestures against them.
///
/// Pointer timestamps and frame times share one clock, advanced explicitly
/// by each call.
pub struct SwipeRobot {
    runtime: Runtime,
    host: Rc<TestHost>,
    layout: SwipeLayout,
    route: Route,
    intercepted: bool,
    now_nanos: u64,
    pointer: Point,
}

impl SwipeRobot {
    /// Builds the panel over `host` and runs its first layout pass.
    pub fn launch(host: Rc<TestHost>, config: SwipeConfig) -> Result<Self, SwipeLayoutError> {
        let runtime = Runtime::default();
        let dyn_host: Rc<dyn SwipeHost> = host.clone();
        let layout = SwipeLayout::new(dyn_host, runtime.handle(), config);
        layout.on_layout()?;
        Ok(Self {
            runtime,
            host,
            layout,
            route: Route::Direct,
            intercepted: false,
            now_nanos: 1_000 * 1_000_000,
            pointer: Point::ZERO,
        })
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    pub fn layout(&self) -> &SwipeLayout {
        &self.layout
    }

    pub fn host(&self) -> &Rc<TestHost> {
        &self.host
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn now_millis(&self) -> i64 {
        (self.now_nanos / 1_000_000) as i64
    }

    /// Installs a listener that records every reported open state.
    pub fn record_states(&self) -> Rc<RefCell<Vec<bool>>> {
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        self.layout
            .set_on_state_changed_listener(move |is_open, _| sink.borrow_mut().push(is_open));
        states
    }

    /// Whether the panel took over the current gesture from the child.
    pub fn intercepted(&self) -> bool {
        self.intercepted
    }

    pub fn down(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);
        let event = PointerEvent::down(x, y, self.now_millis());
        self.dispatch(&event)
    }

    pub fn move_to(&mut self, x: f32, y: f32, after_millis: u64) -> bool {
        self.advance_clock(after_millis);
        self.pointer = Point::new(x, y);
        let event = PointerEvent::moved(x, y, self.now_millis());
        self.dispatch(&event)
    }

    /// Lifts the pointer where it last was.
    pub fn up(&mut self, after_millis: u64) -> bool {
        self.advance_clock(after_millis);
        let event = PointerEvent::up(self.pointer.x, self.pointer.y, self.now_millis());
        self.dispatch(&event)
    }

    pub fn cancel(&mut self) -> bool {
        let event = PointerEvent::cancel(self.pointer.x, self.pointer.y, self.now_millis());
        self.dispatch(&event)
    }

    /// Down at `from_x`, `steps` evenly spaced moves to `to_x` every
    /// `step_millis`, then up at once.
    pub fn drag_horizontally(&mut self, from_x: f32, y: f32, to_x: f32, steps: u32, step_millis: u64) {
        self.down(from_x, y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.move_to(x, y, step_millis);
        }
        self.up(0);
    }

    pub fn advance_frame(&mut self) {
        self.advance_clock_nanos(FRAME_NANOS);
        self.runtime.handle().drain_frame_callbacks(self.now_nanos);
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Pumps frames until no callbacks are pending. Returns the frame count.
    pub fn run_until_idle(&mut self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() && frames < MAX_IDLE_FRAMES {
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    fn advance_clock(&mut self, millis: u64) {
        self.advance_clock_nanos(millis * 1_000_000);
    }

    fn advance_clock_nanos(&mut self, nanos: u64) {
        self.now_nanos += nanos;
    }

    fn dispatch(&mut self, event: &PointerEvent) -> bool {
        match self.route {
            Route::Direct => {
                if event.kind == PointerEventKind::Down {
                    self.layout.on_intercept_touch_event(event);
                }
                self.layout.on_touch_event(event)
            }
            Route::ThroughChild => {
                if event.kind == PointerEventKind::Down {
                    self.intercepted = false;
                }
                if self.intercepted {
                    return self.layout.on_touch_event(event);
                }
                self.intercepted = self.layout.on_intercept_touch_event(event);
                if self.intercepted && event.kind == PointerEventKind::Down {
                    self.layout.on_touch_event(event);
                }
                self.intercepted
            }
        }
    }
}
