//! Frame-by-frame settling of a released surface.

use swipe_animation::{settle_duration_millis, SettleScroller};
use swipe_core::FrameCallbackRegistration;

use crate::host::SwipeHost;
use crate::surface::{Gravity, SurfaceSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SettleStep {
    Continue,
    Finished,
}

/// Velocity limits and travel range for computing a settle duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SettleParams {
    pub parent_width: i32,
    pub min_velocity: f32,
    pub max_velocity: f32,
}

/// Moves a released surface to its target over several frames.
pub(crate) struct SettleAnimator {
    surface: Gravity,
    scroller: SettleScroller,
    target_offset: i32,
    registration: Option<FrameCallbackRegistration>,
}

impl SettleAnimator {
    /// Plans a settle of `surface` from `from_left` to `target_left`.
    ///
    /// Returns `None` when there is nothing to move.
    pub(crate) fn start(
        surface: Gravity,
        from_left: i32,
        target_left: i32,
        current_offset: i32,
        xvel: f32,
        params: SettleParams,
    ) -> Option<Self> {
        let dx = target_left - from_left;
        if dx == 0 {
            return None;
        }
        let duration = settle_duration_millis(
            dx,
            xvel,
            params.parent_width,
            params.parent_width,
            params.min_velocity,
            params.max_velocity,
        );
        log::debug!(
            "settling {:?} from {} to {} over {} ms",
            surface,
            from_left,
            target_left,
            duration
        );
        Some(Self {
            surface,
            scroller: SettleScroller::new(from_left, dx, duration),
            target_offset: current_offset + dx,
            registration: None,
        })
    }

    pub(crate) fn surface(&self) -> Gravity {
        self.surface
    }

    /// Panel offset once this settle completes.
    pub(crate) fn target_offset(&self) -> i32 {
        self.target_offset
    }

    pub(crate) fn set_registration(&mut self, registration: FrameCallbackRegistration) {
        self.registration = Some(registration);
    }

    /// Advances one frame and moves every surface by the delta.
    pub(crate) fn step(
        &mut self,
        host: &dyn SwipeHost,
        surfaces: &SurfaceSet,
        frame_time_nanos: u64,
    ) -> SettleStep {
        self.registration = None;
        let Some(id) = surfaces.id_of(self.surface) else {
            log::debug!("settling surface {:?} disappeared", self.surface);
            return SettleStep::Finished;
        };

        let x = self.scroller.compute(frame_time_nanos);
        let dx = x - host.bounds(id).left;
        if dx != 0 {
            host.offset_surfaces(dx);
            host.invalidate();
        }
        log::trace!("settle frame at {x}");

        if x == self.scroller.final_x() {
            self.scroller.abort();
            SettleStep::Finished
        } else {
            SettleStep::Continue
        }
    }
}
