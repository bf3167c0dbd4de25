//! Clamping and release resolution for a dragged surface.
//!
//! Everything here is a pure function of a [`SurfaceSnapshot`], the surface
//! positions at the moment of the decision. `dragged` names the captured
//! surface by gravity, and `left` values are that surface's left edge.

use crate::host::SwipeHost;
use crate::surface::{AutoOpen, Gravity, SurfaceBounds, SurfaceSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideBounds {
    pub bounds: SurfaceBounds,
    pub auto_open: AutoOpen,
}

/// Surface positions read from the host at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub parent_width: i32,
    pub center: SurfaceBounds,
    pub left: Option<SideBounds>,
    pub right: Option<SideBounds>,
}

impl SurfaceSnapshot {
    pub fn capture(host: &dyn SwipeHost, surfaces: &SurfaceSet) -> Self {
        let side = |side: Option<crate::surface::SideSurface>| {
            side.map(|side| SideBounds {
                bounds: host.bounds(side.id),
                auto_open: side.auto_open,
            })
        };
        Self {
            parent_width: host.width(),
            center: host.bounds(surfaces.center()),
            left: side(surfaces.left()),
            right: side(surfaces.right()),
        }
    }

    /// Bounds of the surface with `gravity`. A side that is not present
    /// reads as the center.
    pub fn bounds(&self, gravity: Gravity) -> SurfaceBounds {
        match gravity {
            Gravity::Center => self.center,
            Gravity::Left => self.left.map_or(self.center, |side| side.bounds),
            Gravity::Right => self.right.map_or(self.center, |side| side.bounds),
        }
    }

    /// The same snapshot after every surface moved by `dx`.
    pub fn shifted(&self, dx: i32) -> Self {
        let shift = |bounds: SurfaceBounds| SurfaceBounds::new(bounds.left + dx, bounds.width);
        let shift_side = |side: Option<SideBounds>| {
            side.map(|side| SideBounds {
                bounds: shift(side.bounds),
                auto_open: side.auto_open,
            })
        };
        Self {
            parent_width: self.parent_width,
            center: shift(self.center),
            left: shift_side(self.left),
            right: shift_side(self.right),
        }
    }
}

/// Bounds a rightward move of `dragged` to `left`.
///
/// With a LEFT surface the travel stops once it is fully revealed. Without
/// one the center cannot pass its resting position.
pub fn clamp_move_right(snapshot: &SurfaceSnapshot, dragged: Gravity, left: i32) -> i32 {
    let child = snapshot.bounds(dragged);
    match snapshot.left {
        Some(side) => left.min(child.left - side.bounds.left),
        None if dragged == Gravity::Center => left.min(0),
        None => left.min(snapshot.parent_width),
    }
}

/// Bounds a leftward move of `dragged` to `left`, mirroring
/// [`clamp_move_right`] with the RIGHT surface.
pub fn clamp_move_left(snapshot: &SurfaceSnapshot, dragged: Gravity, left: i32) -> i32 {
    let child = snapshot.bounds(dragged);
    match snapshot.right {
        Some(side) => left.max(
            snapshot.parent_width - side.bounds.left + child.left - side.bounds.width,
        ),
        None if dragged == Gravity::Center => left.max(0),
        None => left.max(-child.width),
    }
}

pub fn clamp_horizontal(
    snapshot: &SurfaceSnapshot,
    dragged: Gravity,
    proposed_left: i32,
    dx: i32,
) -> i32 {
    if dx > 0 {
        clamp_move_right(snapshot, dragged, proposed_left)
    } else {
        clamp_move_left(snapshot, dragged, proposed_left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleReason {
    /// Release speed crossed the fling threshold.
    Fling,
    /// The side being revealed does not exist, so the panel closes.
    NoSideSurface,
    /// The side was revealed past its auto-open distance.
    AutoOpen,
    /// Nothing else applied; the panel closes.
    FallThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// The surface never moved during the gesture.
    Ignore,
    /// The side surface is already fully revealed; report the state as is.
    OpenInPlace,
    /// Animate the dragged surface's left edge to `target_left`.
    Settle {
        target_left: i32,
        reason: SettleReason,
    },
}

impl ReleaseDecision {
    pub fn is_settle(&self) -> bool {
        matches!(self, ReleaseDecision::Settle { .. })
    }
}

/// Decides what a release of `dragged` does.
///
/// `capture_left` is where the surface was when the gesture captured it and
/// `xvel` is the clamped release velocity in px/s. The direction branch comes
/// from the net travel unless the release velocity points the other way.
pub fn resolve_release(
    snapshot: &SurfaceSnapshot,
    dragged: Gravity,
    capture_left: i32,
    xvel: f32,
    velocity_threshold: f32,
) -> ReleaseDecision {
    let child = snapshot.bounds(dragged);
    let dx = child.left - capture_left;
    if dx == 0 {
        return ReleaseDecision::Ignore;
    }

    let moves_right = if dx > 0 { xvel >= 0.0 } else { xvel > 0.0 };
    let branch = if moves_right {
        release_moving_right(snapshot, dragged, dx, xvel, velocity_threshold)
    } else {
        release_moving_left(snapshot, dragged, dx, xvel, velocity_threshold)
    };

    branch.unwrap_or(ReleaseDecision::Settle {
        target_left: closed_left(snapshot, dragged),
        reason: SettleReason::FallThrough,
    })
}

/// Where `dragged` sits once the panel is closed.
fn closed_left(snapshot: &SurfaceSnapshot, dragged: Gravity) -> i32 {
    snapshot.bounds(dragged).left - snapshot.center.left
}

fn release_moving_right(
    snapshot: &SurfaceSnapshot,
    dragged: Gravity,
    dx: i32,
    xvel: f32,
    velocity_threshold: f32,
) -> Option<ReleaseDecision> {
    // An open RIGHT side closes; otherwise head for the far edge.
    let open_target = || {
        let target = if snapshot.center.left < 0 {
            closed_left(snapshot, dragged)
        } else {
            snapshot.parent_width
        };
        clamp_move_right(snapshot, dragged, target)
    };

    if xvel > velocity_threshold {
        return Some(ReleaseDecision::Settle {
            target_left: open_target(),
            reason: SettleReason::Fling,
        });
    }

    let Some(side) = snapshot.left else {
        return Some(ReleaseDecision::Settle {
            target_left: closed_left(snapshot, dragged),
            reason: SettleReason::NoSideSurface,
        });
    };

    if dx > 0 && xvel >= 0.0 {
        if side.bounds.right() >= side.bounds.width {
            return Some(ReleaseDecision::OpenInPlace);
        }
        if let AutoOpen::Distance(distance) = side.auto_open {
            if side.bounds.right() > distance {
                return Some(ReleaseDecision::Settle {
                    target_left: open_target(),
                    reason: SettleReason::AutoOpen,
                });
            }
        }
    }

    None
}

fn release_moving_left(
    snapshot: &SurfaceSnapshot,
    dragged: Gravity,
    dx: i32,
    xvel: f32,
    velocity_threshold: f32,
) -> Option<ReleaseDecision> {
    let open_target = || {
        let target = if snapshot.center.left > 0 {
            closed_left(snapshot, dragged)
        } else {
            -snapshot.parent_width
        };
        clamp_move_left(snapshot, dragged, target)
    };

    if -xvel > velocity_threshold {
        return Some(ReleaseDecision::Settle {
            target_left: open_target(),
            reason: SettleReason::Fling,
        });
    }

    let Some(side) = snapshot.right else {
        return Some(ReleaseDecision::Settle {
            target_left: closed_left(snapshot, dragged),
            reason: SettleReason::NoSideSurface,
        });
    };

    if dx < 0 && xvel <= 0.0 {
        if side.bounds.right() <= snapshot.parent_width {
            return Some(ReleaseDecision::OpenInPlace);
        }
        if let AutoOpen::Distance(distance) = side.auto_open {
            if side.bounds.left + distance < snapshot.parent_width {
                return Some(ReleaseDecision::Settle {
                    target_left: open_target(),
                    reason: SettleReason::AutoOpen,
                });
            }
        }
    }

    None
}
