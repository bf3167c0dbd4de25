//! A horizontally swipeable panel.
//!
//! A CENTER surface follows the finger left or right to reveal LEFT and RIGHT
//! action surfaces. Releases resolve into a settle animation, an in-place
//! open, or nothing, depending on travel, velocity and each side's auto-open
//! distance. While a swipe is in progress, nested-scroll ancestors are
//! disabled so they cannot steal the gesture.
//!
//! Geometry lives in the host: a [`SwipeHost`] reports surface bounds and
//! moves surfaces, and [`SwipeLayout`] decides where they go.

mod classifier;
mod config;
mod drag;
mod drag_tracker;
mod error;
mod host;
mod notifier;
mod settle;
mod suppress;
mod surface;
mod swipe_layout;

pub use classifier::{Classification, ClassifyContext, SessionTransition, TouchClassifier, TouchState};
pub use config::{SwipeAttributes, SwipeConfig};
pub use drag::{
    clamp_horizontal, clamp_move_left, clamp_move_right, resolve_release, ReleaseDecision,
    SettleReason, SideBounds, SurfaceSnapshot,
};
pub use drag_tracker::{Capture, DragOutcome, DragTracker};
pub use error::SwipeLayoutError;
pub use host::{ScrollAncestor, SwipeHost};
pub use notifier::StateChangedListener;
pub use suppress::AncestorSuppressor;
pub use surface::{
    arrange_surfaces, Arrangement, AutoOpen, Gravity, SideSurface, SurfaceBounds, SurfaceId,
    SurfaceSet, SurfaceSpec,
};
pub use swipe_layout::SwipeLayout;

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod classifier_tests;

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod drag_tests;

#[cfg(test)]
#[path = "tests/drag_tracker_tests.rs"]
mod drag_tracker_tests;

#[cfg(test)]
#[path = "tests/suppress_tests.rs"]
mod suppress_tests;
