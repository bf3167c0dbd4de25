//! Foundation pieces shared by SwipeLayout: pointer input, velocity tracking,
//! gesture thresholds and density-aware units.

pub mod gesture_constants;
mod geometry;
pub mod input;
mod unit;
pub mod velocity_tracker;
mod view_configuration;

pub use geometry::Point;
pub use input::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
pub use unit::{Dp, Px};
pub use velocity_tracker::VelocityTracker1D;
pub use view_configuration::ViewConfiguration;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::geometry::Point;
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
    pub use crate::unit::{Dp, Px};
    pub use crate::velocity_tracker::VelocityTracker1D;
    pub use crate::view_configuration::ViewConfiguration;
}

#[cfg(test)]
#[path = "tests/view_configuration_tests.rs"]
mod tests;
