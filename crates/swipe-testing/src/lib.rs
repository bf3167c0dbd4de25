//! Testing utilities for SwipeLayout
//!
//! [`TestHost`] is an in-memory [`swipe_layout::SwipeHost`] with a center
//! surface and optional side surfaces. [`SwipeRobot`] owns a runtime and a
//! panel on top of a host and drives pointer gestures and frames through it.

pub mod robot;
pub mod test_host;

pub use robot::*;
pub use test_host::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::test_host::*;
}
