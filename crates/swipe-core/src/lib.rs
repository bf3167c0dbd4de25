//! Core runtime for SwipeLayout.
//!
//! Everything here runs on one logical UI thread. The host drives frames by
//! calling [`RuntimeHandle::drain_frame_callbacks`] once per display frame;
//! animations register themselves for the next frame through a [`FrameClock`].

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::RuntimeScheduler;
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
