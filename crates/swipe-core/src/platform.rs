//! Platform abstraction traits for the runtime.
//!
//! The runtime never owns a window or a vsync source. It asks the host to
//! schedule a frame and waits for the host to drain frame callbacks.

/// Schedules frames on behalf of the runtime.
///
/// Implementations must be safe to share across threads even though the
/// runtime itself is single-threaded; hosts commonly forward the request to an
/// event-loop proxy.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}
