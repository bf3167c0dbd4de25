use std::rc::Weak;

use crate::surface::{SurfaceBounds, SurfaceId, SurfaceSpec};

/// The view system a [`crate::SwipeLayout`] lives in.
///
/// The host owns geometry: it measures and places surfaces, and every
/// position the panel reads comes from here. All methods take `&self`; hosts
/// keep their state behind `Cell`/`RefCell`.
pub trait SwipeHost {
    /// Width of the panel in px.
    fn width(&self) -> i32;

    /// Every child surface in drawing order, including invisible ones.
    fn surfaces(&self) -> Vec<SurfaceSpec>;

    fn bounds(&self, id: SurfaceId) -> SurfaceBounds;

    /// Topmost visible surface under a point in panel coordinates.
    fn surface_at(&self, x: f32, y: f32) -> Option<SurfaceId>;

    /// Moves every surface horizontally by `dx` px.
    fn offset_surfaces(&self, dx: i32);

    /// Enclosing containers, nearest parent first.
    fn ancestors(&self) -> Vec<Weak<dyn ScrollAncestor>>;

    /// Asks enclosing containers to stop intercepting the current gesture.
    fn request_disallow_intercept(&self, disallow: bool);

    /// Requests a redraw after surfaces moved.
    fn invalidate(&self) {}
}

/// A container around the panel that may scroll.
pub trait ScrollAncestor {
    /// Whether this container takes part in nested scrolling.
    fn is_nested_scroll_container(&self) -> bool;

    fn is_enabled(&self) -> bool;

    fn set_enabled(&self, enabled: bool);
}
