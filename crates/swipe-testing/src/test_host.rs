//! In-memory host with one center surface and optional side surfaces.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use swipe_layout::{
    arrange_surfaces, AutoOpen, Gravity, ScrollAncestor, SurfaceBounds, SurfaceId, SurfaceSpec,
    SwipeHost,
};

#[derive(Clone, Copy, Debug)]
struct TestSurface {
    spec: SurfaceSpec,
    bounds: SurfaceBounds,
}

/// Headless [`SwipeHost`].
///
/// Surfaces are stored in drawing order (left, right, center), so the center
/// is hit first where surfaces overlap. Every call that a real view system
/// would turn into visible effects is recorded for assertions.
pub struct TestHost {
    width: i32,
    height: f32,
    surfaces: RefCell<Vec<TestSurface>>,
    ancestors: RefCell<Vec<Weak<dyn ScrollAncestor>>>,
    disallow_history: RefCell<Vec<bool>>,
    invalidations: Cell<usize>,
}

impl TestHost {
    pub const CENTER: SurfaceId = SurfaceId(1);
    pub const LEFT: SurfaceId = SurfaceId(2);
    pub const RIGHT: SurfaceId = SurfaceId(3);

    pub fn builder(width: i32) -> TestHostBuilder {
        TestHostBuilder {
            width,
            height: 64.0,
            with_center: true,
            left: None,
            right: None,
        }
    }

    /// Left edge of the surface with `gravity`, if present.
    pub fn left_of(&self, gravity: Gravity) -> Option<i32> {
        self.surfaces
            .borrow()
            .iter()
            .find(|surface| surface.spec.gravity == gravity)
            .map(|surface| surface.bounds.left)
    }

    pub fn center_left(&self) -> i32 {
        self.left_of(Gravity::Center).unwrap_or(0)
    }

    /// Appends an enclosing container; the first one added is the nearest.
    pub fn add_ancestor<A: ScrollAncestor + 'static>(&self, ancestor: &Rc<A>) {
        let ancestor: Rc<dyn ScrollAncestor> = ancestor.clone();
        self.ancestors.borrow_mut().push(Rc::downgrade(&ancestor));
    }

    pub fn set_visible(&self, id: SurfaceId, visible: bool) {
        for surface in self.surfaces.borrow_mut().iter_mut() {
            if surface.spec.id == id {
                surface.spec.visible = visible;
            }
        }
    }

    /// Every `request_disallow_intercept` argument so far.
    pub fn disallow_history(&self) -> Vec<bool> {
        self.disallow_history.borrow().clone()
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.get()
    }
}

impl SwipeHost for TestHost {
    fn width(&self) -> i32 {
        self.width
    }

    fn surfaces(&self) -> Vec<SurfaceSpec> {
        self.surfaces
            .borrow()
            .iter()
            .map(|surface| surface.spec)
            .collect()
    }

    fn bounds(&self, id: SurfaceId) -> SurfaceBounds {
        self.surfaces
            .borrow()
            .iter()
            .find(|surface| surface.spec.id == id)
            .map(|surface| surface.bounds)
            .unwrap_or_default()
    }

    fn surface_at(&self, x: f32, y: f32) -> Option<SurfaceId> {
        if y < 0.0 || y >= self.height {
            return None;
        }
        self.surfaces
            .borrow()
            .iter()
            .rev()
            .filter(|surface| surface.spec.visible)
            .find(|surface| {
                x >= surface.bounds.left as f32 && x < surface.bounds.right() as f32
            })
            .map(|surface| surface.spec.id)
    }

    fn offset_surfaces(&self, dx: i32) {
        for surface in self.surfaces.borrow_mut().iter_mut() {
            surface.bounds.left += dx;
        }
    }

    fn ancestors(&self) -> Vec<Weak<dyn ScrollAncestor>> {
        self.ancestors.borrow().clone()
    }

    fn request_disallow_intercept(&self, disallow: bool) {
        self.disallow_history.borrow_mut().push(disallow);
    }

    fn invalidate(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
    }
}

pub struct TestHostBuilder {
    width: i32,
    height: f32,
    with_center: bool,
    left: Option<SideConfig>,
    right: Option<SideConfig>,
}

#[derive(Clone, Copy)]
struct SideConfig {
    width: i32,
    auto_open: AutoOpen,
}

impl TestHostBuilder {
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn left(mut self, width: i32) -> Self {
        self.left = Some(SideConfig {
            width,
            auto_open: AutoOpen::Disabled,
        });
        self
    }

    pub fn left_auto_open(mut self, width: i32, distance: i32) -> Self {
        self.left = Some(SideConfig {
            width,
            auto_open: AutoOpen::Distance(distance),
        });
        self
    }

    pub fn right(mut self, width: i32) -> Self {
        self.right = Some(SideConfig {
            width,
            auto_open: AutoOpen::Disabled,
        });
        self
    }

    pub fn right_auto_open(mut self, width: i32, distance: i32) -> Self {
        self.right = Some(SideConfig {
            width,
            auto_open: AutoOpen::Distance(distance),
        });
        self
    }

    /// Leaves the center surface out, which the panel rejects on layout.
    pub fn without_center(mut self) -> Self {
        self.with_center = false;
        self
    }

    pub fn build(self) -> Rc<TestHost> {
        let arrangement = arrange_surfaces(
            0,
            self.width,
            self.left.map(|side| side.width),
            self.right.map(|side| side.width),
        );

        let mut surfaces = Vec::new();
        let sides = [
            (TestHost::LEFT, Gravity::Left, self.left, arrangement.left),
            (TestHost::RIGHT, Gravity::Right, self.right, arrangement.right),
        ];
        for (id, gravity, side, left) in sides {
            if let (Some(side), Some(left)) = (side, left) {
                let mut spec = SurfaceSpec::new(id, gravity);
                spec.auto_open = side.auto_open;
                surfaces.push(TestSurface {
                    spec,
                    bounds: SurfaceBounds::new(left, side.width),
                });
            }
        }
        if self.with_center {
            surfaces.push(TestSurface {
                spec: SurfaceSpec::new(TestHost::CENTER, Gravity::Center),
                bounds: SurfaceBounds::new(arrangement.center, self.width),
            });
        }

        Rc::new(TestHost {
            width: self.width,
            height: self.height,
            surfaces: RefCell::new(surfaces),
            ancestors: RefCell::new(Vec::new()),
            disallow_history: RefCell::new(Vec::new()),
            invalidations: Cell::new(0),
        })
    }
}

/// A scroll container above the panel that records how often it was toggled.
pub struct TestAncestor {
    nested_scroll: bool,
    enabled: Cell<bool>,
    toggles: Cell<usize>,
}

impl TestAncestor {
    pub fn nested_scroll() -> Rc<Self> {
        Self::new(true, true)
    }

    pub fn plain() -> Rc<Self> {
        Self::new(false, true)
    }

    pub fn new(nested_scroll: bool, enabled: bool) -> Rc<Self> {
        Rc::new(Self {
            nested_scroll,
            enabled: Cell::new(enabled),
            toggles: Cell::new(0),
        })
    }

    pub fn toggles(&self) -> usize {
        self.toggles.get()
    }
}

impl ScrollAncestor for TestAncestor {
    fn is_nested_scroll_container(&self) -> bool {
        self.nested_scroll
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        self.toggles.set(self.toggles.get() + 1);
    }
}
