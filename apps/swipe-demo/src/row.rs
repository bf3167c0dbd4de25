use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use swipe_layout::{
    arrange_surfaces, Gravity, ScrollAncestor, SurfaceBounds, SurfaceId, SurfaceSpec, SwipeHost,
};

/// Width of every action surface.
pub const ACTION_WIDTH: i32 = 96;
pub const ROW_HEIGHT: f32 = 64.0;

const CONTENT: SurfaceId = SurfaceId(0);
const LEFT_ACTION: SurfaceId = SurfaceId(1);
const RIGHT_ACTION: SurfaceId = SurfaceId(2);

/// Which action surfaces a row carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    BothSides,
    LeftOnly,
    RightOnly,
}

impl RowKind {
    pub fn for_position(position: usize) -> Self {
        match position % 3 {
            0 => RowKind::BothSides,
            1 => RowKind::LeftOnly,
            _ => RowKind::RightOnly,
        }
    }

    pub fn has_left(self) -> bool {
        matches!(self, RowKind::BothSides | RowKind::LeftOnly)
    }

    pub fn has_right(self) -> bool {
        matches!(self, RowKind::BothSides | RowKind::RightOnly)
    }
}

/// Scroll state of the list that hosts the rows.
#[derive(Debug)]
pub struct ListScroll {
    enabled: Cell<bool>,
    disallow_intercept: Cell<bool>,
}

impl ListScroll {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            enabled: Cell::new(true),
            disallow_intercept: Cell::new(false),
        })
    }

    /// Whether a row asked the list to keep its hands off the gesture.
    pub fn intercept_disallowed(&self) -> bool {
        self.disallow_intercept.get()
    }

    pub fn can_scroll(&self) -> bool {
        self.enabled.get() && !self.disallow_intercept.get()
    }
}

impl ScrollAncestor for ListScroll {
    fn is_nested_scroll_container(&self) -> bool {
        true
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn set_enabled(&self, enabled: bool) {
        log::trace!("list scrolling enabled: {enabled}");
        self.enabled.set(enabled);
    }
}

/// One list row: a content surface plus the action surfaces of its kind.
pub struct RowHost {
    kind: RowKind,
    width: i32,
    surfaces: RefCell<Vec<(SurfaceSpec, SurfaceBounds)>>,
    list: Rc<ListScroll>,
}

impl RowHost {
    pub fn new(kind: RowKind, width: i32, list: Rc<ListScroll>) -> Rc<Self> {
        let left_width = kind.has_left().then_some(ACTION_WIDTH);
        let right_width = kind.has_right().then_some(ACTION_WIDTH);
        let arrangement = arrange_surfaces(0, width, left_width, right_width);

        let mut surfaces = Vec::with_capacity(3);
        if let Some(left) = arrangement.left {
            surfaces.push((
                SurfaceSpec::new(LEFT_ACTION, Gravity::Left),
                SurfaceBounds::new(left, ACTION_WIDTH),
            ));
        }
        if let Some(left) = arrangement.right {
            surfaces.push((
                SurfaceSpec::new(RIGHT_ACTION, Gravity::Right),
                SurfaceBounds::new(left, ACTION_WIDTH),
            ));
        }
        surfaces.push((
            SurfaceSpec::new(CONTENT, Gravity::Center),
            SurfaceBounds::new(arrangement.center, width),
        ));

        Rc::new(Self {
            kind,
            width,
            surfaces: RefCell::new(surfaces),
            list,
        })
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    /// Which surface a tap at `x` lands on.
    pub fn gravity_at(&self, x: f32) -> Option<Gravity> {
        let id = self.surface_at(x, ROW_HEIGHT / 2.0)?;
        self.surfaces
            .borrow()
            .iter()
            .find(|(spec, _)| spec.id == id)
            .map(|(spec, _)| spec.gravity)
    }
}

impl SwipeHost for RowHost {
    fn width(&self) -> i32 {
        self.width
    }

    fn surfaces(&self) -> Vec<SurfaceSpec> {
        self.surfaces.borrow().iter().map(|(spec, _)| *spec).collect()
    }

    fn bounds(&self, id: SurfaceId) -> SurfaceBounds {
        self.surfaces
            .borrow()
            .iter()
            .find(|(spec, _)| spec.id == id)
            .map(|(_, bounds)| *bounds)
            .unwrap_or_default()
    }

    fn surface_at(&self, x: f32, y: f32) -> Option<SurfaceId> {
        if !(0.0..ROW_HEIGHT).contains(&y) {
            return None;
        }
        // Content is drawn last, so it wins where surfaces overlap.
        self.surfaces
            .borrow()
            .iter()
            .rev()
            .find(|(_, bounds)| x >= bounds.left as f32 && x < bounds.right() as f32)
            .map(|(spec, _)| spec.id)
    }

    fn offset_surfaces(&self, dx: i32) {
        for (_, bounds) in self.surfaces.borrow_mut().iter_mut() {
            bounds.left += dx;
        }
    }

    fn ancestors(&self) -> Vec<Weak<dyn ScrollAncestor>> {
        let list: Rc<dyn ScrollAncestor> = self.list.clone();
        vec![Rc::downgrade(&list)]
    }

    fn request_disallow_intercept(&self, disallow: bool) {
        self.list.disallow_intercept.set(disallow);
    }
}
