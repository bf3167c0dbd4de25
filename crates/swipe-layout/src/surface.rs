use crate::error::SwipeLayoutError;

/// Host-assigned identifier of one surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gravity {
    Left,
    Center,
    Right,
}

/// How far a side surface must be revealed before a slow release opens it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AutoOpen {
    #[default]
    Disabled,
    /// Distance in px.
    Distance(i32),
}

/// One child surface as the host declares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSpec {
    pub id: SurfaceId,
    pub gravity: Gravity,
    /// Invisible surfaces take no part in layout or gestures.
    pub visible: bool,
    pub auto_open: AutoOpen,
}

impl SurfaceSpec {
    pub fn new(id: SurfaceId, gravity: Gravity) -> Self {
        Self {
            id,
            gravity,
            visible: true,
            auto_open: AutoOpen::Disabled,
        }
    }

    pub fn with_auto_open(mut self, distance: i32) -> Self {
        self.auto_open = AutoOpen::Distance(distance);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Horizontal extent of a surface in the panel's coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SurfaceBounds {
    pub left: i32,
    pub width: i32,
}

impl SurfaceBounds {
    pub fn new(left: i32, width: i32) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideSurface {
    pub id: SurfaceId,
    pub auto_open: AutoOpen,
}

/// The surfaces taking part in swiping, resolved once per layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSet {
    center: SurfaceId,
    left: Option<SideSurface>,
    right: Option<SideSurface>,
}

impl SurfaceSet {
    /// Picks the center and side surfaces out of `specs`.
    ///
    /// Invisible surfaces are skipped and the last surface of a gravity wins.
    pub fn resolve(specs: &[SurfaceSpec]) -> Result<Self, SwipeLayoutError> {
        let mut center = None;
        let mut left = None;
        let mut right = None;
        let mut visible_surfaces = 0;

        for spec in specs.iter().filter(|spec| spec.visible) {
            visible_surfaces += 1;
            let side = SideSurface {
                id: spec.id,
                auto_open: spec.auto_open,
            };
            match spec.gravity {
                Gravity::Center => center = Some(spec.id),
                Gravity::Left => left = Some(side),
                Gravity::Right => right = Some(side),
            }
        }

        let center = center.ok_or(SwipeLayoutError::MissingCenter { visible_surfaces })?;
        Ok(Self {
            center,
            left,
            right,
        })
    }

    pub fn center(&self) -> SurfaceId {
        self.center
    }

    pub fn left(&self) -> Option<SideSurface> {
        self.left
    }

    pub fn right(&self) -> Option<SideSurface> {
        self.right
    }

    pub fn id_of(&self, gravity: Gravity) -> Option<SurfaceId> {
        match gravity {
            Gravity::Center => Some(self.center),
            Gravity::Left => self.left.map(|side| side.id),
            Gravity::Right => self.right.map(|side| side.id),
        }
    }

    pub fn gravity_of(&self, id: SurfaceId) -> Option<Gravity> {
        if id == self.center {
            Some(Gravity::Center)
        } else if self.left.is_some_and(|side| side.id == id) {
            Some(Gravity::Left)
        } else if self.right.is_some_and(|side| side.id == id) {
            Some(Gravity::Right)
        } else {
            None
        }
    }
}

/// Left edges for the surfaces around a center surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arrangement {
    pub center: i32,
    pub left: Option<i32>,
    pub right: Option<i32>,
}

/// Places the side surfaces flush against the center surface: the LEFT one
/// ends where the center starts, the RIGHT one starts where the center ends.
pub fn arrange_surfaces(
    center_left: i32,
    center_width: i32,
    left_width: Option<i32>,
    right_width: Option<i32>,
) -> Arrangement {
    Arrangement {
        center: center_left,
        left: left_width.map(|width| center_left - width),
        right: right_width.map(|_| center_left + center_width),
    }
}
