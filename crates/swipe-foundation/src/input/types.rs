use crate::geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Up and cancel both end the touch session.
    pub fn ends_session(&self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// A single-pointer touch event in the panel's local coordinates.
///
/// `uptime_millis` is the monotonic timestamp used for velocity tracking.
/// Consumption is shared between copies so that a host dispatching the same
/// event to several handlers can see whether the swipe panel claimed it.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    pub position: Point,
    pub uptime_millis: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            phase: match kind {
                PointerEventKind::Down => PointerPhase::Start,
                PointerEventKind::Move => PointerPhase::Move,
                PointerEventKind::Up => PointerPhase::End,
                PointerEventKind::Cancel => PointerPhase::Cancel,
            },
            position,
            uptime_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_millis)
    }

    pub fn moved(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_millis)
    }

    pub fn up(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_millis)
    }

    pub fn cancel(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), uptime_millis)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed by a gesture handler.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
