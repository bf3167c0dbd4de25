use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipe_core::Runtime;
use swipe_foundation::{Point, PointerEvent, PointerEventKind};
use swipe_layout::{
    Gravity, ScrollAncestor, SwipeConfig, SwipeHost, SwipeLayout, SwipeLayoutError,
};

use crate::row::{ListScroll, RowHost, RowKind, ROW_HEIGHT};

pub const ROW_COUNT: usize = 30;

const FRAME_NANOS: u64 = 16_666_667;
const MAX_SETTLE_FRAMES: usize = 1_000;

/// A reported open state: `(position, is_open)`.
pub type StateChange = (usize, bool);

struct RowHolder {
    kind: RowKind,
    host: Rc<RowHost>,
    layout: SwipeLayout,
    position: Rc<Cell<Option<usize>>>,
}

/// A vertically scrolling list that recycles swipe rows.
///
/// Only the rows in the viewport are attached. A row leaving the viewport
/// saves its offset and goes back to the pool; binding a position restores
/// the offset saved for it.
pub struct SwipeList {
    runtime: Runtime,
    config: SwipeConfig,
    scroll: Rc<ListScroll>,
    width: i32,
    viewport_rows: usize,
    first_visible: usize,
    saved_offsets: [i32; ROW_COUNT],
    attached: Vec<RowHolder>,
    pool: Vec<RowHolder>,
    changes: Rc<RefCell<Vec<StateChange>>>,
    now_nanos: u64,
    active_slot: Option<usize>,
    last_y: f32,
    pending_scroll: f32,
}

impl SwipeList {
    pub fn new(
        width: i32,
        viewport_rows: usize,
        config: SwipeConfig,
    ) -> Result<Self, SwipeLayoutError> {
        let mut list = Self {
            runtime: Runtime::default(),
            config,
            scroll: ListScroll::new(),
            width,
            viewport_rows: viewport_rows.clamp(1, ROW_COUNT),
            first_visible: 0,
            saved_offsets: [0; ROW_COUNT],
            attached: Vec::new(),
            pool: Vec::new(),
            changes: Rc::new(RefCell::new(Vec::new())),
            now_nanos: 0,
            active_slot: None,
            last_y: 0.0,
            pending_scroll: 0.0,
        };
        list.bind_visible()?;
        Ok(list)
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn visible_positions(&self) -> std::ops::Range<usize> {
        self.first_visible..self.first_visible + self.attached.len()
    }

    /// The panel bound to `position`, if it is on screen.
    pub fn row(&self, position: usize) -> Option<&SwipeLayout> {
        self.holder(position).map(|holder| &holder.layout)
    }

    pub fn row_kind(&self, position: usize) -> Option<RowKind> {
        self.holder(position).map(|holder| holder.host.kind())
    }

    /// Offset of `position`, whether on screen or saved.
    pub fn offset_of(&self, position: usize) -> i32 {
        match self.row(position) {
            Some(layout) => layout.offset(),
            None => self.saved_offsets.get(position).copied().unwrap_or(0),
        }
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll.is_enabled()
    }

    pub fn pooled_rows(&self) -> usize {
        self.pool.len()
    }

    /// Every open state reported so far.
    pub fn state_changes(&self) -> Vec<StateChange> {
        self.changes.borrow().clone()
    }

    /// Scrolls so that `first` is the top row.
    pub fn scroll_to(&mut self, first: usize) -> Result<(), SwipeLayoutError> {
        let first = first.min(ROW_COUNT - self.viewport_rows);
        if first == self.first_visible {
            return Ok(());
        }
        self.cancel_active();
        self.detach_all();
        self.first_visible = first;
        self.bind_visible()
    }

    /// Scrolls by whole rows. Refused while a row holds the gesture.
    pub fn scroll_by(&mut self, rows: isize) -> Result<bool, SwipeLayoutError> {
        if !self.scroll.is_enabled() {
            log::debug!("scroll refused while a row is swiping");
            return Ok(false);
        }
        let first = self.first_visible.saturating_add_signed(rows);
        self.scroll_to(first)?;
        Ok(true)
    }

    /// Delivers one pointer event at list coordinates.
    ///
    /// The row under a down receives the gesture. Vertical travel scrolls
    /// the list unless the row disallowed it, which hands the row a cancel.
    pub fn touch(
        &mut self,
        kind: PointerEventKind,
        x: f32,
        y: f32,
        after_millis: u64,
    ) -> Result<bool, SwipeLayoutError> {
        self.now_nanos += after_millis * 1_000_000;
        if kind == PointerEventKind::Down {
            self.active_slot = self.slot_at(y);
            self.last_y = y;
            self.pending_scroll = 0.0;
        }

        let consumed = match self.active_slot {
            Some(slot) => self.dispatch(slot, kind, x, y),
            None => false,
        };

        if kind == PointerEventKind::Move && self.scroll.can_scroll() {
            self.pending_scroll += self.last_y - y;
            let rows = (self.pending_scroll / ROW_HEIGHT).trunc();
            if rows != 0.0 {
                self.pending_scroll -= rows * ROW_HEIGHT;
                self.scroll_by(rows as isize)?;
            }
        }
        self.last_y = y;

        if kind.ends_session() {
            self.active_slot = None;
        }
        Ok(consumed)
    }

    /// Down, evenly spaced moves and up on the row at `y`.
    pub fn swipe(
        &mut self,
        y: f32,
        from_x: f32,
        to_x: f32,
        steps: u32,
    ) -> Result<(), SwipeLayoutError> {
        self.touch(PointerEventKind::Down, from_x, y, 0)?;
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.touch(PointerEventKind::Move, x, y, 4)?;
        }
        self.touch(PointerEventKind::Up, to_x, y, 0)?;
        Ok(())
    }

    /// A tap on an action surface closes its row.
    pub fn tap(&mut self, x: f32, y: f32) {
        let Some(slot) = self.slot_at(y) else {
            return;
        };
        let holder = &self.attached[slot];
        match holder.host.gravity_at(x) {
            Some(Gravity::Left | Gravity::Right) => holder.layout.close(),
            _ => log::debug!("tap on row content"),
        }
    }

    /// Pumps frames until every row animation has finished.
    pub fn settle(&mut self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() && frames < MAX_SETTLE_FRAMES {
            self.now_nanos += FRAME_NANOS;
            handle.drain_frame_callbacks(self.now_nanos);
            frames += 1;
        }
        frames
    }

    fn now_millis(&self) -> i64 {
        (self.now_nanos / 1_000_000) as i64
    }

    fn holder(&self, position: usize) -> Option<&RowHolder> {
        position
            .checked_sub(self.first_visible)
            .and_then(|slot| self.attached.get(slot))
    }

    fn slot_at(&self, y: f32) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        let slot = (y / ROW_HEIGHT) as usize;
        (slot < self.attached.len()).then_some(slot)
    }

    fn dispatch(&self, slot: usize, kind: PointerEventKind, x: f32, y: f32) -> bool {
        let Some(holder) = self.attached.get(slot) else {
            return false;
        };
        let local_y = y - slot as f32 * ROW_HEIGHT;
        let event = PointerEvent::new(kind, Point::new(x, local_y), self.now_millis());
        if kind == PointerEventKind::Down {
            holder.layout.on_intercept_touch_event(&event);
        }
        holder.layout.on_touch_event(&event)
    }

    fn cancel_active(&mut self) {
        if let Some(slot) = self.active_slot.take() {
            if let Some(holder) = self.attached.get(slot) {
                let event = PointerEvent::cancel(0.0, 0.0, self.now_millis());
                holder.layout.on_touch_event(&event);
            }
        }
    }

    fn detach_all(&mut self) {
        for holder in self.attached.drain(..) {
            if let Some(position) = holder.position.take() {
                self.saved_offsets[position] = holder.layout.offset();
                log::trace!(
                    "row {position} recycled at offset {}",
                    self.saved_offsets[position]
                );
            }
            self.pool.push(holder);
        }
    }

    fn bind_visible(&mut self) -> Result<(), SwipeLayoutError> {
        let end = (self.first_visible + self.viewport_rows).min(ROW_COUNT);
        for position in self.first_visible..end {
            let holder = self.obtain(RowKind::for_position(position))?;
            holder.position.set(Some(position));
            holder.layout.set_offset(self.saved_offsets[position]);
            self.attached.push(holder);
        }
        Ok(())
    }

    fn obtain(&mut self, kind: RowKind) -> Result<RowHolder, SwipeLayoutError> {
        if let Some(index) = self.pool.iter().position(|holder| holder.kind == kind) {
            return Ok(self.pool.swap_remove(index));
        }

        let host = RowHost::new(kind, self.width, self.scroll.clone());
        let dyn_host: Rc<dyn SwipeHost> = host.clone();
        let layout = SwipeLayout::new(dyn_host, self.runtime.handle(), self.config);
        layout.on_layout()?;

        let position: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));
        let bound = position.clone();
        let changes = self.changes.clone();
        layout.set_on_state_changed_listener(move |is_open, _| {
            if let Some(position) = bound.get() {
                let state = if is_open { "open" } else { "closed" };
                log::info!("row {position} is now {state}");
                changes.borrow_mut().push((position, is_open));
            }
        });

        log::debug!("created {kind:?} row");
        Ok(RowHolder {
            kind,
            host,
            layout,
            position,
        })
    }
}
