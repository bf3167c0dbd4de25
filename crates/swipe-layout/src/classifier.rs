use swipe_foundation::{Point, PointerEvent, PointerEventKind};

/// Phase of one touch session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchState {
    /// Not yet past the touch slop.
    #[default]
    Wait,
    /// Classified as a horizontal swipe.
    Swipe,
    /// Classified as something else, typically a vertical scroll.
    Skip,
}

/// Side effects the caller applies when the session enters or leaves SWIPE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTransition {
    EnterSwipe,
    ExitSwipe,
}

/// Panel state the classifier needs to judge a move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyContext {
    pub touch_slop: i32,
    pub left_swipe_enabled: bool,
    pub right_swipe_enabled: bool,
    pub is_closed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Whether the event goes on to the drag tracker.
    pub forward_to_drag: bool,
    /// Whether the panel claims the event.
    pub handled: bool,
    pub transition: Option<SessionTransition>,
}

impl Classification {
    fn declined() -> Self {
        Self {
            forward_to_drag: false,
            handled: false,
            transition: None,
        }
    }
}

/// Decides per touch session whether the gesture belongs to the panel.
#[derive(Clone, Debug, Default)]
pub struct TouchClassifier {
    state: TouchState,
    origin: Point,
}

impl TouchClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TouchState {
        self.state
    }

    /// Starts a new session at `origin`.
    ///
    /// A session still in SWIPE never saw its up event, so it is closed out.
    pub fn begin(&mut self, origin: Point) -> Option<SessionTransition> {
        let previous = std::mem::take(&mut self.state);
        self.origin = origin;
        (previous == TouchState::Swipe).then_some(SessionTransition::ExitSwipe)
    }

    /// Ends the session without waiting for its up event.
    pub fn reset(&mut self) -> Option<SessionTransition> {
        self.begin(Point::ZERO)
    }

    pub fn classify(&mut self, event: &PointerEvent, context: &ClassifyContext) -> Classification {
        let mut transition = None;

        match event.kind {
            PointerEventKind::Down => {
                transition = self.begin(event.position);
            }
            PointerEventKind::Move if self.state == TouchState::Wait => {
                let (raw_dx, raw_dy) = event.position.delta_from(self.origin);
                let (dx, dy) = (raw_dx.abs(), raw_dy.abs());

                let left_to_right = raw_dx > 0.0;
                let blocked = if left_to_right {
                    !context.left_swipe_enabled
                } else {
                    !context.right_swipe_enabled
                };
                if blocked && context.is_closed {
                    return Classification::declined();
                }

                let slop = context.touch_slop as f32;
                if dx >= slop || dy >= slop {
                    self.state = if dy == 0.0 || dx / dy > 1.0 {
                        TouchState::Swipe
                    } else {
                        TouchState::Skip
                    };
                    log::debug!("touch session classified as {:?}", self.state);
                    if self.state == TouchState::Swipe {
                        transition = Some(SessionTransition::EnterSwipe);
                    }
                }
            }
            PointerEventKind::Move => {}
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.state == TouchState::Swipe {
                    transition = Some(SessionTransition::ExitSwipe);
                }
                self.state = TouchState::Wait;
            }
        }

        Classification {
            forward_to_drag: event.kind != PointerEventKind::Move
                || self.state == TouchState::Swipe,
            handled: true,
            transition,
        }
    }
}
