use std::rc::Rc;

use crate::swipe_layout::SwipeLayout;

/// Callback for open/closed resolutions: `(is_open, layout)`.
pub type StateChangedListener = Rc<dyn Fn(bool, &SwipeLayout)>;

#[derive(Default)]
pub(crate) struct StateNotifier {
    listener: Option<StateChangedListener>,
}

impl StateNotifier {
    pub(crate) fn set(&mut self, listener: StateChangedListener) {
        self.listener = Some(listener);
    }

    pub(crate) fn clear(&mut self) {
        self.listener = None;
    }

    /// The listener to call once the caller has released its borrows.
    pub(crate) fn listener(&self) -> Option<StateChangedListener> {
        self.listener.clone()
    }
}
