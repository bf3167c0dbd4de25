use std::rc::Weak;

use smallvec::SmallVec;

use crate::host::{ScrollAncestor, SwipeHost};

/// Nested-scroll ancestors disabled for the current swipe, with the enabled
/// flag each had before.
#[derive(Default)]
pub struct AncestorSuppressor {
    suppressed: SmallVec<[(Weak<dyn ScrollAncestor>, bool); 4]>,
}

impl AncestorSuppressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.suppressed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suppressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppressed.is_empty()
    }

    /// Disables every nested-scroll ancestor of `host`.
    ///
    /// An ancestor already suppressed in this session keeps its first
    /// recorded flag.
    pub fn suppress(&mut self, host: &dyn SwipeHost) {
        for weak in host.ancestors() {
            let Some(ancestor) = weak.upgrade() else {
                continue;
            };
            if !ancestor.is_nested_scroll_container() {
                continue;
            }
            if self
                .suppressed
                .iter()
                .any(|(recorded, _)| Weak::ptr_eq(recorded, &weak))
            {
                continue;
            }
            self.suppressed.push((weak, ancestor.is_enabled()));
            ancestor.set_enabled(false);
        }
        log::debug!("suppressed {} scroll ancestors", self.suppressed.len());
    }

    /// Puts every recorded ancestor back. Dropped ancestors are skipped.
    pub fn restore(&mut self) {
        for (weak, was_enabled) in self.suppressed.drain(..) {
            if let Some(ancestor) = weak.upgrade() {
                ancestor.set_enabled(was_enabled);
            }
        }
    }
}
