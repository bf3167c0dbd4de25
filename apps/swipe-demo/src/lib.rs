//! Headless SwipeLayout demo.
//!
//! A list of thirty swipe rows in three kinds, recycled the way a scrolling
//! list recycles its children. Rows keep their offsets across recycling and
//! the list stops scrolling while a row is being swiped.

pub mod list;
pub mod row;

pub use list::{StateChange, SwipeList, ROW_COUNT};
pub use row::{ListScroll, RowHost, RowKind, ACTION_WIDTH, ROW_HEIGHT};

#[cfg(test)]
#[path = "tests/demo_tests.rs"]
mod demo_tests;
