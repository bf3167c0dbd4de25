use super::*;

use swipe_foundation::PointerEventKind;
use swipe_layout::SwipeConfig;

const WIDTH: i32 = 360;

fn list() -> SwipeList {
    SwipeList::new(WIDTH, 8, SwipeConfig::default()).expect("rows lay out")
}

fn row_center(slot: usize) -> f32 {
    slot as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0
}

fn open_first_row(list: &mut SwipeList) {
    // 12 px every 4 ms flings past the threshold.
    list.swipe(row_center(0), 180.0, 228.0, 4).expect("swipe");
    list.settle();
}

#[test]
fn rows_cycle_through_three_kinds() {
    let list = list();

    assert_eq!(list.visible_positions(), 0..8);
    assert_eq!(list.row_kind(0), Some(RowKind::BothSides));
    assert_eq!(list.row_kind(1), Some(RowKind::LeftOnly));
    assert_eq!(list.row_kind(2), Some(RowKind::RightOnly));
    assert_eq!(list.row_kind(3), Some(RowKind::BothSides));
    assert_eq!(list.row_kind(8), None);
}

#[test]
fn fling_opens_a_row_and_reports_it() {
    let mut list = list();

    open_first_row(&mut list);

    assert_eq!(list.offset_of(0), ACTION_WIDTH);
    assert!(list.row(0).is_some_and(|row| row.is_open()));
    assert_eq!(list.state_changes(), vec![(0, true)]);
    assert!(list.is_scroll_enabled());
}

#[test]
fn recycled_rows_keep_their_offsets() {
    let mut list = list();
    open_first_row(&mut list);

    list.scroll_to(12).expect("scroll");
    assert_eq!(list.visible_positions(), 12..20);
    assert_eq!(list.pooled_rows(), 0);
    assert_eq!(list.offset_of(0), ACTION_WIDTH);
    // Row 12 reuses row 0's panel but starts closed.
    assert_eq!(list.offset_of(12), 0);

    list.scroll_to(0).expect("scroll");
    assert_eq!(list.row(0).map(|row| row.offset()), Some(ACTION_WIDTH));
    assert_eq!(list.offset_of(3), 0);
}

#[test]
fn vertical_drag_scrolls_the_list() {
    let mut list = list();

    let mut y = 300.0;
    list.touch(PointerEventKind::Down, 180.0, y, 0).expect("down");
    for _ in 0..10 {
        y -= 16.0;
        list.touch(PointerEventKind::Move, 180.0, y, 16).expect("move");
    }
    list.touch(PointerEventKind::Up, 180.0, y, 16).expect("up");

    assert_eq!(list.first_visible(), 2);
    assert!(list.state_changes().is_empty());
}

#[test]
fn swiping_row_holds_the_list_still() {
    let mut list = list();
    let y = row_center(0);

    list.touch(PointerEventKind::Down, 180.0, y, 0).expect("down");
    list.touch(PointerEventKind::Move, 200.0, y, 16).expect("move");
    assert!(!list.is_scroll_enabled());
    assert_eq!(list.scroll_by(1), Ok(false));

    list.touch(PointerEventKind::Move, 210.0, y - 100.0, 16).expect("move");
    assert_eq!(list.first_visible(), 0);

    list.touch(PointerEventKind::Up, 210.0, y - 100.0, 16).expect("up");
    assert!(list.is_scroll_enabled());
}

#[test]
fn tapping_an_action_closes_its_row() {
    let mut list = list();
    open_first_row(&mut list);

    list.tap(200.0, row_center(0));
    list.settle();
    assert_eq!(list.offset_of(0), ACTION_WIDTH);

    list.tap(20.0, row_center(0));
    list.settle();
    assert_eq!(list.offset_of(0), 0);
    assert_eq!(list.state_changes(), vec![(0, true), (0, false)]);
}

#[test]
fn row_without_a_side_ignores_swipes_towards_it() {
    let mut list = list();

    // Row 1 only has a left action, so a leftward swipe has nothing to show.
    list.swipe(row_center(1), 228.0, 180.0, 4).expect("swipe");
    list.settle();

    assert_eq!(list.offset_of(1), 0);
    assert!(list.state_changes().is_empty());
}
