use swipe_layout::{ScrollAncestor, SwipeConfig, TouchState};
use swipe_testing::{SwipeRobot, TestAncestor, TestHost};

#[test]
fn swipe_disables_nested_scroll_ancestors_until_release() {
    let host = TestHost::builder(300).left(100).build();
    let list = TestAncestor::nested_scroll();
    let frame = TestAncestor::plain();
    host.add_ancestor(&list);
    host.add_ancestor(&frame);
    let mut robot = SwipeRobot::launch(host, SwipeConfig::default()).expect("center surface");

    robot.down(150.0, 10.0);
    robot.move_to(155.0, 10.0, 16);
    assert_eq!(robot.layout().touch_state(), TouchState::Wait);
    assert!(list.is_enabled());

    robot.move_to(170.0, 10.0, 16);
    assert_eq!(robot.layout().touch_state(), TouchState::Swipe);
    assert!(!list.is_enabled());
    assert!(frame.is_enabled());
    assert_eq!(frame.toggles(), 0);

    robot.up(16);
    assert!(list.is_enabled());
    assert_eq!(list.toggles(), 2);
    assert_eq!(robot.host().disallow_history(), vec![true, false]);
}

#[test]
fn disabled_ancestor_stays_disabled_after_swipe() {
    let host = TestHost::builder(300).left(100).build();
    let list = TestAncestor::new(true, false);
    host.add_ancestor(&list);
    let mut robot = SwipeRobot::launch(host, SwipeConfig::default()).expect("center surface");

    robot.drag_horizontally(150.0, 10.0, 200.0, 5, 16);

    assert!(!list.is_enabled());
    assert_eq!(list.toggles(), 2);
}

#[test]
fn missing_up_is_closed_out_by_next_down() {
    let host = TestHost::builder(300).left(100).build();
    let list = TestAncestor::nested_scroll();
    host.add_ancestor(&list);
    let mut robot = SwipeRobot::launch(host, SwipeConfig::default()).expect("center surface");

    robot.down(150.0, 10.0);
    robot.move_to(170.0, 10.0, 16);
    assert!(!list.is_enabled());

    // The up never arrives; the next session restores the ancestor first.
    robot.down(100.0, 10.0);
    assert!(list.is_enabled());
    assert_eq!(robot.layout().touch_state(), TouchState::Wait);
    assert_eq!(robot.host().disallow_history(), vec![true, false]);
}

#[test]
fn dropping_the_layout_restores_ancestors() {
    let host = TestHost::builder(300).left(100).build();
    let list = TestAncestor::nested_scroll();
    host.add_ancestor(&list);
    let mut robot = SwipeRobot::launch(host, SwipeConfig::default()).expect("center surface");

    robot.down(150.0, 10.0);
    robot.move_to(170.0, 10.0, 16);
    assert!(!list.is_enabled());

    drop(robot);
    assert!(list.is_enabled());
}

#[test]
fn vertical_scroll_leaves_ancestors_alone() {
    let host = TestHost::builder(300).left(100).height(200.0).build();
    let list = TestAncestor::nested_scroll();
    host.add_ancestor(&list);
    let mut robot = SwipeRobot::launch(host, SwipeConfig::default()).expect("center surface");

    robot.down(150.0, 10.0);
    robot.move_to(151.0, 40.0, 16);
    robot.move_to(152.0, 90.0, 16);
    robot.up(16);

    assert_eq!(list.toggles(), 0);
    assert!(robot.host().disallow_history().is_empty());
}
