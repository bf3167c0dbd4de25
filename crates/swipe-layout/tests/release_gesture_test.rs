//! Drag-and-release gestures driven through the full panel.

use swipe_layout::{Gravity, SwipeConfig, TouchState};
use swipe_testing::{SwipeRobot, TestHost};

fn launch(host: std::rc::Rc<TestHost>) -> SwipeRobot {
    SwipeRobot::launch(host, SwipeConfig::default()).expect("host has a center surface")
}

#[test]
fn fast_drag_right_flings_left_surface_open() {
    let mut robot = launch(TestHost::builder(300).left(100).build());
    let states = robot.record_states();

    // 10 px every 4 ms is 2500 px/s, above the 1500 px/s threshold.
    robot.drag_horizontally(150.0, 10.0, 190.0, 4, 4);
    assert_eq!(robot.layout().offset(), 40);
    assert!(robot.layout().is_animating());

    let frames = robot.run_until_idle();
    assert!(frames > 1, "settle should span several frames");
    assert_eq!(robot.layout().offset(), 100);
    assert_eq!(robot.host().left_of(Gravity::Left), Some(0));
    assert!(robot.layout().is_open());
    assert_eq!(*states.borrow(), vec![true]);
}

#[test]
fn settle_moves_monotonically_towards_target() {
    let mut robot = launch(TestHost::builder(300).left(100).build());
    robot.drag_horizontally(150.0, 10.0, 190.0, 4, 4);

    let mut previous = robot.layout().offset();
    while robot.layout().is_animating() {
        robot.advance_frame();
        let offset = robot.layout().offset();
        assert!(offset >= previous, "{offset} went back from {previous}");
        assert!(offset <= 100);
        previous = offset;
    }
    assert_eq!(previous, 100);
}

#[test]
fn slow_drag_past_auto_open_distance_opens_right_surface() {
    let mut robot = launch(TestHost::builder(300).right_auto_open(80, 50).build());
    let states = robot.record_states();

    // 5 px every 16 ms stays well under the fling threshold.
    robot.drag_horizontally(200.0, 10.0, 145.0, 11, 16);
    assert_eq!(robot.layout().offset(), -55);

    robot.run_until_idle();
    assert_eq!(robot.layout().offset(), -80);
    assert_eq!(robot.host().left_of(Gravity::Right), Some(220));
    assert_eq!(*states.borrow(), vec![true]);
}

#[test]
fn slow_drag_short_of_auto_open_distance_closes() {
    let mut robot = launch(TestHost::builder(300).right_auto_open(80, 50).build());
    let states = robot.record_states();

    robot.drag_horizontally(200.0, 10.0, 155.0, 9, 16);
    assert_eq!(robot.layout().offset(), -45);

    robot.run_until_idle();
    assert!(robot.layout().is_close());
    assert_eq!(*states.borrow(), vec![false]);
}

#[test]
fn drag_towards_missing_surface_never_moves() {
    let mut robot = launch(TestHost::builder(300).right(80).build());
    let states = robot.record_states();

    robot.drag_horizontally(100.0, 10.0, 200.0, 10, 4);

    assert_eq!(robot.layout().offset(), 0);
    assert!(!robot.layout().is_animating());
    assert!(states.borrow().is_empty());
}

#[test]
fn drag_stops_when_side_is_fully_revealed() {
    let mut robot = launch(TestHost::builder(300).left(100).build());
    let states = robot.record_states();

    robot.down(50.0, 10.0);
    for step in 1..=20 {
        robot.move_to(50.0 + step as f32 * 10.0, 10.0, 16);
    }
    assert_eq!(robot.layout().offset(), 100);

    // Hold still long enough that no velocity is left at release.
    robot.move_to(250.0, 10.0, 100);
    robot.up(100);

    assert!(!robot.layout().is_animating());
    assert_eq!(robot.layout().offset(), 100);
    assert_eq!(*states.borrow(), vec![true]);
}

#[test]
fn high_velocity_threshold_turns_fling_into_close() {
    let config = SwipeConfig::default().with_velocity_threshold(10_000.0);
    let host = TestHost::builder(300).left(100).build();
    let mut robot = SwipeRobot::launch(host, config).expect("host has a center surface");
    let states = robot.record_states();

    robot.drag_horizontally(150.0, 10.0, 190.0, 4, 4);
    robot.run_until_idle();

    assert!(robot.layout().is_close());
    assert_eq!(*states.borrow(), vec![false]);
}

#[test]
fn vertical_motion_is_skipped() {
    let mut robot = launch(TestHost::builder(300).left(100).height(400.0).build());

    robot.down(150.0, 10.0);
    robot.move_to(152.0, 60.0, 16);
    assert_eq!(robot.layout().touch_state(), TouchState::Skip);

    robot.move_to(250.0, 60.0, 16);
    assert_eq!(robot.layout().offset(), 0);

    robot.up(16);
    assert_eq!(robot.layout().touch_state(), TouchState::Wait);
}

#[test]
fn disabled_panel_declines_touches() {
    let mut robot = launch(TestHost::builder(300).left(100).right(80).build());
    robot.layout().set_swipe_enabled(false);
    assert!(!robot.layout().is_swipe_enabled());

    assert!(!robot.down(150.0, 10.0));
    assert!(!robot.move_to(200.0, 10.0, 4));
    assert!(!robot.up(4));
    assert_eq!(robot.layout().offset(), 0);
}

#[test]
fn blocked_direction_is_declined_while_closed() {
    let mut robot = launch(TestHost::builder(300).left(100).right(80).build());
    robot.layout().set_left_swipe_enabled(false);

    assert!(robot.down(150.0, 10.0));
    assert!(!robot.move_to(170.0, 10.0, 4));
    robot.move_to(200.0, 10.0, 4);
    robot.up(4);

    assert_eq!(robot.layout().offset(), 0);

    // The other direction still works.
    robot.drag_horizontally(200.0, 10.0, 160.0, 4, 4);
    robot.run_until_idle();
    assert_eq!(robot.layout().offset(), -80);
}

#[test]
fn cancel_releases_without_velocity() {
    let mut robot = launch(TestHost::builder(300).left(100).build());
    let states = robot.record_states();

    robot.down(150.0, 10.0);
    for step in 1..=4 {
        robot.move_to(150.0 + step as f32 * 10.0, 10.0, 4);
    }
    robot.cancel();
    robot.run_until_idle();

    // Without velocity a 40 px reveal falls through to closing.
    assert!(robot.layout().is_close());
    assert_eq!(*states.borrow(), vec![false]);
}

#[test]
fn listener_can_call_back_into_the_layout() {
    let mut robot = launch(TestHost::builder(300).left(100).build());
    robot.layout().set_on_state_changed_listener(|is_open, layout| {
        if is_open {
            layout.set_offset(0);
        }
    });

    robot.drag_horizontally(150.0, 10.0, 190.0, 4, 4);
    robot.run_until_idle();

    assert!(robot.layout().is_close());
}
