//! Offset changes requested from code rather than touch.

use std::rc::Rc;

use swipe_core::Runtime;
use swipe_layout::{Gravity, SwipeConfig, SwipeHost, SwipeLayout};
use swipe_testing::{SwipeRobot, TestHost, FRAME_NANOS};

fn launch_both_sides() -> SwipeRobot {
    let host = TestHost::builder(300).left(100).right(80).build();
    SwipeRobot::launch(host, SwipeConfig::default()).expect("host has a center surface")
}

#[test]
fn set_offset_moves_every_surface_at_once() {
    let robot = launch_both_sides();

    robot.layout().set_offset(-30);
    assert_eq!(robot.layout().offset(), -30);
    assert!(robot.layout().is_open());
    assert_eq!(robot.host().left_of(Gravity::Right), Some(270));
    assert_eq!(robot.host().left_of(Gravity::Left), Some(-130));

    robot.layout().set_offset(0);
    assert!(robot.layout().is_close());
    assert_eq!(robot.host().left_of(Gravity::Right), Some(300));
}

#[test]
fn close_on_closed_panel_does_nothing() {
    let robot = launch_both_sides();
    let states = robot.record_states();

    robot.layout().close();
    robot.layout().animate_reset();

    assert!(!robot.layout().is_animating());
    assert!(states.borrow().is_empty());
}

#[test]
fn close_animates_back_and_reports_closed() {
    let mut robot = launch_both_sides();
    let states = robot.record_states();

    robot.layout().set_offset(60);
    robot.layout().close();
    assert!(robot.layout().is_animating());

    robot.run_until_idle();
    assert_eq!(robot.layout().offset(), 0);
    assert_eq!(*states.borrow(), vec![false]);

    robot.layout().close();
    assert!(!robot.layout().is_animating());
    assert_eq!(states.borrow().len(), 1);
}

#[test]
fn tween_follows_accelerating_curve() {
    let mut robot = launch_both_sides();
    robot.layout().animate_swipe_right();

    // The first frame anchors the clock.
    robot.advance_frame();
    assert_eq!(robot.layout().offset(), 0);

    robot.advance_frames(6);
    let elapsed = (6 * FRAME_NANOS) as f32 / 200_000_000.0;
    let expected = (100.0 * elapsed * elapsed) as i32;
    let offset = robot.layout().offset();
    assert!((offset - expected).abs() <= 1, "offset {offset}, expected {expected}");

    robot.run_until_idle();
    assert_eq!(robot.layout().offset(), 100);
}

#[test]
fn tween_takes_two_hundred_milliseconds() {
    let mut robot = launch_both_sides();
    let states = robot.record_states();
    robot.layout().animate_swipe_left();

    let frames = robot.run_until_idle();

    // One anchoring frame plus twelve 16.7 ms frames.
    assert_eq!(frames, 13);
    assert_eq!(robot.layout().offset(), -80);
    assert_eq!(*states.borrow(), vec![true]);
}

#[test]
fn new_tween_supersedes_running_one() {
    let mut robot = launch_both_sides();
    let states = robot.record_states();

    robot.layout().animate_swipe_right();
    robot.advance_frames(4);
    let midway = robot.layout().offset();
    assert!(midway > 0 && midway < 100);

    robot.layout().animate_swipe_left();
    robot.run_until_idle();

    assert_eq!(robot.layout().offset(), -80);
    assert_eq!(*states.borrow(), vec![true]);
}

#[test]
fn set_offset_cancels_running_tween() {
    let mut robot = launch_both_sides();
    let states = robot.record_states();

    robot.layout().animate_swipe_right();
    robot.advance_frames(3);
    robot.layout().set_offset(-20);

    assert!(!robot.layout().is_animating());
    robot.run_until_idle();
    assert_eq!(robot.layout().offset(), -20);
    assert!(states.borrow().is_empty());
}

#[test]
fn directional_tween_without_side_is_ignored() {
    let host = TestHost::builder(300).left(100).build();
    let robot = SwipeRobot::launch(host, SwipeConfig::default()).expect("host has a center surface");

    robot.layout().animate_swipe_left();

    assert!(!robot.layout().is_animating());
    assert_eq!(robot.layout().offset(), 0);
}

#[test]
fn tween_ignores_enable_flags() {
    let mut robot = launch_both_sides();
    robot.layout().set_swipe_enabled(false);

    robot.layout().animate_swipe_left();
    robot.run_until_idle();

    assert_eq!(robot.layout().offset(), -80);
}

#[test]
fn dropping_the_layout_stops_its_animation() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let host = TestHost::builder(300).left(100).build();
    let dyn_host: Rc<dyn SwipeHost> = host.clone();
    let layout = SwipeLayout::new(dyn_host, handle.clone(), SwipeConfig::default());
    layout.on_layout().expect("host has a center surface");

    layout.animate_swipe_right();
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(100_000_000);
    let offset = host.center_left();
    assert!(offset > 0 && offset < 100);

    drop(layout);
    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(400_000_000);
    assert_eq!(host.center_left(), offset);
}
