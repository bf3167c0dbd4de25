use super::*;

#[test]
fn baseline_density_keeps_dp_values() {
    let config = ViewConfiguration::default();
    assert_eq!(config.scaled_touch_slop(), 8);
    assert_eq!(config.swipe_velocity_threshold(), 1500.0);
    assert_eq!(config.min_fling_velocity(), 50.0);
    assert_eq!(config.max_fling_velocity(), 8_000.0);
}

#[test]
fn thresholds_scale_with_density() {
    let config = ViewConfiguration::new(2.75);
    assert_eq!(config.scaled_touch_slop(), 22);
    assert_eq!(config.swipe_velocity_threshold(), 4125.0);
}

#[test]
fn invalid_density_falls_back_to_baseline() {
    assert_eq!(ViewConfiguration::new(0.0).density(), 1.0);
    assert_eq!(ViewConfiguration::new(f32::NAN).density(), 1.0);
}

#[test]
fn pointer_event_consumption_is_shared_between_copies() {
    let event = PointerEvent::moved(10.0, 0.0, 16);
    let copy = event.clone();
    copy.consume();
    assert!(event.is_consumed());
    assert_eq!(event.phase, PointerPhase::Move);
}

#[test]
fn up_and_cancel_end_the_session() {
    assert!(PointerEventKind::Up.ends_session());
    assert!(PointerEventKind::Cancel.ends_session());
    assert!(!PointerEventKind::Move.ends_session());
}
