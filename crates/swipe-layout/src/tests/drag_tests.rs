use super::*;

const WIDTH: i32 = 300;

/// Panel with the center at `offset`, an optional LEFT (100 px) and RIGHT
/// (80 px) surface laid out flush against it.
fn snapshot(offset: i32, left: Option<AutoOpen>, right: Option<AutoOpen>) -> SurfaceSnapshot {
    let arrangement = arrange_surfaces(offset, WIDTH, left.map(|_| 100), right.map(|_| 80));
    SurfaceSnapshot {
        parent_width: WIDTH,
        center: SurfaceBounds::new(offset, WIDTH),
        left: left.zip(arrangement.left).map(|(auto_open, at)| SideBounds {
            bounds: SurfaceBounds::new(at, 100),
            auto_open,
        }),
        right: right.zip(arrangement.right).map(|(auto_open, at)| SideBounds {
            bounds: SurfaceBounds::new(at, 80),
            auto_open,
        }),
    }
}

fn both_sides(offset: i32) -> SurfaceSnapshot {
    snapshot(offset, Some(AutoOpen::Disabled), Some(AutoOpen::Disabled))
}

#[test]
fn center_cannot_move_right_without_a_left_surface() {
    let snap = snapshot(0, None, Some(AutoOpen::Disabled));
    assert_eq!(clamp_horizontal(&snap, Gravity::Center, 20, 20), 0);
    assert_eq!(clamp_move_right(&snap, Gravity::Right, 400), WIDTH);
}

#[test]
fn rightward_travel_stops_when_left_surface_is_revealed() {
    let snap = both_sides(0);
    assert_eq!(clamp_horizontal(&snap, Gravity::Center, 150, 150), 100);
    assert_eq!(clamp_horizontal(&snap, Gravity::Center, 60, 60), 60);
    // The left surface itself stops at the panel edge.
    assert_eq!(clamp_move_right(&snap, Gravity::Left, 40), 0);
}

#[test]
fn leftward_travel_stops_when_right_surface_is_revealed() {
    let snap = both_sides(0);
    assert_eq!(clamp_horizontal(&snap, Gravity::Center, -120, -120), -80);
    assert_eq!(clamp_move_left(&snap, Gravity::Right, 100), 220);

    let no_right = snapshot(0, Some(AutoOpen::Disabled), None);
    assert_eq!(clamp_move_left(&no_right, Gravity::Center, -10), 0);
    assert_eq!(clamp_move_left(&no_right, Gravity::Left, -500), -100);
}

#[test]
fn zero_travel_is_ignored() {
    let snap = both_sides(40);
    assert_eq!(
        resolve_release(&snap, Gravity::Center, 40, 5_000.0, 1_500.0),
        ReleaseDecision::Ignore
    );
}

#[test]
fn fast_rightward_release_opens_the_left_surface() {
    let snap = both_sides(40);
    assert_eq!(
        resolve_release(&snap, Gravity::Center, 0, 2_500.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: 100,
            reason: SettleReason::Fling
        }
    );
}

#[test]
fn fast_leftward_release_opens_the_right_surface() {
    let snap = both_sides(-20);
    assert_eq!(
        resolve_release(&snap, Gravity::Center, 0, -3_000.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: -80,
            reason: SettleReason::Fling
        }
    );
}

#[test]
fn velocity_against_travel_picks_the_other_branch() {
    // Dragged right by 30 but flung back left: closes.
    let snap = both_sides(30);
    assert_eq!(
        resolve_release(&snap, Gravity::Center, 0, -2_000.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: 0,
            reason: SettleReason::Fling
        }
    );
}

#[test]
fn slow_release_below_auto_open_falls_through_to_closed() {
    let snap = snapshot(30, Some(AutoOpen::Distance(50)), None);
    assert_eq!(
        resolve_release(&snap, Gravity::Center, 0, 0.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: 0,
            reason: SettleReason::FallThrough
        }
    );
}

#[test]
fn slow_release_past_auto_open_distance_opens() {
    let snap = snapshot(60, Some(AutoOpen::Distance(50)), None);
    assert_eq!(
        resolve_release(&snap, Gravity::Center, 0, 200.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: 100,
            reason: SettleReason::AutoOpen
        }
    );

    let right = snapshot(-60, None, Some(AutoOpen::Distance(50)));
    assert_eq!(
        resolve_release(&right, Gravity::Center, 0, 0.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: -80,
            reason: SettleReason::AutoOpen
        }
    );
}

#[test]
fn fully_revealed_side_opens_in_place() {
    assert_eq!(
        resolve_release(&both_sides(100), Gravity::Center, 0, 0.0, 1_500.0),
        ReleaseDecision::OpenInPlace
    );
    assert_eq!(
        resolve_release(&both_sides(-80), Gravity::Center, 0, 0.0, 1_500.0),
        ReleaseDecision::OpenInPlace
    );
}

#[test]
fn missing_side_in_travel_direction_closes() {
    // Right surface was open at -80 and is dragged back towards closed.
    let snap = snapshot(-40, None, Some(AutoOpen::Disabled));
    assert_eq!(
        resolve_release(&snap, Gravity::Center, -80, 0.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: 0,
            reason: SettleReason::NoSideSurface
        }
    );
}

#[test]
fn dragged_side_surface_settles_relative_to_center() {
    // The RIGHT surface was grabbed and dragged left a little, then let go.
    let snap = both_sides(-30);
    let right_left = snap.bounds(Gravity::Right).left;
    assert_eq!(right_left, 270);
    assert_eq!(
        resolve_release(&snap, Gravity::Right, 300, 0.0, 1_500.0),
        ReleaseDecision::Settle {
            target_left: 300,
            reason: SettleReason::FallThrough
        }
    );
}

#[test]
fn clamps_hold_over_arbitrary_moves() {
    // Linear congruential sequence of move deltas.
    let mut seed: u32 = 0x2545_f491;
    let mut snap = both_sides(0);
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let dx = ((seed >> 16) % 121) as i32 - 60;
        let old = snap.center.left;
        let clamped = clamp_horizontal(&snap, Gravity::Center, old + dx, dx);
        snap = snap.shifted(clamped - old);
        assert!((-80..=100).contains(&snap.center.left), "offset {}", snap.center.left);
    }
}
