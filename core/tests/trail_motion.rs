use tsukikage_core::tilt::{flat_transform, tilt_angles, tilt_transform};
use tsukikage_core::trail::{idle_target, Trail, TrailParams};

#[test]
fn chain_converges_on_a_stationary_target() {
    let mut trail = Trail::new(TrailParams::default(), 0.0, 0.0);
    for _ in 0..200 {
        trail.step(320.0, 240.0);
    }
    for point in trail.points() {
        assert!((point.x - 320.0).abs() < 1.0e-3);
        assert!((point.y - 240.0).abs() < 1.0e-3);
    }
}

#[test]
fn tail_lags_behind_the_lead_point() {
    let mut trail = Trail::new(TrailParams::default(), 0.0, 0.0);
    for _ in 0..5 {
        trail.step(100.0, 0.0);
    }
    let points = trail.points();
    let lead = points[0].x;
    let tail = points[points.len() - 1].x;
    assert!(lead > tail, "lead {lead} should be ahead of tail {tail}");
}

#[test]
fn segment_width_tapers_toward_the_tail() {
    let params = TrailParams::default();
    let trail = Trail::new(params, 0.0, 0.0);
    assert_eq!(trail.segment_width(0), params.width_factor * 40.0);
    assert!(trail.segment_width(1) > trail.segment_width(30));
    assert_eq!(trail.segment_width(40), 0.0);
}

#[test]
fn idle_target_is_deterministic_in_time() {
    let a = idle_target(1234.5, 1280.0, 720.0);
    let b = idle_target(1234.5, 1280.0, 720.0);
    assert_eq!(a, b);

    // At t = 0 the cosines collapse to a fixed viewport fraction.
    let (x, y) = idle_target(0.0, 1000.0, 1000.0);
    assert!((x - 500.0).abs() < 1.0e-9);
    assert!((y - 800.0).abs() < 1.0e-9);
}

#[test]
fn idle_target_stays_inside_a_padded_viewport() {
    for step in 0..500 {
        let t = step as f64 * 16.0;
        let (x, y) = idle_target(t, 1280.0, 720.0);
        assert!(x >= 0.0 && x <= 1280.0, "x {x} at t {t}");
        assert!(y >= 0.0 && y <= 720.0 * 1.1, "y {y} at t {t}");
    }
}

#[test]
fn pointer_at_center_keeps_the_card_flat() {
    assert_eq!(tilt_angles(150.0, 100.0, 300.0, 200.0), (0.0, 0.0));
}

#[test]
fn tilt_tips_away_from_the_pointer() {
    // Pointer at the right edge: card rotates negatively around Y.
    let (_, rotate_y) = tilt_angles(300.0, 100.0, 300.0, 200.0);
    assert_eq!(rotate_y, -7.5);
    // Pointer at the bottom edge: card rotates positively around X.
    let (rotate_x, _) = tilt_angles(150.0, 200.0, 300.0, 200.0);
    assert_eq!(rotate_x, 7.5);
}

#[test]
fn degenerate_card_size_stays_flat() {
    assert_eq!(tilt_angles(10.0, 10.0, 0.0, 200.0), (0.0, 0.0));
}

#[test]
fn transforms_carry_the_perspective() {
    assert_eq!(
        tilt_transform(150.0, 100.0, 300.0, 200.0),
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg)"
    );
    assert_eq!(flat_transform(), "perspective(1000px) rotateX(0) rotateY(0)");
}
