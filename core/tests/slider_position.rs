use tsukikage_core::slider::{
    clip_inset, left_percent, position_from_offset, SliderState, DEFAULT_POSITION, KEY_STEP,
};

#[test]
fn set_position_clamps_out_of_range_values() {
    let mut state = SliderState::default();
    assert_eq!(state.set_position(150.0), 100.0);
    assert_eq!(state.position, 100.0);
    assert_eq!(state.set_position(-10.0), 0.0);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.set_position(37.5), 37.5);
}

#[test]
fn clip_inset_hides_the_complement_of_the_position() {
    assert_eq!(clip_inset(150.0), "inset(0 0% 0 0)");
    assert_eq!(clip_inset(-10.0), "inset(0 100% 0 0)");
    assert_eq!(clip_inset(75.0), "inset(0 25% 0 0)");
    assert_eq!(clip_inset(37.5), "inset(0 62.500% 0 0)");
}

#[test]
fn left_percent_tracks_the_clamped_position() {
    assert_eq!(left_percent(50.0), "50%");
    assert_eq!(left_percent(120.0), "100%");
}

#[test]
fn offset_converts_to_container_percentage() {
    assert_eq!(position_from_offset(150.0, 100.0, 200.0), Some(25.0));
    assert_eq!(position_from_offset(100.0, 100.0, 200.0), Some(0.0));
    assert_eq!(position_from_offset(300.0, 100.0, 200.0), Some(100.0));
}

#[test]
fn offset_past_the_container_clamps_on_store() {
    let mut state = SliderState::default();
    let raw = position_from_offset(500.0, 100.0, 200.0).unwrap();
    assert_eq!(raw, 200.0);
    assert_eq!(state.set_position(raw), 100.0);
}

#[test]
fn degenerate_container_width_yields_no_position() {
    assert_eq!(position_from_offset(150.0, 100.0, 0.0), None);
    assert_eq!(position_from_offset(150.0, 100.0, -5.0), None);
}

#[test]
fn keyboard_nudge_steps_and_clamps() {
    let mut state = SliderState::default();
    assert_eq!(state.nudge(-KEY_STEP), DEFAULT_POSITION - KEY_STEP);
    state.set_position(2.0);
    assert_eq!(state.nudge(-KEY_STEP), 0.0);
    state.set_position(98.0);
    assert_eq!(state.nudge(KEY_STEP), 100.0);
}

#[test]
fn nudge_is_independent_of_drag_state() {
    let mut state = SliderState::default();
    state.begin_drag();
    assert_eq!(state.nudge(KEY_STEP), DEFAULT_POSITION + KEY_STEP);
    assert!(state.dragging);
    state.end_drag();
    assert!(!state.dragging);
}

#[test]
fn fresh_state_is_centered_and_not_dragging() {
    let state = SliderState::default();
    assert_eq!(state.position, DEFAULT_POSITION);
    assert!(!state.dragging);
}
