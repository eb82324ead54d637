use super::*;

#[test]
fn dead_zone_zeroes_small_axis_values() {
    let mut js = JoystickState::default();
    js.set_axis(0, 0.02);
    assert_eq!(js.axis(0), 0.0);
    js.set_axis(0, -0.5);
    assert_eq!(js.axis(0), -0.5);
    js.set_axis(0, 0.01);
    assert_eq!(js.axis(0), 0.0);
}

#[test]
fn centered_device_contributes_nothing() {
    assert_eq!(JoystickState::default().deltas(), ContinuousDelta::default());
    assert_eq!(NoContinuousInput.poll(), ContinuousDelta::default());
}

#[test]
fn stick_and_button_gains() {
    let mut js = JoystickState::default();
    js.set_axis(0, 1.0);
    js.set_axis(2, -0.5);
    js.set_button(4, true);
    let d = js.deltas();
    // 1.0/4*1.5 + (-0.5)/4*0.1 + 0.5 * sgn(-0.5)
    assert!((d.big_r - (0.375 - 0.0125 - 0.5)).abs() < 1e-12);

    js.set_axis(1, 0.5);
    js.set_axis(3, 1.0);
    js.set_button(6, true);
    let d = js.deltas();
    assert!((d.small_r - (0.0125 + 0.000_002_5 + 0.01)).abs() < 1e-12);
}

#[test]
fn shoulder_buttons_adjust_line_width() {
    let mut js = JoystickState::default();
    js.set_button(5, true);
    assert!((js.deltas().line_width + 0.02).abs() < 1e-12);
    js.set_button(7, true);
    assert_eq!(js.deltas().line_width, 0.0);
    js.set_button(5, false);
    assert!((js.deltas().line_width - 0.02).abs() < 1e-12);
}

#[test]
fn jump_buttons_need_a_deflected_stick() {
    let mut js = JoystickState::default();
    js.set_button(4, true);
    js.set_button(6, true);
    assert_eq!(js.deltas(), ContinuousDelta::default());
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut js = JoystickState::default();
    js.set_axis(MAX_AXES, 1.0);
    js.set_button(MAX_BUTTONS + 3, true);
    assert_eq!(js, JoystickState::default());
    assert_eq!(js.axis(99), 0.0);
}

#[test]
fn disabled_input_polls_zero() {
    let mut input = open_continuous_input(false);
    assert_eq!(input.poll(), ContinuousDelta::default());
}

#[test]
fn fixed_joystick_replays_its_state() {
    let mut js = FixedJoystick::default();
    js.state.set_axis(0, 0.8);
    let a = js.poll();
    let b = js.poll();
    assert_eq!(a, b);
    assert!(a.big_r > 0.0);
}
