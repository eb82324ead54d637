use super::*;
use crate::animation::state::{CurveVariant, DrawMode, M_MAX};

#[test]
fn arrows_nudge_radii() {
    let mut s = AnimationState::default();
    assert_eq!(apply_key(&mut s, Key::Down), KeyOutcome::Updated);
    assert!((s.big_r - 36.1).abs() < 1e-12);
    apply_key(&mut s, Key::Up);
    apply_key(&mut s, Key::Up);
    assert!((s.big_r - 35.9).abs() < 1e-12);
    apply_key(&mut s, Key::Right);
    assert!((s.small_r - 0.08001).abs() < 1e-12);
    apply_key(&mut s, Key::Left);
    apply_key(&mut s, Key::Left);
    assert!((s.small_r - 0.07999).abs() < 1e-12);
}

#[test]
fn control_keys_report_outcomes_without_touching_state() {
    let mut s = AnimationState::default();
    let before = s.clone();
    assert_eq!(apply_key(&mut s, Key::Escape), KeyOutcome::Quit);
    assert_eq!(apply_key(&mut s, Key::Return), KeyOutcome::ToggleFullscreen);
    assert_eq!(apply_key(&mut s, Key::F2), KeyOutcome::ExportSvg);
    assert_eq!(s, before);
}

#[test]
fn mode_keys_flip_enums() {
    let mut s = AnimationState::default();
    apply_key(&mut s, Key::F1);
    assert_eq!(s.variant, CurveVariant::Ring);
    apply_key(&mut s, Key::F1);
    assert_eq!(s.variant, CurveVariant::TriFrequency);
    apply_key(&mut s, Key::M);
    assert_eq!(s.draw_mode, DrawMode::Dots);
}

#[test]
fn frequency_keys_wrap() {
    let mut s = AnimationState {
        m: M_MAX,
        ..AnimationState::default()
    };
    apply_key(&mut s, Key::W);
    assert_eq!(s.m, -M_MAX);
    apply_key(&mut s, Key::S);
    assert_eq!(s.m, M_MAX);

    apply_key(&mut s, Key::E);
    assert!((s.n - 6.1).abs() < 1e-12);
    apply_key(&mut s, Key::D);
    apply_key(&mut s, Key::D);
    assert!((s.n - 5.9).abs() < 1e-12);

    apply_key(&mut s, Key::Q);
    assert_eq!(s.q, 31.0);
    apply_key(&mut s, Key::A);
    assert_eq!(s.q, 30.0);
}

#[test]
fn digit_keys_change_line_width() {
    let mut s = AnimationState::default();
    apply_key(&mut s, Key::Digit2);
    assert!((s.line_width - 0.7).abs() < 1e-12);
    apply_key(&mut s, Key::Digit1);
    apply_key(&mut s, Key::Digit1);
    assert!((s.line_width - 0.5).abs() < 1e-12);
}
