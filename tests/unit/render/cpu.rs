use super::*;
use crate::animation::state::CurveVariant;

fn small_canvas() -> Canvas {
    Canvas::new(320, 240).unwrap()
}

#[test]
fn frame_has_canvas_size_and_black_corners() {
    let mut r = CpuRenderer::new();
    let canvas = Canvas::new(1280, 720).unwrap();
    let frame = r.render(&AnimationState::default(), canvas).unwrap();
    assert_eq!(frame.width, 1280);
    assert_eq!(frame.height, 720);
    assert_eq!(frame.data.len(), 1280 * 720 * 4);
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(1279, 719), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(1280, 0), None);
    assert!(frame.lit_pixels() > 0);
    assert_eq!(r.frames_rendered(), 1);
}

#[test]
fn same_state_renders_identical_pixels() {
    let state = AnimationState::default();
    let mut r = CpuRenderer::new();
    let a = r.render(&state, small_canvas()).unwrap();
    let b = r.render(&state, small_canvas()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn variant_toggle_twice_restores_output() {
    let mut state = AnimationState::default();
    let mut r = CpuRenderer::new();
    let original = r.render(&state, small_canvas()).unwrap();

    state.variant = state.variant.toggle();
    assert_eq!(state.variant, CurveVariant::Ring);
    let flipped = r.render(&state, small_canvas()).unwrap();
    assert_ne!(flipped.data, original.data);

    state.variant = state.variant.toggle();
    let restored = r.render(&state, small_canvas()).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn dots_and_lines_differ() {
    let mut state = AnimationState::default();
    let mut r = CpuRenderer::new();
    let lines = r.render(&state, small_canvas()).unwrap();
    state.draw_mode = DrawMode::Dots;
    let dots = r.render(&state, small_canvas()).unwrap();
    assert_ne!(lines.data, dots.data);
    assert!(dots.lit_pixels() > 0);
}

#[test]
fn zero_line_width_leaves_the_frame_black() {
    let state = AnimationState {
        line_width: 0.0,
        ..AnimationState::default()
    };
    let frame = CpuRenderer::new().render(&state, small_canvas()).unwrap();
    assert_eq!(frame.lit_pixels(), 0);
}

#[test]
fn degenerate_rolling_radius_does_not_panic() {
    let state = AnimationState {
        small_r: 0.0,
        ..AnimationState::default()
    };
    let frame = CpuRenderer::new().render(&state, small_canvas()).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
}
