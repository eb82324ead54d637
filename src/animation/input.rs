use crate::animation::state::{AnimationState, BIG_R_KEY_DELTA, SMALL_R_KEY_DELTA};

/// Keys the interaction loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Return / Enter.
    Return,
    /// Escape.
    Escape,
    /// Function key 1.
    F1,
    /// Function key 2.
    F2,
    /// Digit 1.
    Digit1,
    /// Digit 2.
    Digit2,
    /// Letter Q.
    Q,
    /// Letter A.
    A,
    /// Letter W.
    W,
    /// Letter S.
    S,
    /// Letter E.
    E,
    /// Letter D.
    D,
    /// Letter M.
    M,
}

/// What the front-end has to do after a key was applied to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The state was updated in place; nothing else to do.
    Updated,
    /// Leave the loop.
    Quit,
    /// Flip between windowed and fullscreen.
    ToggleFullscreen,
    /// Write the current frame as SVG.
    ExportSvg,
}

/// Apply one key press (or auto-repeat) to `state`.
pub fn apply_key(state: &mut AnimationState, key: Key) -> KeyOutcome {
    match key {
        Key::Escape => return KeyOutcome::Quit,
        Key::Return => return KeyOutcome::ToggleFullscreen,
        Key::F2 => return KeyOutcome::ExportSvg,
        Key::Left => state.small_r -= SMALL_R_KEY_DELTA,
        Key::Right => state.small_r += SMALL_R_KEY_DELTA,
        Key::Up => state.big_r -= BIG_R_KEY_DELTA,
        Key::Down => state.big_r += BIG_R_KEY_DELTA,
        Key::F1 => state.variant = state.variant.toggle(),
        Key::M => state.draw_mode = state.draw_mode.toggle(),
        Key::Digit1 => state.step_line_width(-1.0),
        Key::Digit2 => state.step_line_width(1.0),
        Key::Q => state.step_q(1.0),
        Key::A => state.step_q(-1.0),
        Key::W => state.step_m(1.0),
        Key::S => state.step_m(-1.0),
        Key::E => state.step_n(1.0),
        Key::D => state.step_n(-1.0),
    }
    KeyOutcome::Updated
}

#[cfg(test)]
#[path = "../../tests/unit/animation/input.rs"]
mod tests;
