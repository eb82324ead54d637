//! Continuous input devices (joystick / gamepad).
//!
//! A device is optional. [`open_continuous_input`] returns [`NoContinuousInput`] when none is
//! available, whose contribution is always zero, so the frame loop never branches on device
//! presence.

/// Number of tracked axes.
pub const MAX_AXES: usize = 20;
/// Number of tracked buttons.
pub const MAX_BUTTONS: usize = 20;

/// Normalized axis magnitude treated as zero (1000 of 32768 raw units).
pub const AXIS_DEAD_ZONE: f64 = 1000.0 / 32768.0;

/// Normalized axes are quartered before the per-axis gains below.
const AXIS_SCALE: f64 = 0.25;

/// Per-frame deltas produced by a continuous input device.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContinuousDelta {
    /// Added to `R`.
    pub big_r: f64,
    /// Added to `r`.
    pub small_r: f64,
    /// Added to the line width.
    pub line_width: f64,
}

/// Latest axis and button values of one device.
///
/// Axes are normalized to `[-1, 1]` with the Y axes pointing down. Axis 0/1 are the left
/// stick, 2/3 the right stick; buttons 4..=7 are the four shoulder buttons.
#[derive(Clone, Debug, PartialEq)]
pub struct JoystickState {
    axes: [f64; MAX_AXES],
    buttons: [bool; MAX_BUTTONS],
}

impl Default for JoystickState {
    fn default() -> Self {
        Self {
            axes: [0.0; MAX_AXES],
            buttons: [false; MAX_BUTTONS],
        }
    }
}

impl JoystickState {
    /// Record an axis value, zeroing it inside the dead zone. Unknown axes are ignored.
    pub fn set_axis(&mut self, axis: usize, value: f64) {
        let Some(slot) = self.axes.get_mut(axis) else {
            return;
        };
        *slot = if value.abs() > AXIS_DEAD_ZONE {
            value
        } else {
            0.0
        };
    }

    /// Record a button state. Unknown buttons are ignored.
    pub fn set_button(&mut self, button: usize, pressed: bool) {
        if let Some(slot) = self.buttons.get_mut(button) {
            *slot = pressed;
        }
    }

    /// Current (dead-zone filtered) axis value.
    pub fn axis(&self, axis: usize) -> f64 {
        self.axes.get(axis).copied().unwrap_or(0.0)
    }

    fn button(&self, button: usize) -> f64 {
        match self.buttons.get(button) {
            Some(true) => 1.0,
            _ => 0.0,
        }
    }

    /// Deltas to add at the top of the next frame.
    ///
    /// Sticks move `R` (left X coarse, right X fine) and `r` (left Y coarse, right Y fine);
    /// holding buttons 4/6 adds a jump in the direction of the right stick; buttons 5/7
    /// shrink/grow the line width.
    pub fn deltas(&self) -> ContinuousDelta {
        let a = |i| self.axis(i) * AXIS_SCALE;
        ContinuousDelta {
            big_r: a(0) * 1.5 + a(2) * 0.1 + self.button(4) * 0.5 * sgn(self.axis(2)),
            small_r: a(1) * 0.1 + a(3) * 0.000_01 + self.button(6) * 0.01 * sgn(self.axis(3)),
            line_width: -self.button(5) * 0.02 + self.button(7) * 0.02,
        }
    }
}

fn sgn(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// A source of per-frame continuous deltas.
pub trait ContinuousInput {
    /// Drain pending device events and return the delta for the coming frame.
    fn poll(&mut self) -> ContinuousDelta;
}

/// Stand-in used when no device is present; always contributes zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoContinuousInput;

impl ContinuousInput for NoContinuousInput {
    fn poll(&mut self) -> ContinuousDelta {
        ContinuousDelta::default()
    }
}

/// A scripted device that replays a fixed state every frame. Useful for headless runs.
#[derive(Clone, Debug, Default)]
pub struct FixedJoystick {
    /// State reported on every poll.
    pub state: JoystickState,
}

impl ContinuousInput for FixedJoystick {
    fn poll(&mut self) -> ContinuousDelta {
        self.state.deltas()
    }
}

/// Open the first connected gamepad, or fall back to [`NoContinuousInput`].
///
/// A missing device is not an error: it is logged and the contribution is zero.
pub fn open_continuous_input(enabled: bool) -> Box<dyn ContinuousInput> {
    if !enabled {
        tracing::debug!("joystick input disabled");
        return Box::new(NoContinuousInput);
    }

    #[cfg(feature = "gamepad")]
    {
        match gamepad::GamepadInput::open() {
            Ok(input) => return Box::new(input),
            Err(err) => tracing::warn!("no joystick available: {err}"),
        }
    }
    #[cfg(not(feature = "gamepad"))]
    tracing::warn!("no joystick available: built without the `gamepad` feature");

    Box::new(NoContinuousInput)
}

#[cfg(feature = "gamepad")]
mod gamepad {
    use gilrs::{Axis, Button, Event, EventType, GamepadId, Gilrs};

    use super::{ContinuousDelta, ContinuousInput, JoystickState};
    use crate::foundation::error::{GuillocheError, GuillocheResult};

    /// gilrs-backed device bound to the first gamepad seen.
    pub(super) struct GamepadInput {
        gilrs: Gilrs,
        active: GamepadId,
        state: JoystickState,
    }

    impl GamepadInput {
        pub(super) fn open() -> GuillocheResult<Self> {
            let gilrs = Gilrs::new()
                .map_err(|e| GuillocheError::validation(format!("gamepad subsystem: {e}")))?;
            let (active, name) = gilrs
                .gamepads()
                .next()
                .map(|(id, pad)| (id, pad.name().to_string()))
                .ok_or_else(|| GuillocheError::validation("no joysticks connected"))?;
            tracing::info!(gamepad = %name, "joystick opened");
            Ok(Self {
                gilrs,
                active,
                state: JoystickState::default(),
            })
        }
    }

    fn axis_index(axis: Axis) -> Option<(usize, f64)> {
        // gilrs reports +Y up; the state keeps +Y down.
        match axis {
            Axis::LeftStickX => Some((0, 1.0)),
            Axis::LeftStickY => Some((1, -1.0)),
            Axis::RightStickX => Some((2, 1.0)),
            Axis::RightStickY => Some((3, -1.0)),
            _ => None,
        }
    }

    fn button_index(button: Button) -> Option<usize> {
        match button {
            Button::LeftTrigger => Some(4),
            Button::RightTrigger => Some(5),
            Button::LeftTrigger2 => Some(6),
            Button::RightTrigger2 => Some(7),
            _ => None,
        }
    }

    impl ContinuousInput for GamepadInput {
        fn poll(&mut self) -> ContinuousDelta {
            while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
                if id != self.active {
                    continue;
                }
                match event {
                    EventType::AxisChanged(axis, value, _) => {
                        if let Some((idx, sign)) = axis_index(axis) {
                            self.state.set_axis(idx, f64::from(value) * sign);
                        }
                    }
                    EventType::ButtonPressed(button, _) => {
                        if let Some(idx) = button_index(button) {
                            tracing::debug!(button = idx, "joystick button pressed");
                            self.state.set_button(idx, true);
                        }
                    }
                    EventType::ButtonReleased(button, _) => {
                        if let Some(idx) = button_index(button) {
                            self.state.set_button(idx, false);
                        }
                    }
                    EventType::Disconnected => {
                        tracing::warn!("joystick disconnected");
                        self.state = JoystickState::default();
                    }
                    _ => {}
                }
            }
            self.state.deltas()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/joystick.rs"]
mod tests;
