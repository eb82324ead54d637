//! Animation parameters and the input that drives them.

/// Discrete keyboard actions.
pub mod input;
/// Continuous input devices (joystick).
pub mod joystick;
/// The parameter set, its drift and wrap rules.
pub mod state;
