use std::path::Path;

use crate::animation::joystick::ContinuousDelta;
use crate::foundation::error::{GuillocheError, GuillocheResult};

/// Per-frame growth of the variant-A sweep step.
pub const T_STEP_DRIFT: f64 = 0.000_000_01;
/// Per-frame growth of the big radius.
pub const BIG_R_DRIFT: f64 = 0.0001;

/// Big radius change per Up/Down key press.
pub const BIG_R_KEY_DELTA: f64 = 0.1;
/// Small radius change per Left/Right key press.
pub const SMALL_R_KEY_DELTA: f64 = 0.000_01;
/// Line width change per `1`/`2` key press.
pub const LINE_WIDTH_KEY_DELTA: f64 = 0.1;

/// `Q` change per key press.
pub const Q_DELTA: f64 = 1.0;
/// `Q` wraps to the opposite sign beyond this magnitude.
pub const Q_MAX: f64 = 150.0;
/// `m` change per key press.
pub const M_DELTA: f64 = 0.1;
/// `m` wraps to the opposite sign beyond this magnitude.
pub const M_MAX: f64 = 50.0;
/// `n` change per key press.
pub const N_DELTA: f64 = 0.1;
/// `n` wraps to the opposite sign beyond this magnitude.
pub const N_MAX: f64 = 50.0;

/// Big radius at the right edge of the window.
pub const MOUSE_BIG_R_SCALE: f64 = 150.0;
/// Small radius at the bottom edge of the window.
pub const MOUSE_SMALL_R_SCALE: f64 = 0.15;

/// Smallest accepted sweep step; bounds the sample count per frame.
pub const MIN_SWEEP_STEP: f64 = 0.000_01;

/// How samples are stroked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Connect consecutive samples with line segments.
    #[default]
    Lines,
    /// Draw a small ring at every sample.
    Dots,
}

impl DrawMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::Lines => Self::Dots,
            Self::Dots => Self::Lines,
        }
    }
}

/// Which parametric family is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveVariant {
    /// Hypotrochoid with a ring offset term.
    Ring,
    /// Ring hypotrochoid with frequency multipliers plus a third `Q`/`n` circle.
    #[default]
    TriFrequency,
}

impl CurveVariant {
    /// The other variant.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ring => Self::TriFrequency,
            Self::TriFrequency => Self::Ring,
        }
    }

    /// Ring offset `p` as a fraction of the viewport height.
    pub fn ring_fraction(self) -> f64 {
        match self {
            Self::Ring => 0.07,
            Self::TriFrequency => 0.03,
        }
    }
}

/// Every parameter the curve is generated from.
///
/// Field names follow the curve formulas: `big_r` is `R`, `small_r` is `r`, `q` is `Q`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationState {
    /// Fixed circle radius `R`.
    pub big_r: f64,
    /// Rolling circle radius `r`.
    pub small_r: f64,
    /// Ring offset `p` of the last sampled frame (recomputed from the viewport each frame).
    pub p: f64,
    /// Amplitude `Q` of the third circle (variant B).
    pub q: f64,
    /// Frequency multiplier `m` of the rolling pair (variant B).
    pub m: f64,
    /// Frequency `n` of the third circle (variant B).
    pub n: f64,
    /// Sweep step of variant A.
    pub t_step: f64,
    /// Stroke width, also the dot radius.
    pub line_width: f64,
    /// Line or dot stroking.
    pub draw_mode: DrawMode,
    /// Sampled curve family.
    pub variant: CurveVariant,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            big_r: 36.0,
            small_r: 0.08,
            p: 35.0,
            q: 30.0,
            m: 1.0,
            n: 6.0,
            t_step: 0.008,
            line_width: 0.6,
            draw_mode: DrawMode::Lines,
            variant: CurveVariant::TriFrequency,
        }
    }
}

impl AnimationState {
    /// Load a state from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> GuillocheResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            GuillocheError::Other(
                anyhow::Error::new(e).context(format!("read params '{}'", path.display())),
            )
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Parse a state from JSON bytes and validate it.
    pub fn from_json_slice(bytes: &[u8]) -> GuillocheResult<Self> {
        let state: Self =
            serde_json::from_slice(bytes).map_err(|e| GuillocheError::serde(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    /// Pretty JSON, suitable for [`AnimationState::from_path`].
    pub fn to_json_pretty(&self) -> GuillocheResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GuillocheError::serde(e.to_string()))
    }

    /// Reject values the sampler cannot work with.
    pub fn validate(&self) -> GuillocheResult<()> {
        let fields = [
            ("big_r", self.big_r),
            ("small_r", self.small_r),
            ("p", self.p),
            ("q", self.q),
            ("m", self.m),
            ("n", self.n),
            ("t_step", self.t_step),
            ("line_width", self.line_width),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(GuillocheError::validation(format!("{name} must be finite")));
            }
        }
        if self.t_step < MIN_SWEEP_STEP {
            return Err(GuillocheError::validation(format!(
                "t_step must be >= {MIN_SWEEP_STEP}, got {}",
                self.t_step
            )));
        }
        Ok(())
    }

    /// Sweep step actually used by the current variant.
    ///
    /// Variant B always sweeps with a fixed step; its drift never accumulates.
    pub fn sweep_step(&self) -> f64 {
        match self.variant {
            CurveVariant::Ring => self.t_step,
            CurveVariant::TriFrequency => 0.001,
        }
    }

    /// Automatic per-frame drift, applied once after each frame is sampled.
    pub fn drift(&mut self) {
        if self.variant == CurveVariant::Ring {
            self.t_step += T_STEP_DRIFT;
        }
        self.big_r += BIG_R_DRIFT;
    }

    /// Add a continuous-input contribution (joystick).
    pub fn apply_continuous(&mut self, delta: ContinuousDelta) {
        self.big_r += delta.big_r;
        self.small_r += delta.small_r;
        self.line_width = (self.line_width + delta.line_width).max(0.0);
    }

    /// Set both radii from an absolute cursor position inside a `width`x`height` window.
    pub fn set_from_cursor(&mut self, x: f64, y: f64, width: u32, height: u32) {
        self.big_r = x / f64::from(width.max(1)) * MOUSE_BIG_R_SCALE;
        self.small_r = y / f64::from(height.max(1)) * MOUSE_SMALL_R_SCALE;
    }

    /// Step `Q` by `sign * Q_DELTA`, wrapping at `±Q_MAX`.
    pub fn step_q(&mut self, sign: f64) {
        self.q = wrap_step(self.q, sign * Q_DELTA, Q_MAX);
    }

    /// Step `m` by `sign * M_DELTA`, wrapping at `±M_MAX`.
    pub fn step_m(&mut self, sign: f64) {
        self.m = wrap_step(self.m, sign * M_DELTA, M_MAX);
    }

    /// Step `n` by `sign * N_DELTA`, wrapping at `±N_MAX`.
    pub fn step_n(&mut self, sign: f64) {
        self.n = wrap_step(self.n, sign * N_DELTA, N_MAX);
    }

    /// Step the line width, never going below zero.
    pub fn step_line_width(&mut self, sign: f64) {
        self.line_width = (self.line_width + sign * LINE_WIDTH_KEY_DELTA).max(0.0);
    }
}

/// Add `delta` to `value`; past `max` the result jumps to `-max`, below `-max` to `max`.
pub fn wrap_step(value: f64, delta: f64, max: f64) -> f64 {
    let v = value + delta;
    if v > max {
        -max
    } else if v < -max {
        max
    } else {
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
