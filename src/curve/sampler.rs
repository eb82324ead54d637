use std::f64::consts::TAU;

use crate::animation::state::{AnimationState, CurveVariant, MIN_SWEEP_STEP};
use crate::curve::color::rainbow;
use crate::foundation::core::{Canvas, Point, Rgb, Vec2};
use crate::foundation::error::{GuillocheError, GuillocheResult};

/// Curve units to pixels.
pub const ZOOM: f64 = 4.0;

/// One sweep sample in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampledPoint {
    /// Position in pixels.
    pub pos: Point,
    /// Stroke color for the segment ending here.
    pub color: Rgb,
}

/// The ordered samples of one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveFrame {
    /// Samples in sweep order. The first only seeds the first segment.
    pub points: Vec<SampledPoint>,
    /// Color-wheel bound, `trunc(2π / step)`.
    pub total_steps: usize,
    /// Ring offset `p` used for this frame.
    pub ring: f64,
}

impl CurveFrame {
    /// Consecutive `(previous, current)` pairs; `current` carries the stroke color.
    pub fn segments(&self) -> impl Iterator<Item = (&SampledPoint, &SampledPoint)> {
        self.points.iter().zip(self.points.iter().skip(1))
    }
}

/// Evaluate the active curve variant of `state` over one full turn.
///
/// `t` starts at `0` and is advanced *before* each evaluation, so the first sample is at
/// `t = step` and the last is the first `t >= 2π`.
pub fn sample_curve(state: &AnimationState, canvas: Canvas) -> GuillocheResult<CurveFrame> {
    let step = state.sweep_step();
    if !step.is_finite() || step < MIN_SWEEP_STEP {
        return Err(GuillocheError::validation(format!(
            "sweep step must be >= {MIN_SWEEP_STEP}, got {step}"
        )));
    }

    let ring = f64::from(canvas.height) * state.variant.ring_fraction();
    let center = canvas.center().to_vec2();
    let total_steps = (TAU / step) as usize;

    let mut points = Vec::with_capacity(total_steps + 2);
    let mut t = 0.0;
    while t < TAU {
        t += step;
        let v = match state.variant {
            CurveVariant::Ring => ring_hypotrochoid(state, ring, t),
            CurveVariant::TriFrequency => tri_frequency(state, ring, t),
        };
        points.push(SampledPoint {
            pos: (v * ZOOM + center).to_point(),
            color: rainbow(points.len(), total_steps),
        });
    }

    Ok(CurveFrame {
        points,
        total_steps,
        ring,
    })
}

fn ring_hypotrochoid(s: &AnimationState, p: f64, t: f64) -> Vec2 {
    let sum = s.big_r + s.small_r;
    let k = sum / s.small_r * t;
    let ring = s.small_r + p;
    Vec2::new(
        sum * t.cos() + ring * k.cos(),
        sum * t.sin() + ring * k.sin(),
    )
}

fn tri_frequency(s: &AnimationState, p: f64, t: f64) -> Vec2 {
    let sum = s.big_r + s.small_r;
    let mt = s.m * t;
    let k = mt * sum / s.small_r;
    let nt = s.n * t;
    let ring = s.small_r + p;
    Vec2::new(
        sum * mt.cos() + ring * k.cos() + s.q * nt.cos(),
        sum * mt.sin() + ring * k.sin() + s.q * nt.sin(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sampler.rs"]
mod tests;
