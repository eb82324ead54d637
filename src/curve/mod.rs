//! Curve evaluation: the sweep sampler and its color wheel.

/// Hue-wheel color mapper.
pub mod color;
/// Parametric sweep of the two curve families.
pub mod sampler;
