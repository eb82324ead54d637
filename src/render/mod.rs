//! Rasterization and vector output of sampled curves.

/// `vello_cpu` offscreen renderer.
pub mod cpu;
/// Rendered frame type.
pub mod frame;
/// SVG document writer.
pub mod svg;
