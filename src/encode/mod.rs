//! Frame persistence.
//!
//! Sinks consume rendered frames in loop order; the SVG exporter writes on request only.

/// PNG frame sequences.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
/// SVG snapshot files.
pub mod svg;
