//! Interactive front-end.
//!
//! The fullscreen policy is plain logic and always compiled. The winit event loop and the
//! wgpu blit need the `window` feature.

pub mod fullscreen;

#[cfg(feature = "window")]
pub mod app;
#[cfg(feature = "window")]
mod present;
