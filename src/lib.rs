#![forbid(unsafe_code)]

pub mod animation;
pub mod curve;
pub mod encode;
mod foundation;
pub mod render;
pub mod session;
pub mod window;

pub use animation::input::{Key, KeyOutcome, apply_key};
pub use animation::joystick::{
    ContinuousDelta, ContinuousInput, FixedJoystick, JoystickState, NoContinuousInput,
    open_continuous_input,
};
pub use animation::state::{AnimationState, CurveVariant, DrawMode};
pub use curve::color::rainbow;
pub use curve::sampler::{CurveFrame, SampledPoint, sample_curve};
pub use encode::png::PngSequenceSink;
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use encode::svg::SvgExporter;
pub use foundation::core::{Canvas, FrameIndex, Point, Rgb, Vec2};
pub use foundation::error::{GuillocheError, GuillocheResult};
pub use render::cpu::CpuRenderer;
pub use render::frame::FrameRGBA;
pub use render::svg::svg_document;
pub use session::{Session, SessionOpts, run_headless};
pub use window::fullscreen::{DisplayMode, toggle_fullscreen};
#[cfg(feature = "window")]
pub use window::app::{WindowOpts, run};
