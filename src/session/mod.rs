//! The interaction loop without any windowing: state, canvas, renderer and outputs.
//!
//! A [`Session`] is driven one frame at a time by a front-end (the winit window, or
//! [`run_headless`]). It owns every piece of mutable state, so the loop needs no globals
//! and no locking.

use std::path::PathBuf;

use crate::animation::input::{Key, KeyOutcome, apply_key};
use crate::animation::joystick::{ContinuousDelta, ContinuousInput};
use crate::animation::state::AnimationState;
use crate::curve::sampler::sample_curve;
use crate::encode::png::PngSequenceSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::svg::SvgExporter;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{GuillocheError, GuillocheResult};
use crate::render::cpu::CpuRenderer;
use crate::render::frame::FrameRGBA;
use crate::render::svg::svg_document;

/// Options for [`Session::new`].
#[derive(Debug, Clone)]
pub struct SessionOpts {
    /// Initial viewport.
    pub canvas: Canvas,
    /// Initial parameters.
    pub state: AnimationState,
    /// Write every frame as PNG.
    pub screenshot: bool,
    /// Directory for PNG and SVG output.
    pub out_dir: PathBuf,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            state: AnimationState::default(),
            screenshot: false,
            out_dir: PathBuf::from("."),
        }
    }
}

/// One running animation.
pub struct Session {
    state: AnimationState,
    canvas: Canvas,
    renderer: CpuRenderer,
    png: Option<PngSequenceSink>,
    svg: SvgExporter,
    frame: FrameIndex,
    last: Option<FrameRGBA>,
}

impl Session {
    /// Validate options and open the outputs.
    pub fn new(opts: SessionOpts) -> GuillocheResult<Self> {
        opts.canvas.validate()?;
        opts.state.validate()?;

        let png = if opts.screenshot {
            let mut sink = PngSequenceSink::new(&opts.out_dir);
            sink.begin(SinkConfig {
                width: opts.canvas.width,
                height: opts.canvas.height,
            })?;
            Some(sink)
        } else {
            None
        };

        Ok(Self {
            state: opts.state,
            canvas: opts.canvas,
            renderer: CpuRenderer::new(),
            png,
            svg: SvgExporter::new(opts.out_dir),
            frame: FrameIndex(0),
            last: None,
        })
    }

    /// Current parameters.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Current viewport.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Index of the next frame to be rendered.
    pub fn frame_index(&self) -> FrameIndex {
        self.frame
    }

    /// Most recently rendered frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last.as_ref()
    }

    /// Render one frame.
    ///
    /// Order: add the continuous delta, sample and rasterize, drift the parameters, persist
    /// the frame when screenshots are on.
    #[tracing::instrument(level = "trace", skip(self, delta), fields(frame = self.frame.0))]
    pub fn tick(&mut self, delta: ContinuousDelta) -> GuillocheResult<&FrameRGBA> {
        self.state.apply_continuous(delta);

        let curve = sample_curve(&self.state, self.canvas)?;
        self.state.p = curve.ring;
        let frame = self
            .renderer
            .render_curve(&curve, &self.state, self.canvas)?;
        self.state.drift();

        if let Some(png) = self.png.as_mut() {
            png.push_frame(self.frame, &frame)?;
        }
        self.frame = self.frame.next();

        Ok(&*self.last.insert(frame))
    }

    /// Apply a key press. `F2` is handled here (SVG export); other outcomes are returned to
    /// the front-end.
    pub fn handle_key(&mut self, key: Key) -> GuillocheResult<KeyOutcome> {
        let outcome = apply_key(&mut self.state, key);
        tracing::debug!(?key, ?outcome, "key");
        if outcome == KeyOutcome::ExportSvg {
            self.export_svg()?;
        }
        Ok(outcome)
    }

    /// Mouse motion: set both radii from the absolute cursor position.
    pub fn handle_cursor(&mut self, x: f64, y: f64) {
        self.state
            .set_from_cursor(x, y, self.canvas.width, self.canvas.height);
    }

    /// Regenerate the drawing surface at a new size.
    pub fn resize(&mut self, width: u32, height: u32) -> GuillocheResult<()> {
        let canvas = Canvas::new(width, height).map_err(|e| {
            GuillocheError::display(format!("could not get a surface after resize: {e}"))
        })?;
        tracing::info!(width, height, "resized");
        self.canvas = canvas;
        Ok(())
    }

    /// Write the current parameters (without drift) as the next SVG snapshot.
    pub fn export_svg(&mut self) -> GuillocheResult<PathBuf> {
        let curve = sample_curve(&self.state, self.canvas)?;
        let doc = svg_document(
            &curve,
            self.canvas,
            self.state.line_width,
            self.state.draw_mode,
        );
        self.svg.export(&doc)
    }

    /// Close the outputs.
    pub fn finish(&mut self) -> GuillocheResult<()> {
        if let Some(png) = self.png.as_mut() {
            png.end()?;
        }
        Ok(())
    }
}

/// Run `frames` iterations without a window, then finish the session.
pub fn run_headless(
    session: &mut Session,
    input: &mut dyn ContinuousInput,
    frames: u64,
) -> GuillocheResult<()> {
    tracing::info!(frames, "running headless");
    for _ in 0..frames {
        let delta = input.poll();
        session.tick(delta)?;
    }
    session.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/session/mod.rs"]
mod tests;
