use vello_cpu::kurbo::{BezPath, Cap, Circle, Rect, Shape, Stroke};

use crate::animation::state::{AnimationState, DrawMode};
use crate::curve::sampler::{CurveFrame, sample_curve};
use crate::foundation::core::{Canvas, Point, Rgb};
use crate::foundation::error::{GuillocheError, GuillocheResult};
use crate::render::frame::FrameRGBA;

const DOT_TOLERANCE: f64 = 0.1;

/// Offscreen CPU rasterizer powered by `vello_cpu`.
///
/// Each call renders into a fresh pixmap owned by the renderer and copies it out as a
/// [`FrameRGBA`]; the presentation layer blits that copy. Rendering is a pure function of the
/// state and canvas.
#[derive(Debug, Default)]
pub struct CpuRenderer {
    frames: u64,
}

impl CpuRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rasterized so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Sample `state` and rasterize the result.
    pub fn render(&mut self, state: &AnimationState, canvas: Canvas) -> GuillocheResult<FrameRGBA> {
        let curve = sample_curve(state, canvas)?;
        self.render_curve(&curve, state, canvas)
    }

    /// Rasterize an already sampled curve.
    pub fn render_curve(
        &mut self,
        curve: &CurveFrame,
        state: &AnimationState,
        canvas: Canvas,
    ) -> GuillocheResult<FrameRGBA> {
        canvas.validate()?;
        let (w, h) = pixmap_size(canvas)?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint(cpu_color(Rgb::BLACK));
        ctx.fill_rect(&Rect::new(
            0.0,
            0.0,
            f64::from(canvas.width),
            f64::from(canvas.height),
        ));

        if state.line_width > 0.0 {
            ctx.set_stroke(Stroke::new(state.line_width).with_caps(Cap::Round));
            for (prev, cur) in curve.segments() {
                if !is_finite(prev.pos) || !is_finite(cur.pos) {
                    continue;
                }
                ctx.set_paint(cpu_color(cur.color));
                match state.draw_mode {
                    DrawMode::Lines => {
                        let mut seg = BezPath::new();
                        seg.move_to(cpu_point(prev.pos));
                        seg.line_to(cpu_point(cur.pos));
                        ctx.stroke_path(&seg);
                    }
                    DrawMode::Dots => {
                        let dot = Circle::new(cpu_point(cur.pos), state.line_width)
                            .to_path(DOT_TOLERANCE);
                        ctx.stroke_path(&dot);
                    }
                }
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        self.frames += 1;

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

fn pixmap_size(canvas: Canvas) -> GuillocheResult<(u16, u16)> {
    let w = u16::try_from(canvas.width)
        .map_err(|_| GuillocheError::render(format!("width {} too large", canvas.width)))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| GuillocheError::render(format!("height {} too large", canvas.height)))?;
    Ok((w, h))
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn cpu_point(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn cpu_color(c: Rgb) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
