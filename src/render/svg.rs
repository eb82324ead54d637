use std::fmt::Write as _;

use crate::animation::state::DrawMode;
use crate::curve::sampler::CurveFrame;
use crate::foundation::core::{BezPath, Canvas, Point};

/// Serialize the strokes of `curve` as a standalone SVG document.
///
/// The document mirrors [`crate::CpuRenderer`]: a black background, then one element per
/// sample after the first, colored like the raster output. Non-finite samples are skipped.
pub fn svg_document(curve: &CurveFrame, canvas: Canvas, line_width: f64, mode: DrawMode) -> String {
    let mut out = String::with_capacity(64 + curve.points.len() * 96);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );
    let _ = writeln!(
        out,
        r##"<rect width="{}" height="{}" fill="#000000"/>"##,
        canvas.width, canvas.height,
    );

    if line_width > 0.0 {
        for (prev, cur) in curve.segments() {
            if !finite(prev.pos) || !finite(cur.pos) {
                continue;
            }
            let color = cur.color.to_hex();
            match mode {
                DrawMode::Lines => {
                    let mut seg = BezPath::new();
                    seg.move_to(prev.pos);
                    seg.line_to(cur.pos);
                    let _ = writeln!(
                        out,
                        r#"<path d="{}" fill="none" stroke="{color}" stroke-width="{line_width}" stroke-linecap="round"/>"#,
                        seg.to_svg(),
                    );
                }
                DrawMode::Dots => {
                    let _ = writeln!(
                        out,
                        r#"<circle cx="{}" cy="{}" r="{line_width}" fill="none" stroke="{color}" stroke-width="{line_width}"/>"#,
                        cur.pos.x, cur.pos.y,
                    );
                }
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
