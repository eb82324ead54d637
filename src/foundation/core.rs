use crate::foundation::error::{GuillocheError, GuillocheResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Absolute 0-based frame counter of a session.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Return the following frame index.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Output viewport size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Canvas {
    /// Create a validated canvas. Both sides must fit the raster backend (`1..=u16::MAX`).
    pub fn new(width: u32, height: u32) -> GuillocheResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that the canvas can back an offscreen pixmap.
    pub fn validate(self) -> GuillocheResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GuillocheError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let max = u32::from(u16::MAX);
        if self.width > max || self.height > max {
            return Err(GuillocheError::validation(format!(
                "canvas {}x{} exceeds the {max}px raster limit",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Viewport center, using integer halves of the size.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }
}

/// Straight RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a color from channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Quantize to opaque RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        [to_u8(self.r), to_u8(self.g), to_u8(self.b), 255]
    }

    /// `#rrggbb` notation, as used by SVG paint attributes.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
