use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{GuillocheError, GuillocheResult};
use crate::render::frame::FrameRGBA;

/// File name of the `n`-th sequence entry: ten zero-padded digits plus `ext`.
pub fn sequence_file_name(n: u64, ext: &str) -> String {
    format!("{n:010}.{ext}")
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> GuillocheResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        GuillocheError::Other(
            anyhow::Error::new(e).context(format!("create output dir '{}'", dir.display())),
        )
    })
}

/// Sink writing every pushed frame to `<dir>/%010d.png`, counting from 0.
#[derive(Debug, Clone)]
pub struct PngSequenceSink {
    dir: PathBuf,
    next: u64,
    last_idx: Option<FrameIndex>,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next: 0,
            last_idx: None,
        }
    }

    /// Number of files written so far.
    pub fn written(&self) -> u64 {
        self.next
    }

    /// Path the next frame will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(sequence_file_name(self.next, "png"))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> GuillocheResult<()> {
        ensure_dir(&self.dir)?;
        tracing::info!(
            dir = %self.dir.display(),
            width = cfg.width,
            height = cfg.height,
            "writing png frame sequence"
        );
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> GuillocheResult<()> {
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(GuillocheError::validation(format!(
                "png sink received frame {} after {}",
                idx.0, last.0
            )));
        }

        let path = self.next_path();
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            GuillocheError::Other(
                anyhow::Error::new(e).context(format!("write png '{}'", path.display())),
            )
        })?;
        tracing::trace!(path = %path.display(), "frame saved");

        self.next += 1;
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> GuillocheResult<()> {
        tracing::info!(frames = self.next, "png frame sequence finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
