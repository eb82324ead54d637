use std::path::PathBuf;

use crate::encode::png::{ensure_dir, sequence_file_name};
use crate::foundation::error::{GuillocheError, GuillocheResult};

/// Writes explicitly requested SVG snapshots to `<dir>/%010d.svg`, counting from 0.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    dir: PathBuf,
    next: u64,
}

impl SvgExporter {
    /// Create an exporter writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next: 0,
        }
    }

    /// Number of documents written so far.
    pub fn written(&self) -> u64 {
        self.next
    }

    /// Write `document` to the next sequence file and return its path.
    pub fn export(&mut self, document: &str) -> GuillocheResult<PathBuf> {
        ensure_dir(&self.dir)?;
        let path = self.dir.join(sequence_file_name(self.next, "svg"));
        tracing::info!(path = %path.display(), "saving svg");
        std::fs::write(&path, document).map_err(|e| {
            GuillocheError::Other(
                anyhow::Error::new(e).context(format!("write svg '{}'", path.display())),
            )
        })?;
        self.next += 1;
        Ok(path)
    }
}
