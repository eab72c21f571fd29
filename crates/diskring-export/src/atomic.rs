//! Output files that only appear once they are complete.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use diskring_core::RenderError;
use tempfile::NamedTempFile;

/// A buffered writer backed by a temporary file next to the destination.
///
/// The destination is replaced in one rename on [`commit`](Self::commit).
/// Dropping an uncommitted file removes the temporary copy.
pub(crate) struct AtomicFile {
    path: PathBuf,
    writer: Option<BufWriter<NamedTempFile>>,
}

impl AtomicFile {
    /// Open a temporary file in the destination's directory.
    pub fn create(path: &Path) -> Result<Self, RenderError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).map_err(|e| RenderError::io(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(temp)),
        })
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write formatted output.
    pub fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), RenderError> {
        let writer = self.writer.as_mut().ok_or(RenderError::Finalized)?;
        writer
            .write_fmt(args)
            .map_err(|e| RenderError::io(&self.path, e))
    }

    /// Flush everything and move the file into place.
    pub fn commit(&mut self) -> Result<(), RenderError> {
        let writer = self.writer.take().ok_or(RenderError::Finalized)?;
        let temp = writer
            .into_inner()
            .map_err(|e| RenderError::io(&self.path, e.into_error()))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| RenderError::io(&self.path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o644))
                .map_err(|e| RenderError::io(&self.path, e))?;
        }

        temp.persist(&self.path).map_err(|e| RenderError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;

        tracing::debug!(path = %self.path.display(), "output written");
        Ok(())
    }
}
