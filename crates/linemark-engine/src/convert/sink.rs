use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::ConvertError;

/// A target file written through a temporary file in the same directory.
///
/// The target only appears once [`FileSink::commit`] succeeds. Dropping an
/// uncommitted sink deletes the temporary file, so a failed conversion leaves
/// nothing behind.
pub struct FileSink {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl FileSink {
    /// Opens a sink for `target`, creating parent directories if needed.
    pub fn create(target: &Path) -> Result<Self, ConvertError> {
        let open_error = |source| ConvertError::SinkOpen {
            path: target.to_path_buf(),
            source,
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(open_error)?;
        let temp = NamedTempFile::new_in(dir).map_err(open_error)?;

        Ok(Self {
            target: target.to_path_buf(),
            writer: BufWriter::new(temp),
        })
    }

    pub fn writer(&mut self) -> &mut impl Write {
        &mut self.writer
    }

    /// Flushes the temporary file and moves it over the target.
    pub fn commit(self) -> Result<(), ConvertError> {
        let Self { target, writer } = self;

        let temp = writer
            .into_inner()
            .map_err(|e| ConvertError::SinkWrite(e.into_error()))?;
        temp.persist(&target)
            .map_err(|e| ConvertError::SinkOpen {
                path: target,
                source: e.error,
            })?;
        Ok(())
    }
}
