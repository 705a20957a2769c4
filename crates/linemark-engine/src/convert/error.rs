use std::path::PathBuf;

/// Ways a conversion can fail.
///
/// Classification never fails, so every variant is an I/O problem with the
/// source or the sink. Open errors happen before any line is read; read and
/// write errors abort the conversion mid-stream.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Could not open source {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not open target {path}: {source}")]
    SinkOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not read from source: {0}")]
    SourceRead(#[source] std::io::Error),
    #[error("Could not write to target: {0}")]
    SinkWrite(#[source] std::io::Error),
}
