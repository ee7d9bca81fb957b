//! Error types for stringtrace

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// A file could not be opened or fully read. No retry is attempted;
    /// file loading is all-or-nothing.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The given span does not belong to any buffer owned by this tracker,
    /// for example a span whose buffer was taken out, or a span issued by
    /// a different tracker.
    #[error("span is not tracked by this tracker")]
    Untracked,

    /// The span is tracked, but starts or ends inside a multi-byte
    /// character, so its bytes cannot be appended as string text.
    #[error("span does not start and end on character boundaries")]
    Misaligned,
}

pub type Result<T> = std::result::Result<T, TrackerError>;
