//! Error types for log reading and reformatting.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Error reading a question/answer log.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The log cannot be split into a question and an answer.
    #[error("log must contain a question line followed by an answer (found {lines} line(s))")]
    Format {
        /// Number of lines found.
        lines: usize,
    },

    /// The log file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Error from the external reformatting tool.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReformatError {
    /// The tool wrote to its error stream.
    #[error("reformatter reported an error: {stderr}")]
    ExternalTool {
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The tool exited unsuccessfully without writing to its error stream.
    #[error("reformatter exited with {0}")]
    ExitStatus(ExitStatus),

    /// The shell could not be spawned or its pipes failed.
    #[error("failed to run reformatter: {0}")]
    Spawn(#[from] std::io::Error),

    /// The tool produced output that is not valid UTF-8.
    #[error("reformatter output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
