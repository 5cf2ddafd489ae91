//! Question/answer log reading.

use std::path::Path;

use crate::error::LogError;

/// A single question and its raw answer, as read from a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// First line of the log, untrimmed.
    pub question: String,
    /// Remaining lines joined with `\n`.
    pub answer: String,
}

impl LogEntry {
    /// Read and parse a log file.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the file cannot be read and
    /// [`LogError::Format`] if it has fewer than two lines.
    pub fn read(path: &Path) -> Result<Self, LogError> {
        let content = std::fs::read_to_string(path).map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entry = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            answer_len = entry.answer.len(),
            "Read log entry"
        );
        Ok(entry)
    }

    /// Split log content into question (line 1) and answer (lines 2..N).
    ///
    /// Lines are separated by `\n` only; blank lines inside the answer are kept.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Format`] if the content has fewer than two lines.
    pub fn parse(content: &str) -> Result<Self, LogError> {
        let lines: Vec<&str> = content.split('\n').collect();
        let Some((question, rest)) = lines.split_first().filter(|(_, rest)| !rest.is_empty())
        else {
            return Err(LogError::Format { lines: lines.len() });
        };

        Ok(Self {
            question: (*question).to_owned(),
            answer: rest.join("\n"),
        })
    }
}
