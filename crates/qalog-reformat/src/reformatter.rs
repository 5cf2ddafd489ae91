//! Text reformatting capability and its subprocess implementation.

use std::io::Write;
use std::process::{Command, Stdio};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ReformatError;

/// Rewrites a prompt into structured markdown.
pub trait Reformatter {
    /// Reformat `prompt`, returning the tool's markdown output.
    ///
    /// # Errors
    ///
    /// Returns [`ReformatError`] if the tool fails or reports an error.
    fn reformat(&self, prompt: &str) -> Result<String, ReformatError>;
}

/// Reformatter backed by an external command-line chat tool.
///
/// The prompt is base64-encoded and written to the stdin of
/// `sh -c "base64 -d | <command>"`, so quotes, backticks and newlines in the
/// prompt never reach the shell parser. Anything written to stderr is treated
/// as a failure.
#[derive(Debug, Clone)]
pub struct CommandReformatter {
    command: String,
}

impl CommandReformatter {
    /// Create a reformatter running `command` through `sh`.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Shell script that decodes stdin and pipes it into the tool.
    fn script(&self) -> String {
        format!("base64 -d | {}", self.command)
    }
}

impl Reformatter for CommandReformatter {
    fn reformat(&self, prompt: &str) -> Result<String, ReformatError> {
        let payload = STANDARD.encode(prompt);

        tracing::info!(command = %self.command, prompt_len = prompt.len(), "Running reformatter");

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(self.script())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Written from a separate thread so a chatty tool can't fill stdout
        // while we are still blocked on stdin. Dropping the handle closes the
        // pipe and the decoder sees EOF.
        let stdin = child.stdin.take();
        let writer = std::thread::spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(payload.as_bytes()),
            None => Ok(()),
        });

        let output = child.wait_with_output()?;

        // Any byte on stderr counts, even a lone newline.
        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            return Err(ReformatError::ExternalTool { stderr });
        }
        if !output.status.success() {
            return Err(ReformatError::ExitStatus(output.status));
        }

        // A tool that exits cleanly without consuming the whole prompt
        // closes the pipe early; its output still stands.
        match writer
            .join()
            .map_err(|_| std::io::Error::other("stdin writer panicked"))?
        {
            Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {
                tracing::debug!("Reformatter closed stdin before reading the whole prompt");
            }
            result => result?,
        }

        let markdown = String::from_utf8(output.stdout)?;
        tracing::debug!(output_len = markdown.len(), "Reformatter finished");
        Ok(markdown)
    }
}
