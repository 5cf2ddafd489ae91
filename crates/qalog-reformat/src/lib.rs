//! Everything upstream of the markdown for qalog.
//!
//! This crate provides:
//! - [`LogEntry`] for reading a question/answer log file
//! - [`build_prompt`] for turning an entry into the reformatting prompt
//! - [`Reformatter`] trait for the text reformatting capability, with
//!   [`CommandReformatter`] running an external CLI tool
//! - [`StubReformatter`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use qalog_reformat::{CommandReformatter, LogEntry, Reformatter, build_prompt};
//!
//! let entry = LogEntry::read(Path::new("session.log"))?;
//! let reformatter = CommandReformatter::new("gemini");
//! let markdown = reformatter.reformat(&build_prompt(&entry))?;
//! # Ok(())
//! # }
//! ```

mod error;
mod log;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod prompt;
mod reformatter;

pub use error::{LogError, ReformatError};
pub use log::LogEntry;
#[cfg(any(test, feature = "mock"))]
pub use mock::StubReformatter;
pub use prompt::{HEADING_MARKER, LIST_MARKER, SECTION_HEADINGS, build_prompt, build_prompt_parts};
pub use reformatter::{CommandReformatter, Reformatter};
