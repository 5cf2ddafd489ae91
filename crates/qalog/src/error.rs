//! CLI error types.

use qalog_config::ConfigError;
use qalog_notion::PublishError;
use qalog_reformat::{LogError, ReformatError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Log(#[from] LogError),

    #[error("{0}")]
    Reformat(#[from] ReformatError),

    #[error("{0}")]
    Publish(#[from] PublishError),
}
