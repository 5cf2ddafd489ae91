//! `qalog <LOG_FILE>` command implementation.

use std::path::PathBuf;

use clap::Args;
use qalog_config::{Config, EnvOverrides};
use qalog_notion::{NotionClient, PagePublisher, PublishConfig, plan_batches};
use qalog_reformat::{CommandReformatter, LogEntry};

use crate::error::CliError;
use crate::output::Output;
use crate::pipeline;

/// Arguments for publishing a log.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to the log file (question on the first line, answer below).
    log_file: PathBuf,

    /// Reformat and convert, but print the blocks instead of publishing.
    #[arg(long)]
    dry_run: bool,

    /// Path to configuration file (default: auto-discover qalog.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if any stage fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), Some(&EnvOverrides::from_env()))?;

        // Destination and credential must be known before the tool runs.
        let notion = if self.dry_run {
            None
        } else {
            Some(
                config
                    .require_notion()
                    .inspect_err(|_| output.notion_config_hint())?,
            )
        };

        let entry = LogEntry::read(&self.log_file)?;
        output.question(&entry);

        let reformatter = CommandReformatter::new(config.reformatter.command.as_str());
        output.reformatting(&config.reformatter.command);

        match notion {
            Some(notion) => {
                let client = NotionClient::from_config(notion);
                let publisher = PagePublisher::new(&client, PublishConfig::from(notion));
                let report = pipeline::run(&entry, &reformatter, &publisher)?;
                output.published(&report);
            }
            None => {
                let converted = pipeline::convert(&entry, &reformatter)?;
                let batches = plan_batches(&converted.blocks, config.notion.batch_size);
                output.dry_run(&converted, &batches);
            }
        }

        Ok(())
    }
}
