//! Log-to-page pipeline.
//!
//! Stages run strictly one after another: prompt, reformat, convert, publish.
//! A failing stage ends the run and nothing after it is attempted.

use qalog_notion::{Block, BlockAppender, PagePublisher, PublishResult, markdown_to_blocks};
use qalog_reformat::{LogEntry, Reformatter, build_prompt};

use crate::error::CliError;

/// Reformatted markdown and the blocks converted from it.
#[derive(Debug)]
pub(crate) struct Converted {
    pub(crate) markdown: String,
    pub(crate) blocks: Vec<Block>,
}

/// Outcome of a full run.
#[derive(Debug)]
pub(crate) struct RunReport {
    pub(crate) converted: Converted,
    pub(crate) publish: PublishResult,
}

/// Build the prompt for `entry`, reformat it and convert the markdown.
pub(crate) fn convert<R: Reformatter + ?Sized>(
    entry: &LogEntry,
    reformatter: &R,
) -> Result<Converted, CliError> {
    let prompt = build_prompt(entry);
    let markdown = reformatter.reformat(&prompt)?;

    let blocks = markdown_to_blocks(&markdown);
    tracing::info!(blocks = blocks.len(), "Converted markdown");

    Ok(Converted { markdown, blocks })
}

/// Run every stage and publish the blocks, titled by the entry's question.
pub(crate) fn run<R: Reformatter + ?Sized, A: BlockAppender + ?Sized>(
    entry: &LogEntry,
    reformatter: &R,
    publisher: &PagePublisher<'_, A>,
) -> Result<RunReport, CliError> {
    let converted = convert(entry, reformatter)?;
    let publish = publisher.publish(&entry.question, &converted.blocks)?;
    Ok(RunReport { converted, publish })
}
