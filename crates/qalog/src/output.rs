//! Run reporting on the terminal.
//!
//! Everything goes to stderr. Line layout lives in plain functions so it can
//! be checked without a terminal; [`Output`] only adds color.

use std::fmt::Display;

use console::{Style, Term};
use qalog_config::{ENV_API_KEY, ENV_PAGE_ID};
use qalog_notion::{Block, NotionClient};
use qalog_reformat::LogEntry;

use crate::pipeline::{Converted, RunReport};

/// Width of the rule framing the reformatted markdown.
const RULE_WIDTH: usize = 70;

/// Reports the progress and outcome of one run.
pub(crate) struct Output {
    term: Term,
    tag: Style,
    done: Style,
    warn: Style,
    fail: Style,
    banner: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            tag: Style::new().cyan(),
            done: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
            banner: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    fn line(&self, msg: impl Display) {
        let _ = self.term.write_line(&msg.to_string());
    }

    /// Announce the entry being published.
    pub(crate) fn question(&self, entry: &LogEntry) {
        self.line(format_args!("Question: {}", entry.question));
    }

    /// Announce the reformatter invocation.
    pub(crate) fn reformatting(&self, command: &str) {
        self.line(self.dim.apply_to(format!("Reformatting with `{command}`...")));
    }

    /// Explain where the destination and credential come from.
    pub(crate) fn notion_config_hint(&self) {
        self.line(format_args!(
            "\nSet {ENV_API_KEY} and {ENV_PAGE_ID}, or add a [notion] section to qalog.toml."
        ));
    }

    /// One block, with its Notion type as a colored tag.
    pub(crate) fn block(&self, block: &Block) {
        let tag = self.tag.apply_to(format!("[{}]", block.type_name()));
        match block.text() {
            Some(text) => self.line(format_args!("  {tag} {text}")),
            None => self.line(format_args!("  {tag}")),
        }
    }

    /// The append calls a publish would make.
    pub(crate) fn batch_plan(&self, batches: &[&[Block]]) {
        self.line(format_args!("\n{}", batch_plan_line(batches)));
    }

    /// Everything a dry run found, without touching the page.
    pub(crate) fn dry_run(&self, converted: &Converted, batches: &[&[Block]]) {
        self.line(self.banner.apply_to("\n[DRY RUN] Nothing published."));

        let rule = "=".repeat(RULE_WIDTH);
        self.line(&rule);
        self.line(converted.markdown.trim_end());
        self.line(&rule);

        if converted.blocks.is_empty() {
            self.line(self.warn.apply_to(
                "Reformatter output contains no blocks; only the divider would be appended.",
            ));
        } else {
            self.line(format_args!("Blocks ({}):", converted.blocks.len()));
            for block in &converted.blocks {
                self.block(block);
            }
        }

        self.batch_plan(batches);
    }

    /// Outcome of a successful publish.
    pub(crate) fn published(&self, report: &RunReport) {
        let page_id = &report.publish.page_id;
        self.line(self.done.apply_to("\nPublished successfully!"));
        self.line(format_args!("Page: {page_id}"));
        self.line(format_args!("URL: {}", NotionClient::page_url(page_id)));
        self.line(published_summary(report));

        if report.converted.blocks.is_empty() {
            self.line(self.warn.apply_to("\nWarning: reformatter output contained no blocks."));
        }
    }

    /// Fatal error ending the run.
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(self.fail.apply_to(format!("Error: {err}")));
    }
}

/// `Append calls: 2 content batch(es) [100, 20] + 1 divider`
fn batch_plan_line(batches: &[&[Block]]) -> String {
    let sizes: Vec<String> = batches.iter().map(|batch| batch.len().to_string()).collect();
    format!(
        "Append calls: {} content batch(es) [{}] + 1 divider",
        batches.len(),
        sizes.join(", ")
    )
}

fn published_summary(report: &RunReport) -> String {
    format!(
        "Blocks appended: {} ({} content + divider) in {} batch(es)",
        report.publish.blocks_appended,
        report.converted.blocks.len(),
        report.publish.batches
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qalog_notion::{PublishResult, plan_batches};

    fn paragraphs(count: usize) -> Vec<Block> {
        (0..count).map(|i| Block::Paragraph(i.to_string())).collect()
    }

    #[test]
    fn test_batch_plan_line_lists_sizes() {
        let blocks = paragraphs(120);
        let batches = plan_batches(&blocks, 100);

        assert_eq!(
            batch_plan_line(&batches),
            "Append calls: 2 content batch(es) [100, 20] + 1 divider"
        );
    }

    #[test]
    fn test_batch_plan_line_empty() {
        assert_eq!(
            batch_plan_line(&[]),
            "Append calls: 0 content batch(es) [] + 1 divider"
        );
    }

    #[test]
    fn test_published_summary_counts_divider() {
        let report = RunReport {
            converted: Converted {
                markdown: "### A\n- B".to_owned(),
                blocks: vec![
                    Block::Heading("A".to_owned()),
                    Block::BulletedItem("B".to_owned()),
                ],
            },
            publish: PublishResult {
                page_id: "page-1".to_owned(),
                batches: 1,
                blocks_appended: 3,
            },
        };

        assert_eq!(
            published_summary(&report),
            "Blocks appended: 3 (2 content + divider) in 1 batch(es)"
        );
    }
}
