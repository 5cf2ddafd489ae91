//! qalog CLI - publish a reformatted Q&A log to a Notion page.
//!
//! Reads a log file (question on the first line, answer below), asks an
//! external AI tool to restructure it as markdown, and appends the result to
//! the page named by `NOTION_PAGE_ID`.

mod commands;
mod error;
mod output;
mod pipeline;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::PublishArgs;
use output::Output;

/// qalog - publish Q&A logs to Notion.
#[derive(Parser)]
#[command(name = "qalog", version, about)]
struct Cli {
    #[command(flatten)]
    publish: PublishArgs,

    /// Enable INFO logging (otherwise RUST_LOG is used).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.publish.execute() {
        output.error(&err);
        std::process::exit(1);
    }
}
