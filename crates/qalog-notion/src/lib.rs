//! Notion publishing for qalog.
//!
//! Converts line-oriented markdown into Notion blocks and appends them to a
//! page through the Notion REST API.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Block`] with the four supported block types and their wire format
//! - [`markdown_to_blocks`] single-pass markdown converter
//! - [`BlockAppender`] trait for the append-children operation
//! - [`NotionClient`] implementation over HTTP
//! - [`PagePublisher`] for ordered, batched appends with a trailing divider
//! - [`MockAppender`] for testing (behind `mock` feature flag)

mod client;
mod convert;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod publisher;
mod types;

pub use client::NotionClient;
pub use convert::{line_to_block, markdown_to_blocks};
pub use error::{NotionError, PublishError};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockAppender;
pub use publisher::{BlockAppender, PagePublisher, PublishConfig, PublishResult, plan_batches};
pub use types::Block;

pub use qalog_reformat::{HEADING_MARKER, LIST_MARKER};
