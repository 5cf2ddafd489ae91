//! Batched page publishing.
//!
//! This module provides the [`PagePublisher`] struct that appends converted
//! blocks to a page:
//!
//! 1. Split blocks into batches of at most `batch_size` (≤ 100)
//! 2. Append each batch in order, one request at a time
//! 3. Append a single trailing divider
//!
//! The API appends at the end of existing content, so batches are never sent
//! concurrently. The first failure stops the run; earlier batches stay on the
//! page.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use qalog_notion::{NotionClient, PagePublisher, PublishConfig, markdown_to_blocks};
//!
//! let client = NotionClient::new("https://api.notion.com/v1", "secret_abc", "2022-06-28");
//! let config = PublishConfig {
//!     page_id: "0123456789abcdef".to_owned(),
//!     batch_size: 100,
//! };
//! let publisher = PagePublisher::new(&client, config);
//!
//! let blocks = markdown_to_blocks("### 질문 요지\n- X");
//! let result = publisher.publish("What is X?", &blocks)?;
//! # Ok(())
//! # }
//! ```

mod executor;
mod result;

pub use executor::PagePublisher;
pub use result::PublishResult;

use qalog_config::{MAX_BATCH_SIZE, NotionConfig};

use crate::error::NotionError;
use crate::types::Block;

/// Appends child blocks to the end of a block container.
pub trait BlockAppender {
    /// Append `children`, in order, after the existing children of `block_id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if the request fails or is rejected.
    fn append_children(&self, block_id: &str, children: &[Block]) -> Result<(), NotionError>;
}

/// Destination and batching for [`PagePublisher`].
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Page (block container) that receives the blocks.
    pub page_id: String,
    /// Children per append call, clamped to `1..=100`.
    pub batch_size: usize,
}

impl From<&NotionConfig> for PublishConfig {
    fn from(config: &NotionConfig) -> Self {
        Self {
            page_id: config.page_id.clone(),
            batch_size: config.batch_size,
        }
    }
}

/// Split blocks into the batches sent by [`PagePublisher::publish`].
///
/// `batch_size` is clamped to `1..=100`.
pub fn plan_batches(blocks: &[Block], batch_size: usize) -> Vec<&[Block]> {
    blocks
        .chunks(batch_size.clamp(1, MAX_BATCH_SIZE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(count: usize) -> Vec<Block> {
        (0..count).map(|i| Block::Paragraph(i.to_string())).collect()
    }

    #[test]
    fn test_plan_batches_exact_multiple() {
        let blocks = paragraphs(200);
        let batches = plan_batches(&blocks, 100);

        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|batch| batch.len() == 100));
    }

    #[test]
    fn test_plan_batches_remainder() {
        let blocks = paragraphs(250);
        let sizes: Vec<usize> = plan_batches(&blocks, 100).iter().map(|b| b.len()).collect();

        assert_eq!(sizes, vec![100, 100, 50]);
    }

    #[test]
    fn test_plan_batches_clamps_size() {
        let blocks = paragraphs(150);

        assert_eq!(plan_batches(&blocks, 500).len(), 2);
        assert_eq!(plan_batches(&blocks, 0).len(), 150);
    }

    #[test]
    fn test_plan_batches_empty() {
        assert!(plan_batches(&[], 100).is_empty());
    }

    #[test]
    fn test_publish_config_from_notion_config() {
        let notion = NotionConfig {
            page_id: "page".to_owned(),
            batch_size: 25,
            ..NotionConfig::default()
        };

        let config = PublishConfig::from(&notion);
        assert_eq!(config.page_id, "page");
        assert_eq!(config.batch_size, 25);
    }
}
