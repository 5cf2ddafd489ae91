//! Page publisher implementation.

use crate::error::PublishError;
use crate::types::Block;

use super::result::PublishResult;
use super::{BlockAppender, PublishConfig, plan_batches};

/// Appends blocks to a page in ordered batches.
pub struct PagePublisher<'a, A: BlockAppender + ?Sized> {
    appender: &'a A,
    config: PublishConfig,
}

impl<'a, A: BlockAppender + ?Sized> PagePublisher<'a, A> {
    /// Create a new page publisher.
    #[must_use]
    pub fn new(appender: &'a A, config: PublishConfig) -> Self {
        Self { appender, config }
    }

    /// Destination page ID.
    pub fn page_id(&self) -> &str {
        &self.config.page_id
    }

    /// Batches [`publish`](Self::publish) would send for `blocks`.
    pub fn plan<'b>(&self, blocks: &'b [Block]) -> Vec<&'b [Block]> {
        plan_batches(blocks, self.config.batch_size)
    }

    /// Append `blocks` to the page, then a trailing divider.
    ///
    /// `title` only labels log output.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Append`] for the first rejected batch, or
    /// [`PublishError::Divider`] if only the divider was rejected. Nothing is
    /// retried and already appended batches are left in place.
    pub fn publish(&self, title: &str, blocks: &[Block]) -> Result<PublishResult, PublishError> {
        let page_id = self.page_id();
        let batches = self.plan(blocks);
        let total = batches.len();

        tracing::info!(
            title,
            page_id,
            blocks = blocks.len(),
            batches = total,
            "Publishing to page"
        );

        for (index, batch) in batches.iter().enumerate() {
            let batch_no = index + 1;
            tracing::debug!(batch = batch_no, total, size = batch.len(), "Appending batch");

            self.appender
                .append_children(page_id, batch)
                .map_err(|source| {
                    tracing::warn!(batch = batch_no, total, "Batch rejected, stopping");
                    PublishError::Append {
                        batch: batch_no,
                        total,
                        source,
                    }
                })?;
        }

        tracing::debug!("Appending trailing divider");
        self.appender
            .append_children(page_id, &[Block::Divider])
            .map_err(|source| PublishError::Divider { source })?;

        tracing::info!(title, page_id, "Published");

        Ok(PublishResult {
            page_id: page_id.to_owned(),
            batches: total,
            blocks_appended: blocks.len() + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotionError;
    use crate::mock::MockAppender;
    use pretty_assertions::assert_eq;

    fn config(batch_size: usize) -> PublishConfig {
        PublishConfig {
            page_id: "page-1".to_owned(),
            batch_size,
        }
    }

    fn paragraphs(count: usize) -> Vec<Block> {
        (0..count).map(|i| Block::Paragraph(i.to_string())).collect()
    }

    #[test]
    fn test_publish_single_batch_then_divider() {
        let appender = MockAppender::new();
        let publisher = PagePublisher::new(&appender, config(100));
        let blocks = vec![
            Block::Heading("A".to_owned()),
            Block::BulletedItem("B".to_owned()),
        ];

        let result = publisher.publish("title", &blocks).unwrap();

        assert_eq!(
            appender.calls(),
            vec![
                ("page-1".to_owned(), blocks.clone()),
                ("page-1".to_owned(), vec![Block::Divider]),
            ]
        );
        assert_eq!(
            result,
            PublishResult {
                page_id: "page-1".to_owned(),
                batches: 1,
                blocks_appended: 3,
            }
        );
    }

    #[test]
    fn test_publish_splits_large_input_in_order() {
        let appender = MockAppender::new();
        let publisher = PagePublisher::new(&appender, config(100));
        let blocks = paragraphs(250);

        let result = publisher.publish("title", &blocks).unwrap();
        let calls = appender.calls();

        // ceil(250 / 100) content calls plus the divider call
        assert_eq!(calls.len(), 4);
        assert_eq!(
            calls.iter().map(|(_, c)| c.len()).collect::<Vec<_>>(),
            vec![100, 100, 50, 1]
        );
        let sent: Vec<Block> = calls[..3].iter().flat_map(|(_, c)| c.clone()).collect();
        assert_eq!(sent, blocks);
        assert_eq!(calls[3].1, vec![Block::Divider]);
        assert_eq!(result.batches, 3);
        assert_eq!(result.blocks_appended, 251);
    }

    #[test]
    fn test_publish_oversized_batch_size_is_clamped() {
        let appender = MockAppender::new();
        let publisher = PagePublisher::new(&appender, config(1000));

        publisher.publish("title", &paragraphs(101)).unwrap();

        let sizes: Vec<usize> = appender.calls().iter().map(|(_, c)| c.len()).collect();
        assert_eq!(sizes, vec![100, 1, 1]);
    }

    #[test]
    fn test_publish_empty_still_appends_divider() {
        let appender = MockAppender::new();
        let publisher = PagePublisher::new(&appender, config(100));

        let result = publisher.publish("title", &[]).unwrap();

        assert_eq!(
            appender.calls(),
            vec![("page-1".to_owned(), vec![Block::Divider])]
        );
        assert_eq!(result.batches, 0);
        assert_eq!(result.blocks_appended, 1);
    }

    #[test]
    fn test_publish_stops_at_first_failed_batch() {
        let appender = MockAppender::new().failing_on_call(2);
        let publisher = PagePublisher::new(&appender, config(100));

        let err = publisher.publish("title", &paragraphs(300)).unwrap_err();

        assert!(
            matches!(
                err,
                PublishError::Append {
                    batch: 2,
                    total: 3,
                    source: NotionError::HttpResponse { status: 500, .. },
                }
            ),
            "Expected batch 2 failure, got {err:?}"
        );
        // no third batch and no divider after the failure
        assert_eq!(appender.calls().len(), 2);
    }

    #[test]
    fn test_publish_divider_failure() {
        let appender = MockAppender::new().failing_on_call(2);
        let publisher = PagePublisher::new(&appender, config(100));

        let err = publisher.publish("title", &paragraphs(10)).unwrap_err();

        assert!(matches!(err, PublishError::Divider { .. }));
        assert_eq!(appender.calls().len(), 2);
    }

    #[test]
    fn test_publish_through_trait_object() {
        let appender = MockAppender::new();
        let dyn_appender: &dyn BlockAppender = &appender;
        let publisher = PagePublisher::new(dyn_appender, config(100));

        publisher.publish("title", &paragraphs(1)).unwrap();

        assert_eq!(appender.calls().len(), 2);
    }
}
