//! Mock appender for testing.
//!
//! Provides [`MockAppender`] for unit testing without network access.

use std::sync::RwLock;

use crate::error::NotionError;
use crate::publisher::BlockAppender;
use crate::types::Block;

/// Mock appender recording every append call.
///
/// # Example
///
/// ```ignore
/// use qalog_notion::{Block, BlockAppender, MockAppender};
///
/// let appender = MockAppender::new().failing_on_call(2);
/// appender.append_children("page", &[Block::Divider]).unwrap();
/// assert!(appender.append_children("page", &[Block::Divider]).is_err());
/// assert_eq!(appender.calls().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockAppender {
    calls: RwLock<Vec<(String, Vec<Block>)>>,
    fail_on_call: Option<usize>,
}

impl MockAppender {
    /// Create a mock that accepts every call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the `call`-th append (1-based) with HTTP 500.
    ///
    /// Later calls succeed again.
    #[must_use]
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// All calls received, as `(block_id, children)` in call order.
    ///
    /// Rejected calls are recorded too.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn calls(&self) -> Vec<(String, Vec<Block>)> {
        self.calls.read().unwrap().clone()
    }
}

impl BlockAppender for MockAppender {
    fn append_children(&self, block_id: &str, children: &[Block]) -> Result<(), NotionError> {
        let mut calls = self.calls.write().unwrap();
        calls.push((block_id.to_owned(), children.to_vec()));

        if self.fail_on_call == Some(calls.len()) {
            return Err(NotionError::HttpResponse {
                status: 500,
                body: "mock failure".to_owned(),
            });
        }
        Ok(())
    }
}
