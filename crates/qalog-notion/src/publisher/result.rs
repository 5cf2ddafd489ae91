//! Publish result types.

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    /// Page the blocks were appended to.
    pub page_id: String,
    /// Number of content batches sent (excluding the divider call).
    pub batches: usize,
    /// Total blocks appended, including the trailing divider.
    pub blocks_appended: usize,
}
