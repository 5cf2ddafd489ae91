//! Error types for Notion publishing.

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
}

/// Error while appending blocks to a page.
///
/// Batches appended before the failure stay on the page.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// A content batch was rejected.
    #[error("failed to append batch {batch} of {total}: {source}")]
    Append {
        /// 1-based index of the failed batch.
        batch: usize,
        /// Number of content batches planned.
        total: usize,
        /// Underlying API error.
        source: NotionError,
    },

    /// All content was appended but the trailing divider was rejected.
    #[error("failed to append trailing divider: {source}")]
    Divider {
        /// Underlying API error.
        source: NotionError,
    },
}
