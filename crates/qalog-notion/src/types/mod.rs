//! Notion API types.

mod block;

pub use block::Block;
pub(crate) use block::AppendChildrenRequest;
