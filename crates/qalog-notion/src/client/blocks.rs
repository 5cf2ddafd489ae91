//! Block operations for Notion API.

use tracing::info;

use super::NotionClient;
use crate::error::NotionError;
use crate::publisher::BlockAppender;
use crate::types::{AppendChildrenRequest, Block};

impl NotionClient {
    /// URL of the append-children endpoint for a block container.
    fn children_url(&self, block_id: &str) -> String {
        format!("{}/blocks/{}/children", self.base_url, block_id)
    }
}

impl BlockAppender for NotionClient {
    /// Append children to the end of a block container (page).
    fn append_children(&self, block_id: &str, children: &[Block]) -> Result<(), NotionError> {
        let url = self.children_url(block_id);

        info!("Appending {} block(s) to {}", children.len(), block_id);

        let response = self
            .agent
            .patch(&url)
            .header("Authorization", &self.auth_header())
            .header("Notion-Version", &self.version)
            .header("Accept", "application/json")
            .send_json(AppendChildrenRequest { children })?;

        let status = response.status().as_u16();

        if status >= 400 {
            let error_body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(NotionError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_url() {
        let client = NotionClient::new("https://api.notion.com/v1", "secret", "2022-06-28");
        assert_eq!(
            client.children_url("abc123"),
            "https://api.notion.com/v1/blocks/abc123/children"
        );
    }
}
