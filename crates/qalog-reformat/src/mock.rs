//! Stub reformatter for testing.
//!
//! Provides [`StubReformatter`] for exercising the pipeline without spawning
//! an external tool.

use std::sync::RwLock;

use crate::error::ReformatError;
use crate::reformatter::Reformatter;

/// Reformatter returning a canned response.
///
/// Every prompt it receives is recorded and can be inspected with
/// [`StubReformatter::prompts`].
///
/// # Example
///
/// ```ignore
/// use qalog_reformat::{Reformatter, StubReformatter};
///
/// let stub = StubReformatter::returning("### 질문 요지\n- X");
/// let markdown = stub.reformat("prompt").unwrap();
/// assert_eq!(stub.prompts(), vec!["prompt".to_owned()]);
/// ```
#[derive(Debug)]
pub struct StubReformatter {
    response: Result<String, String>,
    prompts: RwLock<Vec<String>>,
}

impl StubReformatter {
    /// Stub that answers every prompt with `markdown`.
    #[must_use]
    pub fn returning(markdown: impl Into<String>) -> Self {
        Self {
            response: Ok(markdown.into()),
            prompts: RwLock::new(Vec::new()),
        }
    }

    /// Stub that fails every call as if the tool wrote `stderr`.
    #[must_use]
    pub fn failing(stderr: impl Into<String>) -> Self {
        Self {
            response: Err(stderr.into()),
            prompts: RwLock::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

impl Reformatter for StubReformatter {
    fn reformat(&self, prompt: &str) -> Result<String, ReformatError> {
        self.prompts.write().unwrap().push(prompt.to_owned());
        self.response
            .clone()
            .map_err(|stderr| ReformatError::ExternalTool { stderr })
    }
}
