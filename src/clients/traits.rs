use async_trait::async_trait;

use crate::error::Result;

/// A chat-completion provider. One call per analysis request; the
/// orchestrator owns prompt construction and response validation.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Returns the raw text of the first content block. May be prose-wrapped
    /// JSON; the validator handles extraction.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}
