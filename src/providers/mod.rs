/*!
 * Completion provider interface.
 *
 * The structuring core never talks to a network service itself; it only
 * consumes the resolved text of a completion. This trait is the narrow
 * seam an embedding application implements on top of its own LLM client.
 * Retries, timeouts, and provider selection are the implementor's concern.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync + Debug {
    /// Turn a prompt into raw completion text
    ///
    /// # Arguments
    /// * `prompt` - The prompt to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The completion text or a provider error
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

pub mod mock;
