/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::returning(text)` - Always succeeds with the given text
 * - `MockProvider::empty()` - Succeeds with an empty completion
 * - `MockProvider::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::CompletionProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBehavior {
    /// Always succeeds with a scripted completion
    Scripted(String),
    /// Returns an empty completion
    Empty,
    /// Always fails with a request error
    Failing,
}

/// Mock provider for testing generation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of completions requested so far
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock provider that always returns the given completion
    pub fn returning(completion: &str) -> Self {
        Self::new(MockBehavior::Scripted(completion.to_string()))
    }

    /// Create a mock provider that returns empty completions
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of completions requested from this provider
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Scripted(completion) => Ok(completion.clone()),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider configured to fail".to_string(),
            )),
        }
    }
}
