/*!
 * Error types for the scriptweave library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a completion provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making a completion request fails
    #[error("Completion request failed: {0}")]
    RequestFailed(String),

    /// Error when the provider returned an empty completion
    #[error("Provider returned an empty completion")]
    EmptyCompletion,

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while structuring a script.
///
/// Grammar mismatches are deliberately not represented here: a detector that
/// cannot make sense of its input yields an empty scene list, which is a
/// normal outcome, not a fault. Only caller contract violations escape the
/// structuring pipeline.
#[derive(Error, Debug)]
pub enum StructureError {
    /// The script context carried no title, so the Header element cannot be built
    #[error("Script title must not be empty")]
    MissingTitle,
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a completion provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from script structuring
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
