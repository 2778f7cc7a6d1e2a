//! Error types for model construction.

use thiserror::Error;

/// Error type for struct model construction.
///
/// Every variant represents an argument-contract violation raised
/// synchronously at construction time. Callers should treat these as
/// programming errors rather than recoverable runtime conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructError {
    /// An identifier argument was empty.
    #[error("empty {kind} given for attribute")]
    EmptyIdentifier {
        /// Which identifier was empty ("name" or "type name").
        kind: String,
    },

    /// A builder was finalized without a struct name.
    #[error("no name supplied before Builder::create")]
    MissingName,
}

impl StructError {
    /// Creates an empty-identifier error.
    pub fn empty(kind: impl Into<String>) -> Self {
        Self::EmptyIdentifier { kind: kind.into() }
    }
}
