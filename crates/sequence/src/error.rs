use thiserror::Error;

/// Errors produced by the sequence crate.
///
/// Tokenizing itself is infallible; only configuration can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    /// The tokenizer configuration violates an invariant.
    #[error("invalid tokenize config: {0}")]
    InvalidConfig(String),
}
