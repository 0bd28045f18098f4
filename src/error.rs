use thiserror::Error;

/// Errors that can occur while assembling the validation engine.
///
/// Comparing an address never fails: malformed input degrades instead of
/// erroring. Only constructing parsers and validating injected configuration
/// can fail, and both happen once at startup.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ValidationError {
    /// A country parser failed to construct.
    #[error("parser failure: {0}")]
    Parser(#[from] parser::ParserError),
    /// A tokenizer configuration was rejected.
    #[error("sequence failure: {0}")]
    Sequence(#[from] sequence::SequenceError),
    /// A comparison policy was rejected.
    #[error("comparator failure: {0}")]
    Comparator(#[from] comparator::ComparatorError),
}
