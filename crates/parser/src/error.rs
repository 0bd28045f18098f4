use thiserror::Error;

/// Errors produced by the parser crate.
///
/// Parsing input text never fails: an input no grammar understands yields an
/// empty interpretation set. Only constructing a parser can error, and only
/// on a malformed grammar pattern, which is a programmer mistake surfaced at
/// startup rather than mid-request.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum ParserError {
    /// A grammar pattern failed to compile.
    #[error("invalid grammar `{name}`: {source}")]
    InvalidGrammar {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}
