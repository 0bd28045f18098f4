use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single normalized token with its original surface form.
///
/// `text` is the comparison form (NFKC, lowercased, optionally diacritic
/// folded); `raw` is the slice of the input it came from, kept for display.
/// Equality and hashing consider only `text`, so `Straße` and `strasse`
/// are the same token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Normalized comparison form.
    pub text: String,
    /// Original surface form from the input.
    pub raw: String,
}

impl Token {
    pub fn new(text: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: raw.into(),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}
