//! Address token sequence layer.
//!
//! This crate normalizes one address field's text into an ordered sequence of
//! tokens. The comparator and the orchestrating layers rely on it for a stable
//! notion of equality between free-text values like street or city names.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC) and locale-free lowercasing
//! - Optional diacritic folding so `Café` and `Cafe` tokenize identically
//! - Splitting on whitespace plus a configurable separator set
//! - Retaining the original surface form of every token for display
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. The same text and config
//! yield the same token list on any machine, and tokenizing is idempotent.
//!
//! ## Invariants worth knowing
//!
//! - Any input string (including empty) produces a valid Sequence
//! - Token order is significant and preserved; sequences are never mutated
//! - Two sequences are equal iff their normalized token lists are equal
//! - Output depends only on text + config

mod config;
mod error;
mod token;
mod tokenizer;

pub use crate::config::TokenizeConfig;
pub use crate::error::SequenceError;
pub use crate::token::Token;
pub use crate::tokenizer::tokenize;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered, immutable list of normalized tokens representing one address
/// field's content. An empty sequence is valid and means "field absent".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Sequence {
    tokens: Vec<Token>,
}

impl Sequence {
    /// Tokenize `text` with the default configuration.
    pub fn from_string(text: &str) -> Self {
        Self::from_string_with(text, &TokenizeConfig::default())
    }

    /// Tokenize `text` with an explicit configuration.
    pub fn from_string_with(text: &str, cfg: &TokenizeConfig) -> Self {
        Self {
            tokens: tokenize(text, cfg),
        }
    }

    /// Build a sequence directly from pre-made tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl fmt::Display for Sequence {
    /// Joins the normalized token texts with single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Sequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
