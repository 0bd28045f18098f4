//! Configuration for address tokenization.
//!
//! [`TokenizeConfig`] controls how a raw field value is split and normalized.
//! The `version` field tracks behavior changes: any change to tokenization
//! output (even a bug fix) must bump it so that stored comparison artifacts
//! from older versions remain distinguishable.

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

/// Configuration for the tokenizer.
///
/// Cheap to clone and serde-friendly so it can be embedded in country profile
/// configuration. For a given `version` the output is stable across machines,
/// operating systems, and locales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Semantic version of the tokenization behavior. Must be >= 1.
    pub version: u32,

    /// If true, strip combining diacritical marks from the comparison form
    /// (é → e) and expand ß → ss. Raw surface forms are unaffected.
    ///
    /// Recommended for matching against reference data whose accenting is
    /// inconsistent. Disable only when diacritics are significant for the
    /// target locale.
    pub fold_diacritics: bool,

    /// Characters treated as token separators in addition to Unicode
    /// whitespace. The default covers the punctuation that routinely glues
    /// address words together: `, ; / \ ( ) - . '`
    pub separators: String,

    /// Upper bound on the number of tokens kept per sequence. Input beyond
    /// the bound is truncated so a pathological free-text field cannot blow
    /// up the quadratic alignment downstream.
    pub max_tokens: usize,
}

impl TokenizeConfig {
    /// Validate the configuration. Version 0 is reserved and invalid, and a
    /// zero `max_tokens` would silence every comparison.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.version == 0 {
            return Err(SequenceError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.max_tokens == 0 {
            return Err(SequenceError::InvalidConfig(
                "max_tokens must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            fold_diacritics: true,
            separators: ",;/\\()-.'".to_string(),
            max_tokens: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TokenizeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = TokenizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SequenceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_max_tokens_rejected() {
        let cfg = TokenizeConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SequenceError::InvalidConfig(_))
        ));
    }
}
