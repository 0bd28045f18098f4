//! Per-field comparison policy.
//!
//! Different address fields tolerate different mismatch shapes. Reference
//! street rows often carry qualifiers the customer never types (`Street`,
//! `Cedex`), so street policies leave candidate-side extras free; postal codes
//! tolerate nothing at all. The policy is declared per field by the country
//! profile and injected into every comparison.

use serde::{Deserialize, Serialize};

use crate::ComparatorError;

/// How unmatched tokens and near matches are priced for one field.
///
/// Serde-friendly and cheap to clone so it can live inside country profile
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonPolicy {
    /// Charge one unit for every input token without a counterpart.
    pub penalize_left_unmatched: bool,
    /// Charge one unit for every candidate token without a counterpart.
    /// Turned off for fields where the reference data legitimately carries
    /// extra qualifying words.
    pub penalize_right_unmatched: bool,
    /// Allow typo-tolerant token pairing (small character edit distance).
    pub near_match: bool,
    /// Cost of a near-matched token pair. Must stay strictly below 2.0, the
    /// price of leaving both tokens unmatched, or near matching would never
    /// be chosen by the alignment.
    pub near_match_cost: f64,
    /// Base distance tolerated by the match verdict.
    pub base_tolerance: f64,
    /// Extra tolerated distance per input token, so longer multi-word names
    /// are not held to the same absolute bound as a one-word street.
    pub per_token_tolerance: f64,
}

impl ComparisonPolicy {
    /// Strict matching: no typo tolerance, no free sides, zero distance
    /// tolerated. Used for postal codes.
    pub fn exact() -> Self {
        Self {
            penalize_left_unmatched: true,
            penalize_right_unmatched: true,
            near_match: false,
            near_match_cost: 0.5,
            base_tolerance: 0.0,
            per_token_tolerance: 0.0,
        }
    }

    /// Default fuzzy policy with extra candidate tokens left unpenalized.
    pub fn ignore_right_unmatched() -> Self {
        Self {
            penalize_right_unmatched: false,
            ..Self::default()
        }
    }

    /// Distance at or below which a comparison of `left_len` input tokens is
    /// considered a match.
    pub fn match_tolerance(&self, left_len: usize) -> f64 {
        self.base_tolerance + self.per_token_tolerance * left_len as f64
    }

    /// Validate the policy knobs.
    pub fn validate(&self) -> Result<(), ComparatorError> {
        if !(self.near_match_cost > 0.0 && self.near_match_cost < 2.0) {
            return Err(ComparatorError::InvalidPolicy(
                "near_match_cost must be in (0.0, 2.0)".into(),
            ));
        }
        if !(self.base_tolerance >= 0.0 && self.base_tolerance.is_finite()) {
            return Err(ComparatorError::InvalidPolicy(
                "base_tolerance must be finite and >= 0.0".into(),
            ));
        }
        if !(self.per_token_tolerance >= 0.0 && self.per_token_tolerance.is_finite()) {
            return Err(ComparatorError::InvalidPolicy(
                "per_token_tolerance must be finite and >= 0.0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ComparisonPolicy {
    fn default() -> Self {
        Self {
            penalize_left_unmatched: true,
            penalize_right_unmatched: true,
            near_match: true,
            near_match_cost: 0.5,
            base_tolerance: 0.25,
            per_token_tolerance: 0.3,
        }
    }
}
