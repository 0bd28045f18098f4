//! Token sequence comparison for address matching.
//!
//! Given two [`sequence::Sequence`] values, this crate finds the lowest-cost
//! order-preserving alignment between their tokens and turns it into a
//! distance, a match verdict, and per-token diagnostics. It is the scoring
//! core behind street and city fuzzy matching: `Rue de la Paix` still matches
//! `Rue Paix`, while a reordered `Main Street North` scores worse against
//! `North Main Street` than the exact form does.
//!
//! ## Cost model
//!
//! - identical normalized tokens align for free
//! - near matches (one character typo, two for long tokens) cost a small
//!   penalty, strictly below leaving both tokens unmatched
//! - an unmatched token costs one unit on its own side, unless the
//!   [`ComparisonPolicy`] declares that side free
//!
//! The alignment is computed by dynamic programming over the two token lists
//! (O(len(left) × len(right))), never by bag-of-words intersection, so the
//! left-to-right structure of multi-word names is part of the score.
//!
//! ## Determinism
//!
//! Equal-cost alignments are broken by a fixed backtrack precedence, so the
//! matched/unmatched diagnostics are reproducible run to run, and tests can
//! assert on spans rather than just the distance number.

mod alignment;
mod distance;
mod policy;
mod result;

pub use crate::distance::{levenshtein, normalized_distance};
pub use crate::policy::ComparisonPolicy;
pub use crate::result::{AlignedPair, PairKind, SequenceComparison, TokenSpan};

pub use crate::alignment::compare;

use thiserror::Error;

/// Errors produced by the comparator crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComparatorError {
    /// A comparison policy violates an invariant.
    #[error("invalid comparison policy: {0}")]
    InvalidPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sequence::Sequence;

    fn seq(s: &str) -> Sequence {
        Sequence::from_string(s)
    }

    #[test]
    fn self_match_is_zero_distance() {
        let policy = ComparisonPolicy::default();
        let left = seq("north main street");
        let cmp = compare(&left, &left, &policy);
        assert_eq!(cmp.distance, 0.0);
        assert!(cmp.is_match);
        assert!(cmp.left_unmatched.is_empty());
        assert!(cmp.right_unmatched.is_empty());
    }

    #[test]
    fn empty_vs_empty_matches() {
        let policy = ComparisonPolicy::default();
        let cmp = compare(&seq(""), &seq(""), &policy);
        assert_eq!(cmp.distance, 0.0);
        assert!(cmp.is_match);
    }

    #[test]
    fn empty_left_penalty_is_bounded_per_token() {
        let policy = ComparisonPolicy::default();
        let cmp = compare(&seq(""), &seq("main street"), &policy);
        assert_eq!(cmp.distance, 2.0);
        assert!(!cmp.is_match);
        assert_eq!(cmp.right_unmatched, vec![TokenSpan { start: 0, end: 2 }]);
    }

    #[test]
    fn reordering_scores_worse_than_exact() {
        let policy = ComparisonPolicy::default();
        let reordered = compare(&seq("north main street"), &seq("main street north"), &policy);
        let exact = compare(&seq("main street north"), &seq("main street north"), &policy);
        assert!(reordered.distance > exact.distance);
        assert!(!reordered.is_match);
        // The order-preserving alignment keeps "main street" and strands the
        // two "north" tokens on opposite ends.
        assert_eq!(reordered.left_unmatched, vec![TokenSpan { start: 0, end: 1 }]);
        assert_eq!(reordered.right_unmatched, vec![TokenSpan { start: 2, end: 3 }]);
    }

    #[test]
    fn near_match_costs_less_than_unmatched_pair() {
        let policy = ComparisonPolicy::default();
        let typo = compare(&seq("hauptstrase 137"), &seq("hauptstrasse 137"), &policy);
        assert_eq!(typo.distance, policy.near_match_cost);
        assert!(typo.is_match);
        let unrelated = compare(&seq("elm 137"), &seq("oak 137"), &policy);
        assert!(typo.distance < unrelated.distance);
    }

    #[test]
    fn ignore_right_unmatched_policy_effect() {
        let policy = ComparisonPolicy::ignore_right_unmatched();
        let base = compare(&seq("rue paix"), &seq("rue de la paix"), &policy);
        assert_eq!(base.distance, 0.0);
        assert!(base.is_match);

        // Extra candidate tokens never raise the distance...
        let padded = compare(&seq("rue paix"), &seq("rue de la paix cedex"), &policy);
        assert!(padded.distance <= base.distance);
        assert!(padded.is_match);

        // ...but extra input tokens still do.
        let extra_left = compare(&seq("rue paix annexe"), &seq("rue de la paix"), &policy);
        assert!(extra_left.distance > base.distance);
    }

    #[test]
    fn partial_overlap_reports_stable_spans() {
        let policy = ComparisonPolicy::default();
        let cmp = compare(&seq("rue de la paix"), &seq("rue paix"), &policy);
        assert_eq!(cmp.distance, 2.0);
        assert_eq!(cmp.left_unmatched, vec![TokenSpan { start: 1, end: 3 }]);
        assert!(cmp.right_unmatched.is_empty());
        let matched_left: Vec<usize> = cmp.pairs.iter().map(|p| p.left).collect();
        assert_eq!(matched_left, vec![0, 3]);
    }

    #[test]
    fn longer_sequences_tolerate_more_distance() {
        let policy = ComparisonPolicy::default();
        // One stranded token pair out of six still matches...
        let long = compare(
            &seq("avenue of the americas north tower"),
            &seq("avenue of the americas south tower"),
            &policy,
        );
        assert_eq!(long.distance, 2.0);
        assert!(long.is_match);
        // ...while the same absolute distance on a two-token street does not.
        let short = compare(&seq("elm north"), &seq("elm south"), &policy);
        assert_eq!(short.distance, 2.0);
        assert!(!short.is_match);
    }

    #[test]
    fn comparison_is_deterministic() {
        let policy = ComparisonPolicy::default();
        let a = compare(&seq("main st north"), &seq("north main street"), &policy);
        for _ in 0..5 {
            let b = compare(&seq("main st north"), &seq("north main street"), &policy);
            assert_eq!(a.distance, b.distance);
            assert_eq!(a.is_match, b.is_match);
            assert_eq!(a.left_unmatched, b.left_unmatched);
            assert_eq!(a.right_unmatched, b.right_unmatched);
        }
    }

    #[test]
    fn result_serializes() {
        let policy = ComparisonPolicy::default();
        let cmp = compare(&seq("main street"), &seq("main st"), &policy);
        let json = serde_json::to_string(&cmp).expect("serialize");
        assert!(json.contains("distance"));
    }
}
