use serde::{Deserialize, Serialize};

use sequence::Sequence;

/// Half-open range of token indices within one sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// How two aligned tokens relate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PairKind {
    /// Normalized texts are identical.
    Exact,
    /// Within the typo tolerance of the policy.
    Near,
}

/// One aligned token pair: index into the left sequence, index into the right.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignedPair {
    pub left: usize,
    pub right: usize,
    pub kind: PairKind,
}

/// Outcome of aligning two token sequences.
///
/// Holds the inputs, the aggregate distance, the match verdict, and the
/// matched/unmatched diagnostics consumed by poor-match heuristics in
/// country-specific exclusion rules. Distance 0.0 with both sequences
/// non-empty implies an exact match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SequenceComparison {
    pub left: Sequence,
    pub right: Sequence,
    /// Minimum total alignment cost. Lower is more similar.
    pub distance: f64,
    /// Whether `distance` is within the policy's tolerance for this input.
    pub is_match: bool,
    /// Aligned token pairs in left-to-right order.
    pub pairs: Vec<AlignedPair>,
    /// Contiguous runs of left tokens with no counterpart.
    pub left_unmatched: Vec<TokenSpan>,
    /// Contiguous runs of right tokens with no counterpart.
    pub right_unmatched: Vec<TokenSpan>,
}

impl SequenceComparison {
    /// Spans of left tokens that found a counterpart.
    pub fn left_matched(&self) -> Vec<TokenSpan> {
        group_spans(self.pairs.iter().map(|p| p.left))
    }

    /// Spans of right tokens that found a counterpart.
    pub fn right_matched(&self) -> Vec<TokenSpan> {
        group_spans(self.pairs.iter().map(|p| p.right))
    }

    /// Number of left tokens without a counterpart.
    pub fn left_unmatched_count(&self) -> usize {
        self.left_unmatched.iter().map(TokenSpan::len).sum()
    }

    /// Number of right tokens without a counterpart.
    pub fn right_unmatched_count(&self) -> usize {
        self.right_unmatched.iter().map(TokenSpan::len).sum()
    }

    /// A match with nothing stranded on either side.
    pub fn is_exact(&self) -> bool {
        self.is_match && self.distance == 0.0 && !self.left.is_empty()
    }
}

/// Group ascending indices into contiguous half-open spans.
pub(crate) fn group_spans(indices: impl Iterator<Item = usize>) -> Vec<TokenSpan> {
    let mut spans: Vec<TokenSpan> = Vec::new();
    for idx in indices {
        match spans.last_mut() {
            Some(span) if span.end == idx => span.end = idx + 1,
            _ => spans.push(TokenSpan {
                start: idx,
                end: idx + 1,
            }),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_spans_merges_adjacent() {
        let spans = group_spans([0, 1, 3, 4, 5, 9].into_iter());
        assert_eq!(
            spans,
            vec![
                TokenSpan { start: 0, end: 2 },
                TokenSpan { start: 3, end: 6 },
                TokenSpan { start: 9, end: 10 },
            ]
        );
    }

    #[test]
    fn group_spans_empty() {
        assert!(group_spans(std::iter::empty()).is_empty());
    }
}
