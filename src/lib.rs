//! Workspace umbrella crate for the address matching engine.
//!
//! This crate stitches together the member crates (tokenization in
//! `address-sequence`, alignment scoring in `address-comparator`, country
//! grammar parsers in `address-parser`) behind one entry point: build
//! a [`Registry`] once at startup, then create one [`AddressComparison`] per
//! (address, candidate) pair evaluated during validation.
//!
//! ```
//! use addrmatch::{Address, AddressComparison, CandidateRecord, Registry};
//!
//! let registry = Registry::with_defaults()?;
//! let address = Address {
//!     address1: Some("Hauptstraße 137".into()),
//!     city: Some("Berlin".into()),
//!     country_code: "DE".into(),
//!     ..Default::default()
//! };
//! let candidate = CandidateRecord {
//!     country_code: "DE".into(),
//!     street: Some("Hauptstraße".into()),
//!     city: vec!["Berlin".into()],
//!     ..Default::default()
//! };
//!
//! let comparison = AddressComparison::new(&address, &candidate, registry.profile("DE"));
//! assert!(comparison.street_comparison().is_match);
//! # Ok::<(), addrmatch::ValidationError>(())
//! ```
//!
//! The pipeline is pure and stateless across requests: no I/O, no shared
//! mutable state, no caching beyond the registry itself, which is read-only
//! after construction and safe to share across threads.

mod candidate;
mod comparison;
mod error;
mod exclusion;
mod profile;

pub use crate::candidate::{CandidateRecord, NumericRange, Parity};
pub use crate::comparison::{AddressComparison, BuildingComparison};
pub use crate::error::ValidationError;
pub use crate::exclusion::{PolishRuralExclusion, SwissTerritoryExclusion};
pub use crate::profile::{CountryProfile, ExclusionRule, FieldPolicies, Registry};

pub use comparator::{
    compare, AlignedPair, ComparatorError, ComparisonPolicy, PairKind, SequenceComparison,
    TokenSpan,
};
pub use parser::{Address, CountryParser, Field, ParsedComponents, ParserError};
pub use sequence::{Sequence, SequenceError, Token, TokenizeConfig};

/// Compare an address against one candidate using the registry's profile for
/// the address's country.
pub fn compare_address(
    address: &Address,
    candidate: &CandidateRecord,
    registry: &Registry,
) -> AddressComparison {
    let profile = registry.profile(&address.country_code);
    AddressComparison::new(address, candidate, profile)
}

/// Candidates surviving the country's exclusion rules, in input order.
pub fn admissible<'a>(
    address: &Address,
    candidates: &'a [CandidateRecord],
    registry: &Registry,
) -> Vec<(&'a CandidateRecord, AddressComparison)> {
    let profile = registry.profile(&address.country_code);
    candidates
        .iter()
        .filter_map(|candidate| {
            let comparison = AddressComparison::new(address, candidate, profile);
            if profile.excluded(candidate, &comparison) {
                None
            } else {
                Some((candidate, comparison))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_address_uses_country_profile() {
        let registry = Registry::with_defaults().expect("default registry");
        let address = Address {
            address1: Some("12 Rue de la Paix".into()),
            country_code: "FR".into(),
            ..Default::default()
        };
        let candidate = CandidateRecord {
            country_code: "FR".into(),
            street: Some("Rue de la Paix".into()),
            ..Default::default()
        };
        let comparison = compare_address(&address, &candidate, &registry);
        assert!(comparison.street_comparison().is_match);
        assert_eq!(comparison.street_comparison().distance, 0.0);
    }

    #[test]
    fn admissible_filters_excluded_candidates() {
        let registry = Registry::with_defaults().expect("default registry");
        let address = Address {
            address1: Some("Bahnhofstrasse 1".into()),
            city: Some("Zürich".into()),
            country_code: "CH".into(),
            ..Default::default()
        };
        let candidates = vec![
            CandidateRecord {
                country_code: "CH".into(),
                street: Some("Bahnhofstrasse".into()),
                city: vec!["Zürich".into()],
                zip: Some("8001".into()),
                ..Default::default()
            },
            CandidateRecord {
                country_code: "CH".into(),
                street: Some("Bahnhofstrasse".into()),
                city: vec!["Büsingen".into()],
                zip: Some("8238".into()),
                ..Default::default()
            },
        ];
        let kept = admissible(&address, &candidates, &registry);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0.zip.as_deref(), Some("8001"));
    }
}
