//! Shipped country-specific exclusion rules.
//!
//! Exclusion rules are pure predicates evaluated after the address
//! comparison is built; a rule that applies removes the candidate from the
//! result set. They are injected per country through [`CountryProfile`]
//! rather than hardcoded, so deployments can add or drop rules without
//! touching the pipeline.
//!
//! [`CountryProfile`]: crate::profile::CountryProfile

use std::collections::HashSet;
use std::ops::RangeInclusive;

use sequence::Sequence;

use crate::candidate::CandidateRecord;
use crate::comparison::AddressComparison;
use crate::profile::ExclusionRule;

/// Polish rural rows where the street name is the locality name.
///
/// Rural reference rows repeat the village name in the street column. Such a
/// candidate says nothing about the street the customer typed, so it is only
/// kept when the city itself matched.
pub struct PolishRuralExclusion;

impl ExclusionRule for PolishRuralExclusion {
    fn name(&self) -> &'static str {
        "polish-rural"
    }

    fn applies(&self, candidate: &CandidateRecord, comparison: &AddressComparison) -> bool {
        let Some(street) = candidate.street.as_deref() else {
            return false;
        };
        let street_seq = Sequence::from_string(street);
        let street_is_city = candidate
            .city
            .iter()
            .any(|alias| Sequence::from_string(alias) == street_seq);
        street_is_city && !comparison.city_comparison().is_match
    }
}

/// Swiss postal codes serving territories outside supported coverage:
/// foreign enclaves routed through the Swiss system and the Liechtenstein
/// block.
pub struct SwissTerritoryExclusion {
    enclave_zips: HashSet<&'static str>,
    liechtenstein: RangeInclusive<u32>,
}

impl Default for SwissTerritoryExclusion {
    fn default() -> Self {
        Self {
            // Büsingen am Hochrhein and Campione d'Italia.
            enclave_zips: ["8238", "6911"].into_iter().collect(),
            liechtenstein: 9485..=9498,
        }
    }
}

impl ExclusionRule for SwissTerritoryExclusion {
    fn name(&self) -> &'static str {
        "swiss-territory"
    }

    fn applies(&self, candidate: &CandidateRecord, _comparison: &AddressComparison) -> bool {
        let Some(zip) = candidate.zip.as_deref().map(str::trim) else {
            return false;
        };
        if self.enclave_zips.contains(zip) {
            return true;
        }
        zip.parse::<u32>()
            .is_ok_and(|n| self.liechtenstein.contains(&n))
    }
}
