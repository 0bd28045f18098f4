//! Address-level comparison orchestration.
//!
//! One [`AddressComparison`] is built per (address, candidate) pair: it runs
//! the country parser once, compares every relevant field through the
//! injected policies, and exposes the per-field results for the validation
//! and exclusion layers. The pipeline (parse, tokenize, align, aggregate) is
//! pure and infallible; missing or unparseable data degrades to empty
//! sequences and absent verdicts.

use comparator::{compare, ComparisonPolicy, SequenceComparison};
use parser::{Address, ParsedComponents};
use sequence::{Sequence, TokenizeConfig};
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateRecord;
use crate::profile::CountryProfile;

/// Verdict for the building number against the candidate's ranges.
///
/// Reference rows store numeric ranges rather than literal numbers, so this
/// field does not go through sequence alignment. `in_range` is `None` when
/// either side has nothing to check; that is an absent verdict, not a
/// mismatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildingComparison {
    /// The parsed building number that was checked, if any.
    pub value: Option<String>,
    /// Containment verdict; `None` when no check was possible.
    pub in_range: Option<bool>,
}

impl BuildingComparison {
    /// Only an explicit out-of-range result counts against the candidate.
    pub fn is_match(&self) -> bool {
        self.in_range != Some(false)
    }
}

/// Aggregate of the per-field comparisons for one (address, candidate) pair.
#[derive(Debug, Clone)]
pub struct AddressComparison {
    address: Address,
    candidate: CandidateRecord,
    parsings: Vec<ParsedComponents>,
    street: SequenceComparison,
    city: SequenceComparison,
    zip: SequenceComparison,
    province: SequenceComparison,
    building: BuildingComparison,
}

impl AddressComparison {
    /// Parse the address with the profile's parser and compare every field.
    pub fn new(
        address: &Address,
        candidate: &CandidateRecord,
        profile: &CountryProfile,
    ) -> Self {
        let parsings = profile.parser().parse(address);
        let policies = profile.policies();
        let tok = &policies.tokenize;

        let street = street_comparison(address, candidate, &parsings, &policies.street, tok);
        let city = city_comparison(address, candidate, &policies.city, tok);
        let zip = zip_comparison(address, candidate, &policies.zip, tok);
        let province = province_comparison(address, candidate, &policies.province, tok);
        let building = building_comparison(candidate, &parsings);

        Self {
            address: address.clone(),
            candidate: candidate.clone(),
            parsings,
            street,
            city,
            zip,
            province,
            building,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn candidate(&self) -> &CandidateRecord {
        &self.candidate
    }

    /// Every plausible parsing the country parser produced.
    pub fn parsings(&self) -> &[ParsedComponents] {
        &self.parsings
    }

    pub fn street_comparison(&self) -> &SequenceComparison {
        &self.street
    }

    pub fn city_comparison(&self) -> &SequenceComparison {
        &self.city
    }

    pub fn zip_comparison(&self) -> &SequenceComparison {
        &self.zip
    }

    pub fn province_comparison(&self) -> &SequenceComparison {
        &self.province
    }

    pub fn building_comparison(&self) -> &BuildingComparison {
        &self.building
    }
}

/// Compare every left value against every right value and keep the best.
///
/// Best-of is how multiple parsings combine into one field verdict: ties
/// resolve to the earliest pair, so the result is deterministic. Empty value
/// lists compare as the empty sequence.
fn best_of(
    lefts: &[Sequence],
    rights: &[Sequence],
    policy: &ComparisonPolicy,
) -> SequenceComparison {
    let empty = Sequence::default();
    let lefts = if lefts.is_empty() {
        std::slice::from_ref(&empty)
    } else {
        lefts
    };
    let rights = if rights.is_empty() {
        std::slice::from_ref(&empty)
    } else {
        rights
    };

    let mut best: Option<SequenceComparison> = None;
    for left in lefts {
        for right in rights {
            let result = compare(left, right, policy);
            let better = match &best {
                None => true,
                Some(current) => result.distance < current.distance,
            };
            if better {
                best = Some(result);
            }
        }
    }
    // Both slices hold at least one element, so a result always exists.
    best.unwrap_or_else(|| compare(&empty, &empty, policy))
}

fn street_comparison(
    address: &Address,
    candidate: &CandidateRecord,
    parsings: &[ParsedComponents],
    policy: &ComparisonPolicy,
    tok: &TokenizeConfig,
) -> SequenceComparison {
    let joined: Option<String> = match (address.line1(), address.line2()) {
        (Some(l1), Some(l2)) => Some(format!("{l1} {l2}")),
        _ => None,
    };

    let mut values: Vec<&str> = Vec::new();
    for parsing in parsings {
        if let Some(street) = parsing.street.as_deref() {
            if !values.contains(&street) {
                values.push(street);
            }
        }
    }

    // No structured street: fall back to whole-line comparison.
    if values.is_empty() {
        if let Some(l1) = address.line1() {
            values.push(l1);
        }
        if let Some(both) = joined.as_deref() {
            values.push(both);
        }
    }

    let lefts: Vec<Sequence> = values
        .iter()
        .map(|v| Sequence::from_string_with(v, tok))
        .collect();
    let rights: Vec<Sequence> = candidate
        .street
        .as_deref()
        .map(|s| vec![Sequence::from_string_with(s, tok)])
        .unwrap_or_default();

    best_of(&lefts, &rights, policy)
}

fn city_comparison(
    address: &Address,
    candidate: &CandidateRecord,
    policy: &ComparisonPolicy,
    tok: &TokenizeConfig,
) -> SequenceComparison {
    let lefts: Vec<Sequence> = address
        .city
        .as_deref()
        .map(|c| vec![Sequence::from_string_with(c, tok)])
        .unwrap_or_default();
    let rights: Vec<Sequence> = candidate
        .city
        .iter()
        .map(|alias| Sequence::from_string_with(alias, tok))
        .collect();
    best_of(&lefts, &rights, policy)
}

fn zip_comparison(
    address: &Address,
    candidate: &CandidateRecord,
    policy: &ComparisonPolicy,
    tok: &TokenizeConfig,
) -> SequenceComparison {
    let lefts: Vec<Sequence> = address
        .zip
        .as_deref()
        .map(|z| vec![Sequence::from_string_with(&normalize_zip(z), tok)])
        .unwrap_or_default();
    let rights: Vec<Sequence> = candidate
        .zip
        .as_deref()
        .map(|z| vec![Sequence::from_string_with(&normalize_zip(z), tok)])
        .unwrap_or_default();
    best_of(&lefts, &rights, policy)
}

fn province_comparison(
    address: &Address,
    candidate: &CandidateRecord,
    policy: &ComparisonPolicy,
    tok: &TokenizeConfig,
) -> SequenceComparison {
    let lefts: Vec<Sequence> = address
        .province_code
        .as_deref()
        .map(|p| vec![Sequence::from_string_with(p, tok)])
        .unwrap_or_default();
    let rights: Vec<Sequence> = candidate
        .province_code
        .as_deref()
        .map(|p| vec![Sequence::from_string_with(p, tok)])
        .unwrap_or_default();
    best_of(&lefts, &rights, policy)
}

fn building_comparison(
    candidate: &CandidateRecord,
    parsings: &[ParsedComponents],
) -> BuildingComparison {
    let mut values: Vec<&str> = Vec::new();
    for parsing in parsings {
        if let Some(num) = parsing.building_num.as_deref() {
            if !values.contains(&num) {
                values.push(num);
            }
        }
    }

    let ranges = candidate.parsed_building_ranges();
    if values.is_empty() || ranges.is_empty() {
        return BuildingComparison {
            value: values.first().map(|v| v.to_string()),
            in_range: None,
        };
    }

    let mut checked = false;
    for value in &values {
        let Some(number) = leading_number(value) else {
            continue;
        };
        checked = true;
        if ranges.iter().any(|r| r.contains(number)) {
            return BuildingComparison {
                value: Some(value.to_string()),
                in_range: Some(true),
            };
        }
    }

    BuildingComparison {
        value: values.first().map(|v| v.to_string()),
        in_range: if checked { Some(false) } else { None },
    }
}

/// Uppercase and strip the separators postal services ignore.
fn normalize_zip(zip: &str) -> String {
    zip.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Leading digit run of a building number (`12a` → 12, `5/12` → 5).
fn leading_number(value: &str) -> Option<u32> {
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
