//! Country profiles and the startup registry.
//!
//! A [`CountryProfile`] bundles the strategy objects one country needs: its
//! parser, its per-field comparison policies, and its exclusion rules. The
//! core never reaches for ambient global state: callers build a [`Registry`]
//! once at process start (grammar compilation happens here, eagerly) and
//! share it read-only across requests.

use std::collections::HashMap;
use std::sync::Arc;

use comparator::ComparisonPolicy;
use parser::countries::{
    Australia, Austria, France, Generic, Germany, Netherlands, Poland, SouthKorea, Switzerland,
    UnitedStates,
};
use parser::CountryParser;
use sequence::TokenizeConfig;
use serde::{Deserialize, Serialize};

use crate::candidate::CandidateRecord;
use crate::comparison::AddressComparison;
use crate::error::ValidationError;

/// Per-field comparison policies plus the tokenizer configuration.
///
/// Streets ignore unmatched candidate-side tokens because reference rows
/// carry qualifiers (`Street`, `Cedex`) the customer rarely types; postal
/// codes and province codes tolerate nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldPolicies {
    pub street: ComparisonPolicy,
    pub city: ComparisonPolicy,
    pub zip: ComparisonPolicy,
    pub province: ComparisonPolicy,
    pub tokenize: TokenizeConfig,
}

impl FieldPolicies {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.street.validate()?;
        self.city.validate()?;
        self.zip.validate()?;
        self.province.validate()?;
        self.tokenize.validate()?;
        Ok(())
    }
}

impl Default for FieldPolicies {
    fn default() -> Self {
        Self {
            street: ComparisonPolicy::ignore_right_unmatched(),
            city: ComparisonPolicy::default(),
            zip: ComparisonPolicy::exact(),
            province: ComparisonPolicy::exact(),
            tokenize: TokenizeConfig::default(),
        }
    }
}

/// A rule that removes a candidate from consideration after comparison.
///
/// Pure predicate: must not mutate the comparison, and runs only after the
/// full [`AddressComparison`] is built.
pub trait ExclusionRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn applies(&self, candidate: &CandidateRecord, comparison: &AddressComparison) -> bool;
}

/// Everything one country injects into the comparison pipeline.
#[derive(Clone)]
pub struct CountryProfile {
    parser: Arc<dyn CountryParser>,
    policies: FieldPolicies,
    exclusions: Vec<Arc<dyn ExclusionRule>>,
}

impl CountryProfile {
    pub fn new(
        parser: Arc<dyn CountryParser>,
        policies: FieldPolicies,
    ) -> Result<Self, ValidationError> {
        policies.validate()?;
        Ok(Self {
            parser,
            policies,
            exclusions: Vec::new(),
        })
    }

    pub fn with_exclusion(mut self, rule: Arc<dyn ExclusionRule>) -> Self {
        self.exclusions.push(rule);
        self
    }

    pub fn parser(&self) -> &dyn CountryParser {
        self.parser.as_ref()
    }

    pub fn policies(&self) -> &FieldPolicies {
        &self.policies
    }

    pub fn exclusions(&self) -> &[Arc<dyn ExclusionRule>] {
        &self.exclusions
    }

    /// Whether any exclusion rule removes this candidate.
    pub fn excluded(&self, candidate: &CandidateRecord, comparison: &AddressComparison) -> bool {
        self.exclusions
            .iter()
            .any(|rule| rule.applies(candidate, comparison))
    }
}

impl std::fmt::Debug for CountryProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryProfile")
            .field("country", &self.parser.code())
            .field("policies", &self.policies)
            .field(
                "exclusions",
                &self.exclusions.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Read-only table of country profiles, built once at startup.
pub struct Registry {
    profiles: HashMap<String, CountryProfile>,
    fallback: CountryProfile,
}

impl Registry {
    /// Build the default table: every shipped country parser with the
    /// default field policies, plus the shipped exclusion rules for Poland
    /// and Switzerland.
    pub fn with_defaults() -> Result<Self, ValidationError> {
        use crate::exclusion::{PolishRuralExclusion, SwissTerritoryExclusion};

        let mut registry = Self {
            profiles: HashMap::new(),
            fallback: CountryProfile::new(
                Arc::new(Generic::new()?),
                FieldPolicies::default(),
            )?,
        };

        registry.register(
            "DE",
            CountryProfile::new(Arc::new(Germany::new()?), FieldPolicies::default())?,
        );
        registry.register(
            "AT",
            CountryProfile::new(Arc::new(Austria::new()?), FieldPolicies::default())?,
        );
        registry.register(
            "CH",
            CountryProfile::new(Arc::new(Switzerland::new()?), FieldPolicies::default())?
                .with_exclusion(Arc::new(SwissTerritoryExclusion::default())),
        );
        registry.register(
            "NL",
            CountryProfile::new(Arc::new(Netherlands::new()?), FieldPolicies::default())?,
        );
        registry.register(
            "FR",
            CountryProfile::new(Arc::new(France::new()?), FieldPolicies::default())?,
        );
        registry.register(
            "US",
            CountryProfile::new(Arc::new(UnitedStates::new()?), FieldPolicies::default())?,
        );
        registry.register(
            "AU",
            CountryProfile::new(Arc::new(Australia::new()?), FieldPolicies::default())?,
        );
        registry.register(
            "PL",
            CountryProfile::new(Arc::new(Poland::new()?), FieldPolicies::default())?
                .with_exclusion(Arc::new(PolishRuralExclusion)),
        );
        registry.register(
            "KR",
            CountryProfile::new(Arc::new(SouthKorea::new()?), FieldPolicies::default())?,
        );

        Ok(registry)
    }

    /// Register or replace a profile. Country codes are case-insensitive.
    pub fn register(&mut self, code: &str, profile: CountryProfile) {
        self.profiles.insert(code.to_uppercase(), profile);
    }

    /// Profile for a country, falling back to the generic parser for
    /// countries without dedicated grammars.
    pub fn profile(&self, country_code: &str) -> &CountryProfile {
        self.profiles
            .get(country_code.to_uppercase().as_str())
            .unwrap_or(&self.fallback)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut codes: Vec<&String> = self.profiles.keys().collect();
        codes.sort();
        f.debug_struct("Registry").field("countries", &codes).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_builds() {
        let registry = Registry::with_defaults().expect("default registry");
        assert_eq!(registry.profile("DE").parser().code(), "DE");
        assert_eq!(registry.profile("de").parser().code(), "DE");
    }

    #[test]
    fn unknown_country_falls_back_to_generic() {
        let registry = Registry::with_defaults().expect("default registry");
        assert_eq!(registry.profile("ES").parser().code(), "ZZ");
    }

    #[test]
    fn invalid_policies_rejected_at_construction() {
        let bad = FieldPolicies {
            street: ComparisonPolicy {
                near_match_cost: -1.0,
                ..ComparisonPolicy::default()
            },
            ..FieldPolicies::default()
        };
        let parser = Arc::new(Generic::new().expect("grammar compiles"));
        assert!(CountryProfile::new(parser, bad).is_err());
    }

    #[test]
    fn swiss_profile_carries_exclusion() {
        let registry = Registry::with_defaults().expect("default registry");
        assert_eq!(registry.profile("CH").exclusions().len(), 1);
    }
}
