use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::address::Address;
use crate::base::CountryParser;
use crate::components::ParsedComponents;
use crate::error::ParserError;
use crate::grammar::{fragments, Grammar};

use super::{compile, street_not_in_lines, strip_po_box};

static STREET_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "straat", "laan", "weg", "plein", "gracht", "kade", "dijk", "singel", "hof", "pad",
        "dreef", "steeg",
    ]
    .into_iter()
    .collect()
});

/// The Netherlands. Street-first with a short house-number addition
/// (`Kerkstraat 12 II`, `Kerkstraat 12-a`), `Postbus` PO boxes.
pub struct Netherlands {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl Netherlands {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: vec![
                Grammar::new(
                    "street-number-addition",
                    &format!(
                        r"^{lazy}\s+(?P<building_num>\d+)[\s-]+(?P<unit_num>[a-zA-Z0-9]{{1,4}})$",
                        lazy = fragments::STREET_LAZY,
                    ),
                )?,
                Grammar::new(
                    "street-number",
                    &format!(
                        r"^{greedy}\s+{num}$",
                        greedy = fragments::STREET_GREEDY,
                        num = fragments::BUILDING_NUM,
                    ),
                )?,
            ],
            po_box: compile("nl-po-box", r"(?i)\bpostbus\s*(?P<num>\d+)\b")?,
        })
    }
}

impl CountryParser for Netherlands {
    fn code(&self) -> &'static str {
        "NL"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn extract_po_box(&self, line: &str) -> (String, Option<String>) {
        strip_po_box(&self.po_box, line)
    }

    fn ridiculous(&self, components: &ParsedComponents, address: &Address) -> bool {
        // A street equal to the PO box keyword means the marker slipped past
        // extraction (casing variants, stray punctuation).
        if components
            .street
            .as_deref()
            .is_some_and(|s| self.is_po_box_token(s))
        {
            return true;
        }
        street_not_in_lines(components, address)
    }

    fn is_po_box_token(&self, token: &str) -> bool {
        token.eq_ignore_ascii_case("postbus")
    }

    fn is_street_suffix(&self, token: &str) -> bool {
        let lowered = token.to_lowercase();
        STREET_SUFFIXES.contains(lowered.as_str())
            || STREET_SUFFIXES.iter().any(|s| lowered.ends_with(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(line1: &str) -> Address {
        Address {
            address1: Some(line1.into()),
            country_code: "NL".into(),
            ..Default::default()
        }
    }

    #[test]
    fn postbus_extraction() {
        let parser = Netherlands::new().expect("grammar compiles");
        let (remaining, num) = parser.extract_po_box("Postbus 123");
        assert_eq!(remaining, "");
        assert_eq!(num.as_deref(), Some("123"));

        let (untouched, none) = parser.extract_po_box("Kerkstraat 12");
        assert_eq!(untouched, "Kerkstraat 12");
        assert_eq!(none, None);
    }

    #[test]
    fn house_number_addition() {
        let parser = Netherlands::new().expect("grammar compiles");
        let parsings = parser.parse(&address("Kerkstraat 12 II"));
        assert!(parsings.iter().any(|p| {
            p.street.as_deref() == Some("Kerkstraat")
                && p.building_num.as_deref() == Some("12")
                && p.unit_num.as_deref() == Some("II")
        }));
    }

    #[test]
    fn suffix_classifier_matches_compounds() {
        let parser = Netherlands::new().expect("grammar compiles");
        assert!(parser.is_street_suffix("straat"));
        assert!(parser.is_street_suffix("Kerkstraat"));
        assert!(!parser.is_street_suffix("postbus"));
    }
}
