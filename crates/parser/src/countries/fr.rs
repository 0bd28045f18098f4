use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::address::Address;
use crate::base::CountryParser;
use crate::components::ParsedComponents;
use crate::error::ParserError;
use crate::grammar::Grammar;

use super::{compile, street_not_in_lines, strip_po_box};

static STREET_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "rue", "avenue", "boulevard", "allee", "allée", "chemin", "place", "impasse", "quai",
        "cours", "route",
    ]
    .into_iter()
    .collect()
});

/// France. Number-first layouts with the `bis`/`ter`/`quater` repetition
/// indicators, `BP`/`Boîte postale` PO boxes.
pub struct France {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl France {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: vec![Grammar::new(
                "number-street",
                r"(?i)^(?P<building_num>\d+\s*(?:bis|ter|quater)?)\s*,?\s+(?P<street>\S.*)$",
            )?],
            po_box: compile(
                "fr-po-box",
                r"(?i)\b(?:b\.?\s*p\.?|bo[iî]te\s+postale)\s*(?P<num>\d+)\b",
            )?,
        })
    }
}

impl CountryParser for France {
    fn code(&self) -> &'static str {
        "FR"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn extract_po_box(&self, line: &str) -> (String, Option<String>) {
        strip_po_box(&self.po_box, line)
    }

    fn ridiculous(&self, components: &ParsedComponents, address: &Address) -> bool {
        street_not_in_lines(components, address)
    }

    fn is_po_box_token(&self, token: &str) -> bool {
        matches!(token.to_lowercase().as_str(), "bp" | "boite" | "boîte" | "postale")
    }

    fn is_street_suffix(&self, token: &str) -> bool {
        // French street types lead the name rather than trailing it, but the
        // classifier answers the same question either way.
        STREET_SUFFIXES.contains(token.to_lowercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(line1: &str) -> Address {
        Address {
            address1: Some(line1.into()),
            country_code: "FR".into(),
            ..Default::default()
        }
    }

    #[test]
    fn number_first_layout() {
        let parser = France::new().expect("grammar compiles");
        let parsings = parser.parse(&address("12 Rue de la Paix"));
        assert_eq!(parsings.len(), 1);
        assert_eq!(parsings[0].building_num.as_deref(), Some("12"));
        assert_eq!(parsings[0].street.as_deref(), Some("Rue de la Paix"));
    }

    #[test]
    fn bis_indicator_stays_with_number() {
        let parser = France::new().expect("grammar compiles");
        let parsings = parser.parse(&address("12 bis Rue de la Paix"));
        assert!(parsings.iter().any(|p| {
            p.building_num.as_deref() == Some("12 bis")
                && p.street.as_deref() == Some("Rue de la Paix")
        }));
    }

    #[test]
    fn boite_postale_extraction() {
        let parser = France::new().expect("grammar compiles");
        let (remaining, num) = parser.extract_po_box("BP 52");
        assert_eq!(remaining, "");
        assert_eq!(num.as_deref(), Some("52"));

        let (remaining, num) = parser.extract_po_box("Boîte postale 52");
        assert_eq!(remaining, "");
        assert_eq!(num.as_deref(), Some("52"));
    }
}
