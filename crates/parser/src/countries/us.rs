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
        "st", "street", "ave", "avenue", "blvd", "boulevard", "rd", "road", "dr", "drive", "ln",
        "lane", "ct", "court", "pl", "place", "ter", "terrace", "pkwy", "parkway", "hwy",
        "highway", "way", "cir", "circle", "sq", "square", "trl", "trail",
    ]
    .into_iter()
    .collect()
});

static UNIT_DESIGNATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "apt", "apartment", "suite", "ste", "unit", "bldg", "building", "fl", "floor", "rm",
        "room", "dept", "lot", "#",
    ]
    .into_iter()
    .collect()
});

/// United States. Number-first layouts with optional directional and a
/// trailing secondary unit, `PO Box` extraction.
pub struct UnitedStates {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl UnitedStates {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: vec![Grammar::new(
                "number-direction-street-unit",
                r"(?i)^(?P<building_num>\d+[a-z]?)\s+(?:(?P<direction>n|s|e|w|ne|nw|se|sw|north|south|east|west)\.?\s+)?(?P<street>\S.*?)(?:\s+(?P<unit_type>apt|apartment|suite|ste|unit|bldg|building|fl|floor|rm|room|dept|#)\.?\s*(?P<unit_num>[a-z0-9-]+))?$",
            )?],
            po_box: compile("us-po-box", r"(?i)\bp\.?\s*o\.?\s*box\s*(?P<num>\d+)\b")?,
        })
    }
}

impl CountryParser for UnitedStates {
    fn code(&self) -> &'static str {
        "US"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn extract_po_box(&self, line: &str) -> (String, Option<String>) {
        strip_po_box(&self.po_box, line)
    }

    fn ridiculous(&self, components: &ParsedComponents, address: &Address) -> bool {
        if let Some(street) = components.street.as_deref() {
            // An all-digit street means the number regex split a numeric run
            // in two; no US street is digits alone.
            if street.chars().all(|c| c.is_ascii_digit()) {
                return true;
            }
            // A bare suffix or unit designator is not a street name.
            if self.is_street_suffix(street) || self.is_secondary_unit_designator(street) {
                return true;
            }
        }
        street_not_in_lines(components, address)
    }

    fn is_po_box_token(&self, token: &str) -> bool {
        matches!(token.to_lowercase().as_str(), "po" | "pobox" | "box")
    }

    fn is_street_suffix(&self, token: &str) -> bool {
        STREET_SUFFIXES.contains(token.to_lowercase().trim_end_matches('.'))
    }

    fn is_secondary_unit_designator(&self, token: &str) -> bool {
        UNIT_DESIGNATORS.contains(token.to_lowercase().trim_end_matches('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(line1: &str) -> Address {
        Address {
            address1: Some(line1.into()),
            country_code: "US".into(),
            ..Default::default()
        }
    }

    #[test]
    fn plain_number_street() {
        let parser = UnitedStates::new().expect("grammar compiles");
        let parsings = parser.parse(&address("123 Main St"));
        assert!(parsings.iter().any(|p| {
            p.building_num.as_deref() == Some("123") && p.street.as_deref() == Some("Main St")
        }));
    }

    #[test]
    fn directional_and_unit() {
        let parser = UnitedStates::new().expect("grammar compiles");
        let parsings = parser.parse(&address("123 N Main St Apt 4B"));
        assert!(parsings.iter().any(|p| {
            p.direction.as_deref() == Some("N")
                && p.street.as_deref() == Some("Main St")
                && p.unit_type.as_deref() == Some("Apt")
                && p.unit_num.as_deref() == Some("4B")
        }));
    }

    #[test]
    fn po_box_line() {
        let parser = UnitedStates::new().expect("grammar compiles");
        let parsings = parser.parse(&address("PO Box 1012"));
        assert_eq!(parsings.len(), 1);
        assert_eq!(parsings[0].po_box.as_deref(), Some("1012"));
    }

    #[test]
    fn numeric_street_capture_rejected() {
        let parser = UnitedStates::new().expect("grammar compiles");
        // "123 456" would otherwise parse as number + all-digit street.
        assert!(parser.parse(&address("123 456")).is_empty());
    }

    #[test]
    fn classifiers() {
        let parser = UnitedStates::new().expect("grammar compiles");
        assert!(parser.is_street_suffix("St"));
        assert!(parser.is_street_suffix("Ave."));
        assert!(parser.is_secondary_unit_designator("Apt"));
        assert!(!parser.is_secondary_unit_designator("Main"));
    }
}
