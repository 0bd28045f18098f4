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
        "st", "street", "rd", "road", "ave", "avenue", "dr", "drive", "ct", "court", "pde",
        "parade", "cres", "crescent", "hwy", "highway", "tce", "terrace", "pl", "place", "esp",
        "esplanade",
    ]
    .into_iter()
    .collect()
});

static UNIT_DESIGNATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["unit", "apt", "flat", "shop", "suite", "villa", "lot", "u"]
        .into_iter()
        .collect()
});

/// Australia. The `5/12 George St` unit-slash form comes first; `GPO Box`
/// and `PO Box` both occur.
pub struct Australia {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl Australia {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: vec![
                Grammar::new(
                    "unit-slash-number-street",
                    r"(?i)^(?P<unit_num>\d+[a-z]?)\s*/\s*(?P<building_num>\d+[a-z]?)\s+(?P<street>\S.*)$",
                )?,
                Grammar::new(
                    "unit-type-number-street",
                    r"(?i)^(?P<unit_type>unit|apt|flat|shop|suite|villa|lot|u)\s*(?P<unit_num>\d+[a-z]?)[,/\s]+(?P<building_num>\d+[a-z]?)\s+(?P<street>\S.*)$",
                )?,
                Grammar::new(
                    "number-street",
                    r"(?i)^(?P<building_num>\d+[a-z]?(?:\s*-\s*\d+[a-z]?)?)\s+(?P<street>\D\S.*)$",
                )?,
            ],
            po_box: compile("au-po-box", r"(?i)\bg?po\s*box\s*(?P<num>\d+)\b")?,
        })
    }
}

impl CountryParser for Australia {
    fn code(&self) -> &'static str {
        "AU"
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
        matches!(token.to_lowercase().as_str(), "po" | "gpo" | "box")
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
            country_code: "AU".into(),
            ..Default::default()
        }
    }

    #[test]
    fn unit_slash_form() {
        let parser = Australia::new().expect("grammar compiles");
        let parsings = parser.parse(&address("5/12 George St"));
        assert!(parsings.iter().any(|p| {
            p.unit_num.as_deref() == Some("5")
                && p.building_num.as_deref() == Some("12")
                && p.street.as_deref() == Some("George St")
        }));
    }

    #[test]
    fn unit_type_form() {
        let parser = Australia::new().expect("grammar compiles");
        let parsings = parser.parse(&address("Unit 5, 12 George St"));
        assert!(parsings.iter().any(|p| {
            p.unit_type.as_deref() == Some("Unit")
                && p.unit_num.as_deref() == Some("5")
                && p.building_num.as_deref() == Some("12")
                && p.street.as_deref() == Some("George St")
        }));
    }

    #[test]
    fn gpo_box() {
        let parser = Australia::new().expect("grammar compiles");
        let (remaining, num) = parser.extract_po_box("GPO Box 2500");
        assert_eq!(remaining, "");
        assert_eq!(num.as_deref(), Some("2500"));
    }
}
