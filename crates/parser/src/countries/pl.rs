use regex::Regex;

use crate::address::Address;
use crate::base::CountryParser;
use crate::components::ParsedComponents;
use crate::error::ParserError;
use crate::grammar::Grammar;

use super::{compile, street_not_in_lines, strip_po_box};

/// Poland. Streets carry a leading type abbreviation (`ul.`, `al.`, `pl.`,
/// `os.`) and flat numbers follow the building number after a slash
/// (`ul. Mickiewicza 5/7`). Rural addresses have no street at all; the
/// locality name doubles as one, which the Polish exclusion rule downstream
/// leans on.
pub struct Poland {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl Poland {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: vec![
                Grammar::new(
                    "prefixed-street-number-unit",
                    r"(?i)^(?:ul\.?|ulica|al\.?|aleja|pl\.?|plac|os\.?|osiedle)\s+(?P<street>\S.*?)\s+(?P<building_num>\d+[a-z]?)(?:\s*/\s*(?P<unit_num>\d+[a-z]?))?$",
                )?,
                Grammar::new(
                    "street-number-unit",
                    r"(?i)^(?P<street>\S.*?)\s+(?P<building_num>\d+[a-z]?)(?:\s*/\s*(?P<unit_num>\d+[a-z]?))?$",
                )?,
            ],
            po_box: compile(
                "pl-po-box",
                r"(?i)\bskr(?:ytka)?\.?\s*poczt(?:owa)?\.?\s*(?P<num>\d+)\b",
            )?,
        })
    }
}

impl CountryParser for Poland {
    fn code(&self) -> &'static str {
        "PL"
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
        matches!(
            token.to_lowercase().trim_end_matches('.'),
            "skr" | "skrytka" | "poczt" | "pocztowa"
        )
    }

    fn is_street_suffix(&self, token: &str) -> bool {
        matches!(
            token.to_lowercase().trim_end_matches('.'),
            "ul" | "ulica" | "al" | "aleja" | "pl" | "plac" | "os" | "osiedle"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(line1: &str) -> Address {
        Address {
            address1: Some(line1.into()),
            country_code: "PL".into(),
            ..Default::default()
        }
    }

    #[test]
    fn prefixed_street_with_flat() {
        let parser = Poland::new().expect("grammar compiles");
        let parsings = parser.parse(&address("ul. Mickiewicza 5/7"));
        assert!(parsings.iter().any(|p| {
            p.street.as_deref() == Some("Mickiewicza")
                && p.building_num.as_deref() == Some("5")
                && p.unit_num.as_deref() == Some("7")
        }));
    }

    #[test]
    fn unprefixed_rural_street() {
        let parser = Poland::new().expect("grammar compiles");
        let parsings = parser.parse(&address("Zalesie 12"));
        assert!(parsings.iter().any(|p| {
            p.street.as_deref() == Some("Zalesie") && p.building_num.as_deref() == Some("12")
        }));
    }

    #[test]
    fn skrytka_pocztowa() {
        let parser = Poland::new().expect("grammar compiles");
        let (remaining, num) = parser.extract_po_box("skr. poczt. 17");
        assert_eq!(remaining, "");
        assert_eq!(num.as_deref(), Some("17"));
    }
}
