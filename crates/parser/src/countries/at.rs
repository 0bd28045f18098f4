use regex::Regex;

use crate::address::Address;
use crate::base::CountryParser;
use crate::components::ParsedComponents;
use crate::error::ParserError;
use crate::grammar::Grammar;

use super::{compile, germanic_grammars, street_not_in_lines, strip_po_box};

/// Austria. Shares the Germanic street-first layouts; staircase/door numbers
/// routinely trail the building number, which is why the unit-bearing grammar
/// runs first and ambiguity with digit-ended street names is preserved.
pub struct Austria {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl Austria {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: germanic_grammars()?,
            po_box: compile("at-po-box", r"(?i)\bpostfach\s+(?P<num>\d+)\b")?,
        })
    }
}

impl CountryParser for Austria {
    fn code(&self) -> &'static str {
        "AT"
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
        token.eq_ignore_ascii_case("postfach")
    }

    fn is_street_suffix(&self, token: &str) -> bool {
        matches!(
            token.to_lowercase().as_str(),
            "straße" | "strasse" | "str" | "weg" | "gasse" | "platz" | "allee" | "ring"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_separated_door_number() {
        let parser = Austria::new().expect("grammar compiles");
        let address = Address {
            address1: Some("Grinzinger Allee 5/12".into()),
            country_code: "AT".into(),
            ..Default::default()
        };
        let parsings = parser.parse(&address);
        assert!(parsings.iter().any(|p| {
            p.street.as_deref() == Some("Grinzinger Allee")
                && p.building_num.as_deref() == Some("5/12")
        }));
    }
}
