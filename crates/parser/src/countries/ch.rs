use regex::Regex;

use crate::address::Address;
use crate::base::CountryParser;
use crate::components::ParsedComponents;
use crate::error::ParserError;
use crate::grammar::Grammar;

use super::{compile, germanic_grammars, street_not_in_lines, strip_po_box};

/// Switzerland. Germanic street-first layouts with trilingual PO box
/// markers; `Postfach` frequently appears without a number, in which case
/// the marker is stripped and no box number is reported.
pub struct Switzerland {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl Switzerland {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: germanic_grammars()?,
            po_box: compile(
                "ch-po-box",
                r"(?i)\b(?:postfach|case postale|casella postale)\b(?:\s*(?P<num>\d+))?",
            )?,
        })
    }
}

impl CountryParser for Switzerland {
    fn code(&self) -> &'static str {
        "CH"
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
            token.to_lowercase().as_str(),
            "postfach" | "case" | "casella" | "postale"
        )
    }

    fn is_street_suffix(&self, token: &str) -> bool {
        matches!(
            token.to_lowercase().as_str(),
            "strasse" | "straße" | "str" | "weg" | "gasse" | "platz" | "rue" | "via" | "chemin"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numberless_postfach_strips_marker_only() {
        let parser = Switzerland::new().expect("grammar compiles");
        let (remaining, num) = parser.extract_po_box("Bahnhofstrasse 1, Postfach");
        assert_eq!(remaining, "Bahnhofstrasse 1,");
        assert_eq!(num, None);
    }

    #[test]
    fn french_marker_recognized() {
        let parser = Switzerland::new().expect("grammar compiles");
        let (remaining, num) = parser.extract_po_box("Case postale 300");
        assert_eq!(remaining, "");
        assert_eq!(num.as_deref(), Some("300"));
    }
}
