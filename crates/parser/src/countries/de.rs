use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::address::Address;
use crate::base::CountryParser;
use crate::components::ParsedComponents;
use crate::error::ParserError;
use crate::grammar::Grammar;

use super::{compile, germanic_grammars, street_not_in_lines, strip_po_box};

static STREET_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "straße", "strasse", "str", "weg", "allee", "platz", "gasse", "ring", "damm", "ufer",
        "chaussee",
    ]
    .into_iter()
    .collect()
});

/// Germany. Street-first layouts, `Postfach` PO boxes (whose numbers are
/// conventionally space-grouped, `Postfach 10 01 10`).
pub struct Germany {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl Germany {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: germanic_grammars()?,
            po_box: compile(
                "de-po-box",
                r"(?i)\bpostfach\s+(?P<num>\d+(?:\s+\d+)*)\b",
            )?,
        })
    }
}

impl CountryParser for Germany {
    fn code(&self) -> &'static str {
        "DE"
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
        STREET_SUFFIXES.contains(token.to_lowercase().as_str())
    }
}
