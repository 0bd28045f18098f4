//! Per-country parsers.
//!
//! Grammar data lives here, one module per country, composed from the shared
//! fragments in [`crate::grammar::fragments`]. The Germanic trio (DE, AT, CH)
//! share a grammar list; everything else declares its own layouts.

mod at;
mod au;
mod ch;
mod de;
mod fr;
mod generic;
mod kr;
mod nl;
mod pl;
mod us;

pub use at::Austria;
pub use au::Australia;
pub use ch::Switzerland;
pub use de::Germany;
pub use fr::France;
pub use generic::Generic;
pub use kr::SouthKorea;
pub use nl::Netherlands;
pub use pl::Poland;
pub use us::UnitedStates;

use regex::Regex;

use crate::address::Address;
use crate::components::ParsedComponents;
use crate::error::ParserError;
use crate::grammar::{fragments, Grammar};

/// Compile a non-grammar helper pattern (PO box markers and the like) with
/// the same typed error surface as grammar compilation.
pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<Regex, ParserError> {
    Regex::new(pattern).map_err(|source| ParserError::InvalidGrammar { name, source })
}

/// Street-first layouts shared by the Germanic countries.
///
/// Order matters: the unit-bearing grammar must run first so `… 1 2` yields
/// the street/1/2 reading in addition to the greedy street-absorbs-digit one.
pub(crate) fn germanic_grammars() -> Result<Vec<Grammar>, ParserError> {
    Ok(vec![
        Grammar::new(
            "street-number-unit",
            &format!(
                r"^{lazy}\s+{num}\s+{unit}$",
                lazy = fragments::STREET_LAZY,
                num = fragments::BUILDING_NUM_SIMPLE,
                unit = fragments::UNIT_NUM,
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
    ])
}

/// Shared plausibility check: a street capture that is not a substring of
/// either input line means the regex matched across the line join.
pub(crate) fn street_not_in_lines(components: &ParsedComponents, address: &Address) -> bool {
    let Some(street) = components.street.as_deref() else {
        return false;
    };
    let in_line = |line: Option<&str>| line.is_some_and(|l| l.contains(street));
    !(in_line(address.line1()) || in_line(address.line2()))
}

/// Remove the first match of `marker` from `line`, returning the remainder
/// and the captured `num` group if present.
pub(crate) fn strip_po_box(marker: &Regex, line: &str) -> (String, Option<String>) {
    let Some(caps) = marker.captures(line) else {
        return (line.to_string(), None);
    };
    let Some(whole) = caps.get(0) else {
        return (line.to_string(), None);
    };
    let number = caps
        .name("num")
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());
    let mut remaining = String::with_capacity(line.len());
    remaining.push_str(&line[..whole.start()]);
    remaining.push(' ');
    remaining.push_str(&line[whole.end()..]);
    (remaining.trim().to_string(), number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_po_box_removes_marker() {
        let marker = compile("test-po-box", r"(?i)\bpostbus\s*(?P<num>\d+)\b").expect("compiles");
        let (remaining, num) = strip_po_box(&marker, "Postbus 123");
        assert_eq!(remaining, "");
        assert_eq!(num.as_deref(), Some("123"));
    }

    #[test]
    fn strip_po_box_without_marker_is_identity() {
        let marker = compile("test-po-box", r"(?i)\bpostbus\s*(?P<num>\d+)\b").expect("compiles");
        let (remaining, num) = strip_po_box(&marker, "Kerkstraat 12");
        assert_eq!(remaining, "Kerkstraat 12");
        assert_eq!(num, None);
    }

    #[test]
    fn strip_po_box_keeps_surrounding_text() {
        let marker = compile("test-po-box", r"(?i)\bpostbus\s*(?P<num>\d+)\b").expect("compiles");
        let (remaining, num) = strip_po_box(&marker, "Kerkstraat 12, Postbus 99");
        assert_eq!(remaining, "Kerkstraat 12,");
        assert_eq!(num.as_deref(), Some("99"));
    }
}
