//! Shared parse driver behind every country parser.

use tracing::debug;

use crate::address::Address;
use crate::components::ParsedComponents;
use crate::grammar::Grammar;

/// Lines longer than this are never fed to the grammars. Keeps regex
/// backtracking and downstream alignment bounded on hostile input.
pub const MAX_LINE_LEN: usize = 200;

/// A country-specific address parser.
///
/// Implementations supply an ordered grammar list plus optional overrides for
/// PO box extraction, plausibility rejection, and token classification. The
/// provided `parse` drives them identically everywhere: pure, restartable,
/// and empty-on-no-match.
pub trait CountryParser: Send + Sync {
    /// ISO 3166-1 alpha-2 code this parser serves.
    fn code(&self) -> &'static str;

    /// Grammars in match-priority order.
    fn grammars(&self) -> &[Grammar];

    /// Strip a country-specific PO box marker from the line, returning the
    /// remaining line and the box number. Default: no-op.
    fn extract_po_box(&self, line: &str) -> (String, Option<String>) {
        (line.to_string(), None)
    }

    /// Reject a grammar match whose captures are semantically unsound for
    /// this input (the regex over-matched). Default: never rejects.
    fn ridiculous(&self, _components: &ParsedComponents, _address: &Address) -> bool {
        false
    }

    /// Whether a token is this country's PO box keyword.
    fn is_po_box_token(&self, _token: &str) -> bool {
        false
    }

    /// Whether a token is a street suffix for this country.
    fn is_street_suffix(&self, _token: &str) -> bool {
        false
    }

    /// Whether a token designates a secondary unit (apartment, suite, …).
    fn is_secondary_unit_designator(&self, _token: &str) -> bool {
        false
    }

    /// Extract every plausible interpretation of the address lines.
    ///
    /// Applies each grammar to each supported line combination: line 1 on
    /// its own, line 1 joined with line 2, and line 2 on its own when line 1
    /// looks like a building name. Interpretations are deduplicated and
    /// filtered through [`CountryParser::ridiculous`]; the result may hold
    /// several conflicting readings, and may be empty.
    fn parse(&self, address: &Address) -> Vec<ParsedComponents> {
        let mut results: Vec<ParsedComponents> = Vec::new();

        for source in line_sources(address) {
            if source.text.len() > MAX_LINE_LEN {
                continue;
            }
            let (remaining, po_box) = self.extract_po_box(&source.text);

            // A line reduced to its PO box marker is itself an interpretation.
            if remaining.trim().is_empty() {
                if po_box.is_some() {
                    let components = ParsedComponents {
                        po_box,
                        building_name: source.building_name.clone(),
                        ..Default::default()
                    };
                    push_unique(&mut results, components);
                }
                continue;
            }

            for grammar in self.grammars() {
                let Some(mut components) = grammar.apply(&remaining) else {
                    continue;
                };
                if components.po_box.is_none() {
                    components.po_box = po_box.clone();
                }
                if components.building_name.is_none() {
                    components.building_name = source.building_name.clone();
                }
                if self.ridiculous(&components, address) {
                    debug!(
                        country = self.code(),
                        grammar = grammar.name(),
                        "discarded implausible interpretation"
                    );
                    continue;
                }
                push_unique(&mut results, components);
            }
        }

        results
    }
}

struct LineSource {
    text: String,
    building_name: Option<String>,
}

/// The line combinations a parser attempts, in order.
fn line_sources(address: &Address) -> Vec<LineSource> {
    let mut sources = Vec::new();
    let line1 = address.line1();
    let line2 = address.line2();

    if let Some(l1) = line1 {
        sources.push(LineSource {
            text: l1.to_string(),
            building_name: None,
        });
    }
    if let (Some(l1), Some(l2)) = (line1, line2) {
        sources.push(LineSource {
            text: format!("{l1} {l2}"),
            building_name: None,
        });
        // A digit-free first line is usually a building name; the street
        // layout then lives on line 2.
        if looks_like_building_name(l1) {
            sources.push(LineSource {
                text: l2.to_string(),
                building_name: Some(l1.to_string()),
            });
        }
    }

    sources
}

fn looks_like_building_name(line: &str) -> bool {
    !line.chars().any(|c| c.is_ascii_digit())
}

fn push_unique(results: &mut Vec<ParsedComponents>, components: ParsedComponents) {
    if !results.contains(&components) {
        results.push(components);
    }
}
