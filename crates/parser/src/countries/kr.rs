use regex::Regex;

use crate::base::CountryParser;
use crate::error::ParserError;
use crate::grammar::Grammar;

use super::{compile, strip_po_box};

/// South Korea. Road-name addresses nest administrative divisions (city 시,
/// district 구, neighborhood 동) before a street ending in 로 or 길 and a
/// building number that may carry a hyphenated sub-number. The older
/// lot-number style (동 + number) is kept as a second layout.
pub struct SouthKorea {
    grammars: Vec<Grammar>,
    po_box: Regex,
}

impl SouthKorea {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: vec![
                Grammar::new(
                    "districts-street-number",
                    r"^(?:(?P<si>\S+시)\s+)?(?:(?P<gu>\S+구)\s+)?(?:(?P<dong>\S+동)\s+)?(?P<street>\S+(?:로|길))\s+(?P<building_num>\d+(?:-\d+)?)$",
                )?,
                Grammar::new(
                    "districts-lot-number",
                    r"^(?:(?P<si>\S+시)\s+)?(?:(?P<gu>\S+구)\s+)?(?P<dong>\S+동)\s+(?P<building_num>\d+(?:-\d+)?)$",
                )?,
            ],
            po_box: compile("kr-po-box", r"(?i)사서함\s*(?P<num>\d+)")?,
        })
    }
}

impl CountryParser for SouthKorea {
    fn code(&self) -> &'static str {
        "KR"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    fn extract_po_box(&self, line: &str) -> (String, Option<String>) {
        strip_po_box(&self.po_box, line)
    }

    fn is_street_suffix(&self, token: &str) -> bool {
        token.ends_with('로') || token.ends_with('길')
    }
}
