use crate::base::CountryParser;
use crate::error::ParserError;
use crate::grammar::{fragments, Grammar};

/// Fallback parser for countries without dedicated grammars: tries the
/// street-first and number-first world orders and nothing else. No PO box
/// handling, no plausibility overrides.
pub struct Generic {
    grammars: Vec<Grammar>,
}

impl Generic {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            grammars: vec![
                Grammar::new(
                    "street-number",
                    &format!(
                        r"^{greedy}\s+{num}$",
                        greedy = fragments::STREET_GREEDY,
                        num = fragments::BUILDING_NUM,
                    ),
                )?,
                Grammar::new(
                    "number-street",
                    &format!(
                        r"^{num}\s+(?P<street>\D\S.*)$",
                        num = fragments::BUILDING_NUM_SIMPLE,
                    ),
                )?,
            ],
        })
    }
}

impl CountryParser for Generic {
    fn code(&self) -> &'static str {
        "ZZ"
    }

    fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }
}
