use regex::Regex;

use crate::components::ParsedComponents;
use crate::error::ParserError;

/// One country-specific address layout: a compiled regex whose named capture
/// groups name the components it extracts. Compiled eagerly when the country
/// parser is constructed, then shared read-only.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: &'static str,
    regex: Regex,
}

impl Grammar {
    /// Compile a grammar. Patterns are anchored by convention (`^…$`) and
    /// case-insensitive where the country needs it (`(?i)` in the pattern).
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, ParserError> {
        let regex =
            Regex::new(pattern).map_err(|source| ParserError::InvalidGrammar { name, source })?;
        Ok(Self { name, regex })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the grammar to one prepared line. `None` when the layout does
    /// not fit; captures that matched empty text count as absent.
    pub fn apply(&self, line: &str) -> Option<ParsedComponents> {
        let caps = self.regex.captures(line.trim())?;
        let components = ParsedComponents::from_captures(&caps);
        if components.is_empty() {
            return None;
        }
        Some(components)
    }
}

/// Shared named-capture fragments composed by the country modules.
pub mod fragments {
    /// Lazy street capture: shortest street that lets the rest of the
    /// pattern match. Used when trailing numbers should be peeled off.
    pub const STREET_LAZY: &str = r"(?P<street>\S.*?)";
    /// Greedy street capture: longest street, so a trailing digit run can be
    /// absorbed into the name (`Sonnwiesen Straße 1`).
    pub const STREET_GREEDY: &str = r"(?P<street>\S.*)";
    /// Building number with optional letter or range suffix (`137`, `12a`,
    /// `12-14`).
    pub const BUILDING_NUM: &str = r"(?P<building_num>\d+[a-zA-Z]?(?:\s*[-/]\s*\d+[a-zA-Z]?)?)";
    /// Plain building number, no range form.
    pub const BUILDING_NUM_SIMPLE: &str = r"(?P<building_num>\d+[a-zA-Z]?)";
    /// Unit number: short alphanumeric designation.
    pub const UNIT_NUM: &str = r"(?P<unit_num>\d+[a-zA-Z]?|[a-zA-Z]\d*)";
}
