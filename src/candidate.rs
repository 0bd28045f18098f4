//! Reference-store candidate records.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Odd/even restriction on a building number range. Street sides are often
/// stored as separate parity-restricted ranges.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    #[default]
    Any,
    Odd,
    Even,
}

/// An inclusive numeric range with optional parity restriction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumericRange {
    pub min: u32,
    pub max: u32,
    pub parity: Parity,
}

impl NumericRange {
    /// Parse the compact stored form: `"137"`, `"1-25"`, `"2-40 even"`.
    /// `None` for anything malformed; callers log and degrade.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (range_part, parity) = match raw.rsplit_once(' ') {
            Some((head, "odd")) => (head, Parity::Odd),
            Some((head, "even")) => (head, Parity::Even),
            _ => (raw, Parity::Any),
        };
        let (min, max) = match range_part.split_once('-') {
            Some((lo, hi)) => (lo.trim().parse().ok()?, hi.trim().parse().ok()?),
            None => {
                let single: u32 = range_part.parse().ok()?;
                (single, single)
            }
        };
        if min > max {
            return None;
        }
        Some(Self { min, max, parity })
    }

    pub fn contains(&self, n: u32) -> bool {
        if n < self.min || n > self.max {
            return false;
        }
        match self.parity {
            Parity::Any => true,
            Parity::Odd => n % 2 == 1,
            Parity::Even => n % 2 == 0,
        }
    }
}

/// One reference address row being evaluated as a potential match.
///
/// Mirrors the reference data store shape; only the text fields matter to
/// the comparison core, the rest ride along for the exclusion rules and the
/// suggestion layer. `city` is an alias list; reference rows routinely know
/// several spellings of the same locality.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateRecord {
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    pub country_code: String,
    #[serde(default)]
    pub province_code: Option<String>,
    #[serde(default)]
    pub region1: Option<String>,
    #[serde(default)]
    pub region2: Option<String>,
    #[serde(default)]
    pub region3: Option<String>,
    #[serde(default)]
    pub region4: Option<String>,
    /// City alias list; the first entry is the display form.
    #[serde(default)]
    pub city: Vec<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
    /// Building number ranges in stored compact form (`"1-25 odd"`).
    #[serde(default)]
    pub building_ranges: Vec<String>,
    /// Unit number ranges in the same form.
    #[serde(default)]
    pub unit_ranges: Vec<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl CandidateRecord {
    /// Building ranges with malformed entries dropped. A bad row is worth a
    /// warning but must not abort the comparison of the remaining fields.
    pub fn parsed_building_ranges(&self) -> Vec<NumericRange> {
        self.building_ranges
            .iter()
            .filter_map(|raw| {
                let parsed = NumericRange::parse(raw);
                if parsed.is_none() {
                    warn!(range = raw.as_str(), "skipping malformed building range");
                }
                parsed
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_number() {
        let range = NumericRange::parse("137").expect("well-formed");
        assert!(range.contains(137));
        assert!(!range.contains(138));
    }

    #[test]
    fn parse_range_with_parity() {
        let range = NumericRange::parse("2-40 even").expect("well-formed");
        assert!(range.contains(2));
        assert!(range.contains(40));
        assert!(!range.contains(3));
        assert!(!range.contains(42));
    }

    #[test]
    fn malformed_ranges_are_none() {
        assert_eq!(NumericRange::parse("abc"), None);
        assert_eq!(NumericRange::parse("9-1"), None);
        assert_eq!(NumericRange::parse(""), None);
    }

    #[test]
    fn malformed_rows_are_dropped_not_fatal() {
        let candidate = CandidateRecord {
            country_code: "DE".into(),
            building_ranges: vec!["1-25".into(), "garbage".into(), "27".into()],
            ..Default::default()
        };
        let ranges = candidate.parsed_building_ranges();
        assert_eq!(ranges.len(), 2);
    }
}
