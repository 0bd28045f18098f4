use serde::{Deserialize, Serialize};

/// Raw address input as supplied by the caller.
///
/// Every field is optional free text except `country_code`, which selects the
/// parser and the comparison policies downstream. `phone` is carried for the
/// callers' sake but never consulted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province_code: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    pub country_code: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Address {
    /// Non-empty trimmed address line 1, if any.
    pub fn line1(&self) -> Option<&str> {
        non_empty(self.address1.as_deref())
    }

    /// Non-empty trimmed address line 2, if any.
    pub fn line2(&self) -> Option<&str> {
        non_empty(self.address2.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_absent() {
        let address = Address {
            address1: Some("  ".into()),
            address2: Some(" Hauptstraße 1 ".into()),
            country_code: "DE".into(),
            ..Default::default()
        };
        assert_eq!(address.line1(), None);
        assert_eq!(address.line2(), Some("Hauptstraße 1"));
    }
}
