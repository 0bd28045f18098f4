use serde::{Deserialize, Serialize};

/// Names of the components a grammar may capture.
///
/// `Si`, `Gu` and `Dong` are the Korean administrative divisions; other
/// countries leave them unset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Street,
    BuildingNum,
    UnitNum,
    UnitType,
    BuildingName,
    PoBox,
    Direction,
    City,
    Si,
    Gu,
    Dong,
}

impl Field {
    /// The named capture group a grammar uses for this field.
    pub fn capture_name(self) -> &'static str {
        match self {
            Field::Street => "street",
            Field::BuildingNum => "building_num",
            Field::UnitNum => "unit_num",
            Field::UnitType => "unit_type",
            Field::BuildingName => "building_name",
            Field::PoBox => "po_box",
            Field::Direction => "direction",
            Field::City => "city",
            Field::Si => "si",
            Field::Gu => "gu",
            Field::Dong => "dong",
        }
    }

    pub const ALL: [Field; 11] = [
        Field::Street,
        Field::BuildingNum,
        Field::UnitNum,
        Field::UnitType,
        Field::BuildingName,
        Field::PoBox,
        Field::Direction,
        Field::City,
        Field::Si,
        Field::Gu,
        Field::Dong,
    ];
}

/// One plausible structured interpretation of the input lines.
///
/// Immutable once produced by the parser; comparisons hash and deduplicate
/// interpretations, so equality is over all captured values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ParsedComponents {
    pub street: Option<String>,
    pub building_num: Option<String>,
    pub unit_num: Option<String>,
    pub unit_type: Option<String>,
    pub building_name: Option<String>,
    pub po_box: Option<String>,
    pub direction: Option<String>,
    pub city: Option<String>,
    pub si: Option<String>,
    pub gu: Option<String>,
    pub dong: Option<String>,
}

impl ParsedComponents {
    /// Generic accessor used by the orchestration layer.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Street => self.street.as_deref(),
            Field::BuildingNum => self.building_num.as_deref(),
            Field::UnitNum => self.unit_num.as_deref(),
            Field::UnitType => self.unit_type.as_deref(),
            Field::BuildingName => self.building_name.as_deref(),
            Field::PoBox => self.po_box.as_deref(),
            Field::Direction => self.direction.as_deref(),
            Field::City => self.city.as_deref(),
            Field::Si => self.si.as_deref(),
            Field::Gu => self.gu.as_deref(),
            Field::Dong => self.dong.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub(crate) fn from_captures(caps: &regex::Captures<'_>) -> Self {
        let take = |field: Field| {
            caps.name(field.capture_name())
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            street: take(Field::Street),
            building_num: take(Field::BuildingNum),
            unit_num: take(Field::UnitNum),
            unit_type: take(Field::UnitType),
            building_name: take(Field::BuildingName),
            po_box: take(Field::PoBox),
            direction: take(Field::Direction),
            city: take(Field::City),
            si: take(Field::Si),
            gu: take(Field::Gu),
            dong: take(Field::Dong),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_components() {
        let components = ParsedComponents::default();
        assert!(components.is_empty());
        assert_eq!(components.get(Field::Street), None);
    }

    #[test]
    fn generic_accessor_mirrors_fields() {
        let components = ParsedComponents {
            street: Some("Hauptstraße".into()),
            building_num: Some("137".into()),
            ..Default::default()
        };
        assert_eq!(components.get(Field::Street), Some("Hauptstraße"));
        assert_eq!(components.get(Field::BuildingNum), Some("137"));
        assert!(!components.is_empty());
    }
}
