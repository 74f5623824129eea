//! WaterKind - entity categories, priority order, qualifier vocabulary
//!
//! Every gazetteer phrase is registered under one of these kinds. The kind
//! carries the three pieces of static knowledge the resolution pipeline
//! needs:
//! - the priority rank used as the last-resort tie-break,
//! - the qualifier words that can confirm a match of this kind,
//! - whether the kind participates in the short-abbreviation carve-out.

use serde::{Deserialize, Serialize};

// ==================== TYPE DEFINITIONS ====================

/// Category of a matched geographic entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaterKind {
    Ocean,
    Country,
    CanadianProvince,
    River,
    UsState,
    Lake,
    Mountain,
    DrainageBasin,
    Watercourse,
    /// Generic fallback for entries registered under an unknown label
    WaterBody,
    ChineseProvince,
}

/// Priority ranking, most preferred first. Index = `WaterKind::priority`.
pub const PRIORITY_ORDER: [WaterKind; 11] = [
    WaterKind::Ocean,
    WaterKind::Country,
    WaterKind::CanadianProvince,
    WaterKind::River,
    WaterKind::UsState,
    WaterKind::Lake,
    WaterKind::Mountain,
    WaterKind::DrainageBasin,
    WaterKind::Watercourse,
    WaterKind::WaterBody,
    WaterKind::ChineseProvince,
];

impl WaterKind {
    pub fn as_label(&self) -> &'static str {
        match self {
            WaterKind::Ocean => "OCEAN",
            WaterKind::Country => "COUNTRY",
            WaterKind::CanadianProvince => "CANADIAN_PROVINCE",
            WaterKind::River => "RIVER",
            WaterKind::UsState => "US_STATE",
            WaterKind::Lake => "LAKE",
            WaterKind::Mountain => "MOUNTAIN",
            WaterKind::DrainageBasin => "DRAINAGE_BASIN",
            WaterKind::Watercourse => "WATERCOURSE",
            WaterKind::WaterBody => "WATER_BODY",
            WaterKind::ChineseProvince => "CHINESE_PROVINCE",
        }
    }

    /// Resolve a label to a kind. Unknown labels fall back to the generic
    /// WATER_BODY category instead of failing.
    pub fn from_label(label: &str) -> WaterKind {
        match label.to_uppercase().as_str() {
            "OCEAN" => WaterKind::Ocean,
            "COUNTRY" => WaterKind::Country,
            "CANADIAN_PROVINCE" => WaterKind::CanadianProvince,
            "RIVER" => WaterKind::River,
            "US_STATE" => WaterKind::UsState,
            "LAKE" => WaterKind::Lake,
            "MOUNTAIN" => WaterKind::Mountain,
            "DRAINAGE_BASIN" => WaterKind::DrainageBasin,
            "WATERCOURSE" => WaterKind::Watercourse,
            "CHINESE_PROVINCE" => WaterKind::ChineseProvince,
            _ => WaterKind::WaterBody,
        }
    }

    /// Rank in [`PRIORITY_ORDER`]; lower wins ties.
    pub fn priority(&self) -> u8 {
        match self {
            WaterKind::Ocean => 0,
            WaterKind::Country => 1,
            WaterKind::CanadianProvince => 2,
            WaterKind::River => 3,
            WaterKind::UsState => 4,
            WaterKind::Lake => 5,
            WaterKind::Mountain => 6,
            WaterKind::DrainageBasin => 7,
            WaterKind::Watercourse => 8,
            WaterKind::WaterBody => 9,
            WaterKind::ChineseProvince => 10,
        }
    }

    /// Adjacent words that confirm a match of this kind: the type name in
    /// singular/plural plus domain synonyms. Administrative kinds carry no
    /// qualifier words; their names are never stitched to a neighbor.
    pub fn qualifier_words(&self) -> &'static [&'static str] {
        match self {
            WaterKind::Ocean => &["ocean", "oceans"],
            WaterKind::River => &["river", "rivers"],
            WaterKind::Lake => &["lake", "lakes"],
            WaterKind::Mountain => &["mountain", "mountains", "mount", "mt", "mt."],
            WaterKind::DrainageBasin => &["basin", "basins"],
            WaterKind::Watercourse => &["watercourse", "watercourses"],
            _ => &[],
        }
    }

    /// Kinds whose gazetteers contain postal-style short codes ("AB",
    /// "NY"). Short matches of these kinds get the upper-case gate in the
    /// candidate filter.
    pub fn abbreviation_eligible(&self) -> bool {
        matches!(self, WaterKind::CanadianProvince | WaterKind::UsState)
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matches_canonical_order() {
        for (rank, kind) in PRIORITY_ORDER.iter().enumerate() {
            assert_eq!(kind.priority() as usize, rank);
        }
    }

    #[test]
    fn test_label_round_trip() {
        for kind in PRIORITY_ORDER {
            assert_eq!(WaterKind::from_label(kind.as_label()), kind);
        }
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(WaterKind::from_label("GLACIER"), WaterKind::WaterBody);
        assert_eq!(WaterKind::from_label(""), WaterKind::WaterBody);
    }

    #[test]
    fn test_label_parse_is_case_insensitive() {
        assert_eq!(WaterKind::from_label("river"), WaterKind::River);
        assert_eq!(
            WaterKind::from_label("canadian_province"),
            WaterKind::CanadianProvince
        );
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&WaterKind::CanadianProvince).unwrap();
        assert_eq!(json, "\"CANADIAN_PROVINCE\"");
        let kind: WaterKind = serde_json::from_str("\"US_STATE\"").unwrap();
        assert_eq!(kind, WaterKind::UsState);
    }

    #[test]
    fn test_qualifier_words() {
        assert!(WaterKind::Mountain.qualifier_words().contains(&"mt."));
        assert!(WaterKind::Lake.qualifier_words().contains(&"lakes"));
        assert!(WaterKind::CanadianProvince.qualifier_words().is_empty());
        assert!(WaterKind::Country.qualifier_words().is_empty());
    }

    #[test]
    fn test_abbreviation_eligibility() {
        assert!(WaterKind::UsState.abbreviation_eligible());
        assert!(WaterKind::CanadianProvince.abbreviation_eligible());
        assert!(!WaterKind::Lake.abbreviation_eligible());
        assert!(!WaterKind::ChineseProvince.abbreviation_eligible());
    }
}
