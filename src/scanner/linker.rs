//! Entity linker - Wikidata identifier attachment
//!
//! A single exact lookup of the resolved text (lower-cased) in the
//! gazetteer's identifier table. A miss is a valid outcome: the entity
//! stays unlinked.

use super::candidate::CandidateMatch;
use super::gazetteer::Gazetteer;

/// Base URI the identifier is appended to.
pub const WIKIDATA_BASE: &str = "https://www.wikidata.org/wiki/";

/// Look up the external link for a resolved candidate.
pub fn wikilink(gazetteer: &Gazetteer, candidate: &CandidateMatch) -> Option<String> {
    gazetteer
        .identifier(candidate.kind, &candidate.text.to_lowercase())
        .map(|id| format!("{}{}", WIKIDATA_BASE, id))
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::gazetteer::GazetteerEntry;
    use crate::scanner::kind::WaterKind;

    fn candidate(text: &str, kind: WaterKind) -> CandidateMatch {
        CandidateMatch {
            text: text.to_string(),
            start: 0,
            end: 1,
            kind,
            is_qualified: false,
            is_uncommon: true,
            is_proper: true,
        }
    }

    #[test]
    fn test_link_is_base_plus_identifier() {
        let mut gaz = Gazetteer::new();
        gaz.add_entries(
            "RIVER",
            &[GazetteerEntry {
                name: "Amazon".to_string(),
                id: Some("Q3783".to_string()),
            }],
        );
        assert_eq!(
            wikilink(&gaz, &candidate("Amazon", WaterKind::River)),
            Some("https://www.wikidata.org/wiki/Q3783".to_string())
        );
    }

    #[test]
    fn test_lookup_is_kind_scoped() {
        let mut gaz = Gazetteer::new();
        gaz.add_entries(
            "RIVER",
            &[GazetteerEntry {
                name: "Mississippi".to_string(),
                id: Some("Q1497".to_string()),
            }],
        );
        assert_eq!(wikilink(&gaz, &candidate("Mississippi", WaterKind::Lake)), None);
    }

    #[test]
    fn test_missing_identifier_is_not_an_error() {
        let mut gaz = Gazetteer::new();
        gaz.add_entries(
            "RIVER",
            &[GazetteerEntry {
                name: "Nile".to_string(),
                id: None,
            }],
        );
        assert_eq!(wikilink(&gaz, &candidate("Nile", WaterKind::River)), None);
    }
}
