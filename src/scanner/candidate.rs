//! Candidate construction - qualifier stitching and match attributes
//!
//! Turns a raw phrase occurrence into a candidate carrying everything the
//! filter and the disambiguator rank on. Boundary adjustment first:
//! - a qualifier word right after the match extends the span right and
//!   confirms the kind ("Missouri Rivers", "Indian Oceans");
//! - otherwise a qualifier word right before it extends the span left
//!   ("Lake Ontario", "Mt. Everest") - a following qualifier always takes
//!   precedence, only one of the two is ever applied;
//! - otherwise a phrase whose own first or last token is a qualifier word
//!   ("Great Slave Lake") counts as qualified with no boundary change.
//!
//! The attributes are computed from the adjusted span's text: uncommon
//! (not a stop word) and proper-shaped (neither all-upper nor all-lower,
//! spaces ignored).

use regex::Regex;

use super::gazetteer::Gazetteer;
use super::kind::WaterKind;
use super::matcher::RawMatch;
use super::token::Token;

// ==================== TYPE DEFINITIONS ====================

/// A qualifier-adjusted match with its disambiguation attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: WaterKind,
    pub is_qualified: bool,
    pub is_uncommon: bool,
    pub is_proper: bool,
}

impl CandidateMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn priority(&self) -> u8 {
        self.kind.priority()
    }
}

// ==================== MAIN IMPLEMENTATION ====================

/// Builds candidates from raw matches
pub struct QualifierResolver {
    all_upper: Regex,
    all_lower: Regex,
}

impl Default for QualifierResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl QualifierResolver {
    pub fn new() -> Self {
        Self {
            all_upper: Regex::new(r"^[\sA-Z]+$").unwrap(),
            all_lower: Regex::new(r"^[\sa-z]+$").unwrap(),
        }
    }

    /// Adjust boundaries and compute attributes for one raw match.
    pub fn resolve(
        &self,
        raw: RawMatch,
        tokens: &[Token],
        gazetteer: &Gazetteer,
    ) -> CandidateMatch {
        let qualifiers = raw.kind.qualifier_words();
        let is_qualifier =
            |token: &Token| qualifiers.contains(&token.lower().as_str());

        let mut start = raw.start;
        let mut end = raw.end;
        let mut is_qualified = false;

        if end < tokens.len() && is_qualifier(&tokens[end]) {
            end += 1;
            is_qualified = true;
        } else if start > 0 && is_qualifier(&tokens[start - 1]) {
            start -= 1;
            is_qualified = true;
        } else if is_qualifier(&tokens[start]) || is_qualifier(&tokens[end - 1]) {
            is_qualified = true;
        }

        let text = tokens[start..end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let is_uncommon = !gazetteer.is_stop_word(&text.to_lowercase());
        let is_proper =
            !(self.all_upper.is_match(&text) || self.all_lower.is_match(&text));

        CandidateMatch {
            text,
            start,
            end,
            kind: raw.kind,
            is_qualified,
            is_uncommon,
            is_proper,
        }
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::gazetteer::GazetteerEntry;
    use crate::scanner::token::tokenize;

    fn gazetteer() -> Gazetteer {
        let mut gaz = Gazetteer::new();
        gaz.add_entries(
            "LAKE",
            &[GazetteerEntry {
                name: "Ontario".to_string(),
                id: None,
            }],
        );
        gaz.set_stop_words(["the", "is", "a", "an", "or"]);
        gaz
    }

    fn raw(start: usize, end: usize, kind: WaterKind) -> RawMatch {
        RawMatch { start, end, kind }
    }

    #[test]
    fn test_following_qualifier_extends_right() {
        let tokens = tokenize("the Missouri Rivers flood");
        let cand = QualifierResolver::new().resolve(
            raw(1, 2, WaterKind::River),
            &tokens,
            &gazetteer(),
        );
        assert_eq!((cand.start, cand.end), (1, 3));
        assert!(cand.is_qualified);
        assert_eq!(cand.text, "Missouri Rivers");
    }

    #[test]
    fn test_preceding_qualifier_extends_left() {
        let tokens = tokenize("The Lake Ontario is awesome");
        let cand = QualifierResolver::new().resolve(
            raw(2, 3, WaterKind::Lake),
            &tokens,
            &gazetteer(),
        );
        assert_eq!((cand.start, cand.end), (1, 3));
        assert!(cand.is_qualified);
        assert_eq!(cand.text, "Lake Ontario");
    }

    #[test]
    fn test_following_beats_preceding() {
        // Qualifiers on both sides: only the right extension applies.
        let tokens = tokenize("lake Ontario lake");
        let cand = QualifierResolver::new().resolve(
            raw(1, 2, WaterKind::Lake),
            &tokens,
            &gazetteer(),
        );
        assert_eq!((cand.start, cand.end), (1, 3));
        assert!(cand.is_qualified);
    }

    #[test]
    fn test_self_qualified_phrase() {
        let tokens = tokenize("Is Great Slave Lake Ontario related?");
        let cand = QualifierResolver::new().resolve(
            raw(1, 4, WaterKind::Lake),
            &tokens,
            &gazetteer(),
        );
        assert_eq!((cand.start, cand.end), (1, 4), "no boundary change");
        assert!(cand.is_qualified, "own trailing type word qualifies");
    }

    #[test]
    fn test_qualifier_of_other_kind_does_not_stitch() {
        let tokens = tokenize("the Ontario province border");
        let cand = QualifierResolver::new().resolve(
            raw(1, 2, WaterKind::CanadianProvince),
            &tokens,
            &gazetteer(),
        );
        assert_eq!((cand.start, cand.end), (1, 2));
        assert!(!cand.is_qualified);
    }

    #[test]
    fn test_punctuation_blocks_stitching() {
        let tokens = tokenize("Ontario. Lake Erie");
        let cand = QualifierResolver::new().resolve(
            raw(0, 1, WaterKind::Lake),
            &tokens,
            &gazetteer(),
        );
        assert!(!cand.is_qualified);
        assert_eq!((cand.start, cand.end), (0, 1));
    }

    #[test]
    fn test_extension_respects_bounds() {
        let tokens = tokenize("Ontario");
        let cand = QualifierResolver::new().resolve(
            raw(0, 1, WaterKind::Lake),
            &tokens,
            &gazetteer(),
        );
        assert_eq!((cand.start, cand.end), (0, 1));
    }

    #[test]
    fn test_attributes_on_stop_word_match() {
        let tokens = tokenize("There is river traffic");
        let cand = QualifierResolver::new().resolve(
            raw(1, 2, WaterKind::River),
            &tokens,
            &gazetteer(),
        );
        // Extended over the qualifier, the text is no longer a bare stop
        // word, but it is still all lower-case.
        assert!(cand.is_qualified);
        assert_eq!(cand.text, "is river");
        assert!(cand.is_uncommon, "multi-word text is not in the stop set");
        assert!(!cand.is_proper, "all lower-case, spaces ignored");
    }

    #[test]
    fn test_case_shapes() {
        let resolver = QualifierResolver::new();
        let gaz = gazetteer();
        let tokens = tokenize("AMAZON amazon Amazon");
        let upper = resolver.resolve(raw(0, 1, WaterKind::River), &tokens, &gaz);
        let lower = resolver.resolve(raw(1, 2, WaterKind::River), &tokens, &gaz);
        let mixed = resolver.resolve(raw(2, 3, WaterKind::River), &tokens, &gaz);
        assert!(!upper.is_proper);
        assert!(!lower.is_proper);
        assert!(mixed.is_proper);
    }

    #[test]
    fn test_dotted_abbreviation_is_proper_shaped() {
        let resolver = QualifierResolver::new();
        let tokens = tokenize("Mt. Everest");
        let cand = resolver.resolve(raw(1, 2, WaterKind::Mountain), &tokens, &gazetteer());
        assert_eq!(cand.text, "Mt. Everest");
        assert!(cand.is_qualified, "preceded by mt.");
        assert!(cand.is_proper, "period keeps it out of both shape classes");
    }
}
