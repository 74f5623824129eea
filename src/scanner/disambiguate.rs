//! Disambiguator - ordered tie-break ranking and winner selection
//!
//! The heart of the scanner. Each conflict group is ranked by six
//! criteria applied in strict sequence; because every pass only refines
//! the partitions of the previous one, the whole ordering is a single
//! stable sort on the lexicographic key:
//!
//! 1. uncommon (not a stop word) before common,
//! 2. qualified before unqualified,
//! 3. longer span first,
//! 4. kind priority rank ascending,
//! 5. proper-noun-shaped before not,
//! 6. leftmost start first.
//!
//! Swapping any two passes changes outcomes on ambiguous inputs, so the
//! order is load-bearing and pinned by tests.
//!
//! Winner selection walks the ranked sequence with a claimed-token set.
//! A candidate with no claimed token is accepted; any other is skipped
//! permanently. Skipped spans are claimed as well, so a shorter echo
//! nested inside a rejected span cannot resurface later in the walk.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::candidate::CandidateMatch;
use super::conflict::ConflictGroup;

/// The six-pass ranking as a single comparator.
pub fn rank(a: &CandidateMatch, b: &CandidateMatch) -> Ordering {
    b.is_uncommon
        .cmp(&a.is_uncommon)
        .then_with(|| b.is_qualified.cmp(&a.is_qualified))
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.priority().cmp(&b.priority()))
        .then_with(|| b.is_proper.cmp(&a.is_proper))
        .then_with(|| a.start.cmp(&b.start))
}

/// Resolve one conflict group to its non-overlapping winners, in rank
/// order.
pub fn resolve_group(mut group: ConflictGroup) -> Vec<CandidateMatch> {
    group.sort_by(rank);

    let mut claimed: HashSet<usize> = HashSet::new();
    let mut winners = Vec::new();

    for candidate in group {
        let span = candidate.start..candidate.end;
        let free = span.clone().all(|index| !claimed.contains(&index));
        claimed.extend(span);
        if free {
            winners.push(candidate);
        }
    }

    winners
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::kind::WaterKind;

    struct Case {
        text: &'static str,
        start: usize,
        end: usize,
        kind: WaterKind,
        qualified: bool,
        uncommon: bool,
        proper: bool,
    }

    impl Case {
        fn new(text: &'static str, start: usize, end: usize, kind: WaterKind) -> Self {
            Case {
                text,
                start,
                end,
                kind,
                qualified: false,
                uncommon: true,
                proper: true,
            }
        }

        fn qualified(mut self) -> Self {
            self.qualified = true;
            self
        }

        fn common(mut self) -> Self {
            self.uncommon = false;
            self
        }

        fn shapeless(mut self) -> Self {
            self.proper = false;
            self
        }

        fn build(self) -> CandidateMatch {
            CandidateMatch {
                text: self.text.to_string(),
                start: self.start,
                end: self.end,
                kind: self.kind,
                is_qualified: self.qualified,
                is_uncommon: self.uncommon,
                is_proper: self.proper,
            }
        }
    }

    fn winner_texts(group: ConflictGroup) -> Vec<String> {
        resolve_group(group).into_iter().map(|c| c.text).collect()
    }

    #[test]
    fn test_uncommon_outranks_everything() {
        // A common qualified candidate still loses to an uncommon one.
        let group = vec![
            Case::new("is river", 0, 2, WaterKind::River)
                .qualified()
                .common()
                .build(),
            Case::new("Avon", 1, 2, WaterKind::River).build(),
        ];
        assert_eq!(winner_texts(group), vec!["Avon"]);
    }

    #[test]
    fn test_qualified_beats_longer_unqualified() {
        let group = vec![
            Case::new("Saint Lawrence", 0, 2, WaterKind::River).build(),
            Case::new("Lawrence River", 1, 3, WaterKind::River).qualified().build(),
        ];
        assert_eq!(winner_texts(group), vec!["Lawrence River"]);
    }

    #[test]
    fn test_length_breaks_qualified_tie() {
        let group = vec![
            Case::new("Lake Ontario", 3, 5, WaterKind::Lake).qualified().build(),
            Case::new("Great Slave Lake", 1, 4, WaterKind::Lake).qualified().build(),
        ];
        assert_eq!(winner_texts(group), vec!["Great Slave Lake"]);
    }

    #[test]
    fn test_priority_breaks_length_tie() {
        let group = vec![
            Case::new("Mississippi", 1, 2, WaterKind::Lake).build(),
            Case::new("Mississippi", 1, 2, WaterKind::River).build(),
        ];
        let winners = resolve_group(group);
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].kind, WaterKind::River);
    }

    #[test]
    fn test_proper_shape_breaks_priority_tie() {
        let group = vec![
            Case::new("is river", 0, 2, WaterKind::River).qualified().shapeless().build(),
            Case::new("river Thames", 1, 3, WaterKind::River).qualified().build(),
        ];
        assert_eq!(winner_texts(group), vec!["river Thames"]);
    }

    #[test]
    fn test_leftmost_is_the_final_tie_break() {
        let group = vec![
            Case::new("Lake Ontario", 2, 4, WaterKind::Lake).qualified().build(),
            Case::new("Arctic Lake", 1, 3, WaterKind::Lake).qualified().build(),
        ];
        assert_eq!(winner_texts(group), vec!["Arctic Lake"]);
    }

    #[test]
    fn test_skipped_span_blocks_nested_candidates() {
        // "Great Slave Lake" claims the shared token; "Lake Ontario" is
        // skipped, and the bare "Ontario" inside the skipped span must
        // not resurface.
        let group = vec![
            Case::new("Great Slave Lake", 1, 4, WaterKind::Lake).qualified().build(),
            Case::new("Lake Ontario", 3, 5, WaterKind::Lake).qualified().build(),
            Case::new("Ontario", 4, 5, WaterKind::CanadianProvince).build(),
        ];
        assert_eq!(winner_texts(group), vec!["Great Slave Lake"]);
    }

    #[test]
    fn test_disjoint_candidates_in_one_group_both_win() {
        // Connected only through a bridge candidate that loses; the two
        // outer spans never overlap each other and both survive.
        let group = vec![
            Case::new("Churchill River", 0, 2, WaterKind::River).qualified().build(),
            Case::new("River Slave Lake", 1, 4, WaterKind::Lake).build(),
            Case::new("Erie", 3, 4, WaterKind::Lake).qualified().build(),
        ];
        assert_eq!(winner_texts(group), vec!["Churchill River", "Erie"]);
    }

    #[test]
    fn test_deterministic_given_any_input_order() {
        let make = || {
            vec![
                Case::new("Great Slave Lake", 1, 4, WaterKind::Lake).qualified().build(),
                Case::new("Lake Ontario", 3, 5, WaterKind::Lake).qualified().build(),
                Case::new("Ontario", 4, 5, WaterKind::CanadianProvince).build(),
            ]
        };
        let mut reversed = make();
        reversed.reverse();
        assert_eq!(resolve_group(make()), resolve_group(reversed));
    }
}
