//! Conflict grouping - maximal clusters of overlapping candidates
//!
//! Candidates whose token spans touch transitively form one group; the
//! disambiguator resolves each group independently. Start-sorted sweep:
//! every joiner overlaps the group's covered region, so that region stays
//! contiguous and "intersects the group" reduces to starting before its
//! maximum end.

use super::candidate::CandidateMatch;

/// One connected component of overlapping candidates
pub type ConflictGroup = Vec<CandidateMatch>;

/// Partition candidates into ordered conflict groups. Every candidate
/// lands in exactly one group.
pub fn group_candidates(mut candidates: Vec<CandidateMatch>) -> Vec<ConflictGroup> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.end.cmp(&b.end))
            .then_with(|| a.priority().cmp(&b.priority()))
    });

    let mut groups: Vec<ConflictGroup> = Vec::new();
    let mut group: ConflictGroup = Vec::new();
    let mut claimed_end = 0;

    for candidate in candidates {
        if !group.is_empty() && candidate.start >= claimed_end {
            groups.push(std::mem::take(&mut group));
        }
        claimed_end = claimed_end.max(candidate.end);
        group.push(candidate);
    }
    if !group.is_empty() {
        groups.push(group);
    }

    groups
}

// ==================== TESTS ====================
