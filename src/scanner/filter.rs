//! Candidate filter - common-word and case-ambiguity suppression
//!
//! A qualified candidate always survives. Everything else must prove it
//! looks like a name: not a stop word, and not case-ambiguous (all-upper
//! or all-lower). Two narrow carve-outs:
//! - short codes of the province/state kinds ("AB", "NY") survive when
//!   entirely upper-case even though they fail the shape test;
//! - the one named clinical collision: "CT" directly followed by "scan"
//!   is an imaging term, not Connecticut.

use super::candidate::CandidateMatch;
use super::token::Token;

/// Longest matched text the short-code carve-out applies to.
pub const MAX_ABBREVIATION_LEN: usize = 4;

/// The clinical-abbreviation collision: (matched text, following word).
pub const CLINICAL_COLLISION: (&str, &str) = ("CT", "scan");

/// Keep or drop a candidate. Dropped candidates never reach the
/// conflict grouper.
pub fn keep_candidate(candidate: &CandidateMatch, tokens: &[Token]) -> bool {
    if candidate.is_qualified {
        return true;
    }

    // Short matches of abbreviation-eligible kinds are decided purely by
    // the upper-case gate; full-length names fall through to the general
    // rule below.
    if candidate.kind.abbreviation_eligible() && candidate.text.len() <= MAX_ABBREVIATION_LEN {
        if candidate.text == CLINICAL_COLLISION.0
            && tokens
                .get(candidate.end)
                .is_some_and(|t| t.lower() == CLINICAL_COLLISION.1)
        {
            return false;
        }
        return is_all_upper(&candidate.text);
    }

    candidate.is_uncommon && candidate.is_proper
}

fn is_all_upper(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

// ==================== TESTS ====================
