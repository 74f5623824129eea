//! PhraseAutomaton - token-aligned overlapping phrase search
//!
//! One Aho-Corasick automaton over every (kind, phrase) pair in the
//! gazetteer. Unlike a leftmost-longest matcher, this stage must report
//! the complete multiset of occurrences - nested, overlapping, and
//! duplicate spans included - because the disambiguator downstream is the
//! component that picks winners.
//!
//! Matching runs over the lower-cased token texts joined with single
//! spaces; a hit counts only when both ends fall exactly on token
//! boundaries, so "erie" never fires inside "eerie".

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use std::collections::HashMap;

use super::error::ScanError;
use super::gazetteer::Gazetteer;
use super::kind::WaterKind;
use super::token::Token;

// ==================== TYPE DEFINITIONS ====================

/// A raw phrase occurrence in token indices, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    pub start: usize,
    pub end: usize,
    pub kind: WaterKind,
}

// ==================== MAIN IMPLEMENTATION ====================

/// Compiled phrase matcher
pub struct PhraseAutomaton {
    automaton: AhoCorasick,
    /// Kind per pattern, indexed by pattern id
    kinds: Vec<WaterKind>,
}

impl PhraseAutomaton {
    /// Compile the gazetteer vocabulary. Standard match semantics keep
    /// overlapping occurrences enumerable.
    pub fn build(gazetteer: &Gazetteer) -> Result<Self, ScanError> {
        let patterns: Vec<&str> = gazetteer
            .phrases()
            .iter()
            .map(|(_, phrase)| phrase.as_str())
            .collect();
        let kinds: Vec<WaterKind> = gazetteer.phrases().iter().map(|(kind, _)| *kind).collect();

        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| ScanError::AutomatonBuild(e.to_string()))?;

        Ok(Self { automaton, kinds })
    }

    pub fn pattern_count(&self) -> usize {
        self.kinds.len()
    }

    /// Every token-aligned occurrence of a vocabulary phrase.
    pub fn raw_matches(&self, tokens: &[Token]) -> Vec<RawMatch> {
        if tokens.is_empty() {
            return Vec::new();
        }

        // Joined lower-cased token text plus offset -> token-index maps
        // for the boundary check.
        let mut joined = String::new();
        let mut starts: HashMap<usize, usize> = HashMap::new();
        let mut ends: HashMap<usize, usize> = HashMap::new();
        for (index, token) in tokens.iter().enumerate() {
            if index > 0 {
                joined.push(' ');
            }
            starts.insert(joined.len(), index);
            joined.push_str(&token.lower());
            ends.insert(joined.len(), index + 1);
        }

        let mut matches = Vec::new();
        for hit in self.automaton.find_overlapping_iter(&joined) {
            let (Some(&start), Some(&end)) = (starts.get(&hit.start()), ends.get(&hit.end()))
            else {
                continue;
            };
            debug_assert!(start < end && end <= tokens.len());
            matches.push(RawMatch {
                start,
                end,
                kind: self.kinds[hit.pattern().as_usize()],
            });
        }
        matches
    }

    /// Quick containment pre-check; scans the raw text without token
    /// alignment, so it can rarely report true for a sub-word hit.
    pub fn contains_any(&self, text: &str) -> bool {
        self.automaton.find_iter(&text.to_lowercase()).next().is_some()
    }
}

// ==================== TESTS ====================
