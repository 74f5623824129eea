//! Gazetteer - the scanner's immutable reference data
//!
//! Three artifacts, hydrated before build and read-only afterwards:
//! - vocabulary: normalized phrase -> kind, the patterns the matcher
//!   compiles;
//! - identifier table: (kind, normalized name) -> external id, consumed by
//!   the entity linker;
//! - stop words: common words suppressed when they stand alone.
//!
//! Phrases are normalized with the same tokenizer the scanner uses on
//! documents (lower-cased, single-space joined), so a phrase matches
//! exactly when its token sequence appears in the text.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::error::ScanError;
use super::kind::WaterKind;
use super::token::tokenize;

// ==================== TYPE DEFINITIONS ====================

/// One gazetteer record: a name and its optional external identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Hydration unit: all entries for one kind label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindEntries {
    pub kind: String,
    pub entries: Vec<GazetteerEntry>,
}

/// Entry counts, exposed through the scanner's stats surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub phrase_count: usize,
    pub kind_count: usize,
    pub identifier_count: usize,
    pub stop_word_count: usize,
}

// ==================== MAIN IMPLEMENTATION ====================

/// Immutable reference data for the scanner
#[derive(Debug, Default)]
pub struct Gazetteer {
    /// (kind, normalized phrase) in insertion order; automaton patterns
    phrases: Vec<(WaterKind, String)>,
    /// Dedupe within a kind
    seen: HashSet<(WaterKind, String)>,
    /// kind -> normalized name -> external identifier
    identifiers: HashMap<WaterKind, HashMap<String, String>>,
    /// Lower-cased common words
    stop_words: HashSet<String>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries under a kind label. Unknown labels land in the
    /// generic WATER_BODY category. Names shorter than two characters or
    /// without any alphanumeric character are skipped (source-data
    /// hygiene).
    pub fn add_entries(&mut self, kind_label: &str, entries: &[GazetteerEntry]) {
        let kind = WaterKind::from_label(kind_label);
        for entry in entries {
            let Some(phrase) = normalize_name(&entry.name) else {
                continue;
            };
            if let Some(id) = &entry.id {
                self.identifiers
                    .entry(kind)
                    .or_default()
                    .insert(phrase.clone(), id.clone());
            }
            if self.seen.insert((kind, phrase.clone())) {
                self.phrases.push((kind, phrase));
            }
        }
    }

    /// Replace the stop-word set.
    pub fn set_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
    }

    /// Load vocabulary and identifiers from a JSON artifact:
    /// `[{"kind": "LAKE", "entries": [{"name": "...", "id": "Q..."}]}]`
    pub fn load_json(&mut self, json: &str) -> Result<(), ScanError> {
        let batches: Vec<KindEntries> =
            serde_json::from_str(json).map_err(|e| ScanError::BadArtifact(e.to_string()))?;
        for batch in &batches {
            self.add_entries(&batch.kind, &batch.entries);
        }
        Ok(())
    }

    /// Load stop words from a newline-separated artifact.
    pub fn load_stop_words_text(&mut self, text: &str) {
        self.set_stop_words(text.lines());
    }

    /// Validate the artifacts; called by the scanner before compiling.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.phrases.is_empty() {
            return Err(ScanError::EmptyVocabulary);
        }
        if self.stop_words.is_empty() {
            return Err(ScanError::EmptyStopWords);
        }
        Ok(())
    }

    pub fn phrases(&self) -> &[(WaterKind, String)] {
        &self.phrases
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn is_stop_word(&self, lower: &str) -> bool {
        self.stop_words.contains(lower)
    }

    /// Exact identifier lookup; `None` is a valid outcome.
    pub fn identifier(&self, kind: WaterKind, lower_name: &str) -> Option<&str> {
        self.identifiers
            .get(&kind)
            .and_then(|names| names.get(lower_name))
            .map(String::as_str)
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            phrase_count: self.phrases.len(),
            kind_count: self
                .phrases
                .iter()
                .map(|(kind, _)| kind)
                .collect::<HashSet<_>>()
                .len(),
            identifier_count: self.identifiers.values().map(HashMap::len).sum(),
            stop_word_count: self.stop_words.len(),
        }
    }

    pub fn clear(&mut self) {
        self.phrases.clear();
        self.seen.clear();
        self.identifiers.clear();
        self.stop_words.clear();
    }
}

/// Normalize a gazetteer name to its matchable form: tokenized like a
/// document, lower-cased, single-space joined. Returns `None` for names
/// too short or with nothing alphanumeric to match.
fn normalize_name(name: &str) -> Option<String> {
    if name.trim().len() < 2 {
        return None;
    }
    let tokens = tokenize(name);
    if !tokens
        .iter()
        .any(|t| t.text.chars().any(char::is_alphanumeric))
    {
        return None;
    }
    let phrase = tokens
        .iter()
        .map(|t| t.lower())
        .collect::<Vec<_>>()
        .join(" ");
    Some(phrase)
}

// ==================== TESTS ====================
