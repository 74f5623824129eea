//! HydroScanner - unified scanning facade
//!
//! Owns the gazetteer and the compiled automaton and runs the whole
//! pipeline over a document: tokenize -> raw matches -> qualifier
//! adjustment -> candidate filter -> conflict grouping -> disambiguation
//! -> entity linking. Everything the scanner holds is immutable after
//! `build()`, so independent documents can be annotated from multiple
//! threads without locks.
//!
//! # Usage (JavaScript)
//! ```javascript
//! import init, { HydroScanner } from 'hydroscan';
//!
//! await init();
//! const scanner = new HydroScanner(null);
//! scanner.hydrate([{ kind: 'LAKE', entries: [{ name: 'Lake Ontario', id: 'Q1062' }] }]);
//! scanner.hydrateStopWords(['the', 'is', 'a']);
//! scanner.build();
//! const doc = scanner.annotate(documentText);
//! console.log(doc.entities);  // [{ text, start, end, kind, link? }]
//! ```

use instant::Instant;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use wasm_bindgen::prelude::*;

use super::candidate::{CandidateMatch, QualifierResolver};
use super::conflict::group_candidates;
use super::disambiguate::resolve_group;
use super::error::ScanError;
use super::filter::keep_candidate;
use super::gazetteer::{Gazetteer, GazetteerEntry, GazetteerStats, KindEntries};
use super::kind::WaterKind;
use super::linker::wikilink;
use super::matcher::PhraseAutomaton;
use super::token::{tokenize, TextRange, Token};

// ==================== TYPE DEFINITIONS ====================

/// How the scanner treats annotations made by earlier pipeline stages
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnnotateMode {
    /// Ignore earlier annotations entirely; the output replaces them.
    #[default]
    Overwrite,
    /// Drop any candidate covering a token index the caller already
    /// annotated.
    Preserve,
}

/// Configuration for the HydroScanner
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScannerConfig {
    #[serde(default)]
    pub mode: AnnotateMode,
}

/// Final annotation: a typed, optionally linked, non-overlapping span
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEntity {
    pub text: String,
    /// Token span, end exclusive
    pub start: usize,
    pub end: usize,
    /// Byte range in the source text
    pub range: TextRange,
    pub kind: WaterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Performance and volume statistics for one annotation run
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScanStats {
    pub text_length: usize,
    pub token_count: usize,
    pub raw_match_count: usize,
    pub candidate_count: usize,
    pub entity_count: usize,
    pub match_time_us: u64,
    pub resolve_time_us: u64,
    pub total_time_us: u64,
}

/// Result of annotating one document
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnnotatedDocument {
    pub tokens: Vec<Token>,
    pub entities: Vec<ResolvedEntity>,
    pub stats: ScanStats,
}

/// Scanner status, exposed through the stats surface
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScannerStatus {
    pub is_built: bool,
    pub pattern_count: usize,
    pub gazetteer: GazetteerStats,
}

// ==================== MAIN IMPLEMENTATION ====================

/// HydroScanner - hydrologic entity annotation engine
#[wasm_bindgen]
pub struct HydroScanner {
    gazetteer: Gazetteer,
    resolver: QualifierResolver,
    automaton: Option<PhraseAutomaton>,
    config: ScannerConfig,
}

impl Default for HydroScanner {
    fn default() -> Self {
        Self::with_config(ScannerConfig::default())
    }
}

// Native API
impl HydroScanner {
    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            gazetteer: Gazetteer::new(),
            resolver: QualifierResolver::new(),
            automaton: None,
            config,
        }
    }

    /// Append gazetteer entries under a kind label. Invalidates a
    /// previously built automaton.
    pub fn add_entries(&mut self, kind_label: &str, entries: &[GazetteerEntry]) {
        self.gazetteer.add_entries(kind_label, entries);
        self.automaton = None;
    }

    pub fn set_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.gazetteer.set_stop_words(words);
    }

    /// Load a JSON vocabulary artifact (see [`Gazetteer::load_json`]).
    pub fn load_json(&mut self, json: &str) -> Result<(), ScanError> {
        self.gazetteer.load_json(json)?;
        self.automaton = None;
        Ok(())
    }

    /// Load a newline-separated stop-word artifact.
    pub fn load_stop_words_text(&mut self, text: &str) {
        self.gazetteer.load_stop_words_text(text);
    }

    /// Validate the artifacts and compile the phrase automaton. Fails
    /// fatally on a missing artifact; there is no degraded mode.
    pub fn build(&mut self) -> Result<(), ScanError> {
        self.gazetteer.validate()?;
        self.automaton = Some(PhraseAutomaton::build(&self.gazetteer)?);
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.automaton.is_some()
    }

    /// Annotate a document. Treats no token as pre-annotated; use
    /// [`HydroScanner::annotate_with_claimed`] to pass a claimed set.
    pub fn annotate(&self, text: &str) -> Result<AnnotatedDocument, ScanError> {
        self.annotate_with_claimed(text, &HashSet::new())
    }

    /// Annotate a document given the token indices earlier stages already
    /// annotated. The claimed set is honored in Preserve mode and ignored
    /// in Overwrite mode.
    pub fn annotate_with_claimed(
        &self,
        text: &str,
        claimed: &HashSet<usize>,
    ) -> Result<AnnotatedDocument, ScanError> {
        let mut document = self.annotate_tokens(tokenize(text), claimed)?;
        document.stats.text_length = text.len();
        Ok(document)
    }

    /// Lower-level entry for callers with their own tokenizer: run the
    /// pipeline over a prepared token sequence.
    pub fn annotate_tokens(
        &self,
        tokens: Vec<Token>,
        claimed: &HashSet<usize>,
    ) -> Result<AnnotatedDocument, ScanError> {
        let automaton = self.automaton.as_ref().ok_or(ScanError::NotBuilt)?;
        let total_timer = Instant::now();

        let match_timer = Instant::now();
        let raw_matches = automaton.raw_matches(&tokens);
        let match_time_us = match_timer.elapsed().as_micros() as u64;

        let resolve_timer = Instant::now();
        let mut candidates: Vec<CandidateMatch> = raw_matches
            .iter()
            .map(|&raw| self.resolver.resolve(raw, &tokens, &self.gazetteer))
            .filter(|candidate| keep_candidate(candidate, &tokens))
            .collect();

        if self.config.mode == AnnotateMode::Preserve && !claimed.is_empty() {
            candidates.retain(|c| (c.start..c.end).all(|index| !claimed.contains(&index)));
        }
        let candidate_count = candidates.len();

        let mut entities: Vec<ResolvedEntity> = Vec::new();
        for group in group_candidates(candidates) {
            for winner in resolve_group(group) {
                let link = wikilink(&self.gazetteer, &winner);
                let range = TextRange::new(
                    tokens[winner.start].range.start,
                    tokens[winner.end - 1].range.end,
                );
                entities.push(ResolvedEntity {
                    text: winner.text,
                    start: winner.start,
                    end: winner.end,
                    range,
                    kind: winner.kind,
                    link,
                });
            }
        }
        entities.sort_by_key(|entity| entity.start);
        let resolve_time_us = resolve_timer.elapsed().as_micros() as u64;

        let stats = ScanStats {
            text_length: tokens.last().map(|t| t.range.end).unwrap_or(0),
            token_count: tokens.len(),
            raw_match_count: raw_matches.len(),
            candidate_count,
            entity_count: entities.len(),
            match_time_us,
            resolve_time_us,
            total_time_us: total_timer.elapsed().as_micros() as u64,
        };

        Ok(AnnotatedDocument {
            tokens,
            entities,
            stats,
        })
    }

    /// Quick check if the text contains any vocabulary phrase at all.
    pub fn contains_any(&self, text: &str) -> bool {
        self.automaton
            .as_ref()
            .map(|automaton| automaton.contains_any(text))
            .unwrap_or(false)
    }

    pub fn status(&self) -> ScannerStatus {
        ScannerStatus {
            is_built: self.is_built(),
            pattern_count: self
                .automaton
                .as_ref()
                .map(PhraseAutomaton::pattern_count)
                .unwrap_or(0),
            gazetteer: self.gazetteer.stats(),
        }
    }

    /// Drop all artifacts and the automaton.
    pub fn clear(&mut self) {
        self.gazetteer.clear();
        self.automaton = None;
    }
}

// ==================== WASM BINDINGS ====================

fn to_js(error: ScanError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
impl HydroScanner {
    /// Create a new HydroScanner with optional configuration
    ///
    /// # Arguments
    /// * `config` - Optional JSON configuration object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<HydroScanner, JsValue> {
        let config: ScannerConfig = if config.is_null() || config.is_undefined() {
            ScannerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        Ok(Self::with_config(config))
    }

    /// Hydrate gazetteer entries
    ///
    /// # Arguments
    /// * `batches` - JSON array of `{ kind, entries: [{ name, id? }] }`
    #[wasm_bindgen(js_name = hydrate)]
    pub fn hydrate_js(&mut self, batches: JsValue) -> Result<(), JsValue> {
        let batches: Vec<KindEntries> = serde_wasm_bindgen::from_value(batches)
            .map_err(|e| JsValue::from_str(&format!("Invalid entries: {}", e)))?;
        for batch in &batches {
            self.add_entries(&batch.kind, &batch.entries);
        }
        Ok(())
    }

    /// Hydrate the stop-word set
    #[wasm_bindgen(js_name = hydrateStopWords)]
    pub fn hydrate_stop_words_js(&mut self, words: JsValue) -> Result<(), JsValue> {
        let words: Vec<String> = serde_wasm_bindgen::from_value(words)
            .map_err(|e| JsValue::from_str(&format!("Invalid stop words: {}", e)))?;
        self.set_stop_words(words);
        Ok(())
    }

    /// Load a JSON vocabulary artifact string
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json_js(&mut self, json: &str) -> Result<(), JsValue> {
        self.load_json(json).map_err(to_js)
    }

    /// Load a newline-separated stop-word artifact string
    #[wasm_bindgen(js_name = loadStopWordsText)]
    pub fn load_stop_words_text_js(&mut self, text: &str) {
        self.load_stop_words_text(text);
    }

    /// Compile the automaton
    #[wasm_bindgen(js_name = build)]
    pub fn build_js(&mut self) -> Result<(), JsValue> {
        self.build().map_err(to_js)
    }

    /// Annotate a document and return the serialized result
    #[wasm_bindgen(js_name = annotate)]
    pub fn annotate_js(&self, text: &str) -> Result<JsValue, JsValue> {
        let document = self.annotate(text).map_err(to_js)?;
        serde_wasm_bindgen::to_value(&document).map_err(|e| {
            web_sys::console::error_1(
                &format!("[HydroScanner] Serialization failed: {:?}", e).into(),
            );
            JsValue::from_str(&format!("Serialization error: {}", e))
        })
    }

    /// Annotate honoring pre-claimed token indices (Preserve mode)
    #[wasm_bindgen(js_name = annotateWithClaimed)]
    pub fn annotate_with_claimed_js(
        &self,
        text: &str,
        claimed: JsValue,
    ) -> Result<JsValue, JsValue> {
        let claimed: Vec<usize> = serde_wasm_bindgen::from_value(claimed)
            .map_err(|e| JsValue::from_str(&format!("Invalid claimed set: {}", e)))?;
        let claimed: HashSet<usize> = claimed.into_iter().collect();
        let document = self.annotate_with_claimed(text, &claimed).map_err(to_js)?;
        serde_wasm_bindgen::to_value(&document)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Quick check if text contains any vocabulary phrase
    #[wasm_bindgen(js_name = containsAny)]
    pub fn contains_any_js(&self, text: &str) -> bool {
        self.contains_any(text)
    }

    /// Check if the automaton is built and ready for annotation
    #[wasm_bindgen(js_name = isBuilt)]
    pub fn is_built_js(&self) -> bool {
        self.is_built()
    }

    /// Get scanner status
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats_js(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.status()).unwrap_or(JsValue::NULL)
    }

    /// Clear all artifacts and reset the scanner
    #[wasm_bindgen(js_name = clear)]
    pub fn clear_js(&mut self) {
        self.clear();
    }
}

// ==================== TESTS ====================
