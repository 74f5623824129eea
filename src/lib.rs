//! HydroScan: Hydrologic Entity Scanner
//!
//! A Rust/WASM implementation of a gazetteer-based annotator for
//! hydrologic and geographic named entities (rivers, lakes, oceans,
//! provinces, states, mountains, drainage basins, watercourses).
//!
//! # Architecture
//!
//! ## Scanner pipeline (one module per stage)
//! - `token.rs` - Tokenizer: word-level segmentation with byte ranges
//! - `gazetteer.rs` - Gazetteer: vocabulary, identifiers, stop words
//! - `kind.rs` - WaterKind: categories, priority order, qualifier words
//! - `matcher.rs` - PhraseAutomaton: overlapping phrase search (Aho-Corasick)
//! - `candidate.rs` - QualifierResolver: boundary stitching + attributes
//! - `filter.rs` - Candidate filter: common-word/case suppression
//! - `conflict.rs` - Conflict grouping: overlap clusters
//! - `disambiguate.rs` - Disambiguator: six-pass ranking, winner selection
//! - `linker.rs` - Entity linker: Wikidata identifier attachment
//! - `engine.rs` - HydroScanner: **unified facade** - hydrate/build/annotate
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { HydroScanner } from 'hydroscan';
//!
//! await init();
//!
//! const scanner = new HydroScanner(null);
//! scanner.hydrate([
//!   { kind: 'RIVER', entries: [{ name: 'Amazon', id: 'Q3783' }] },
//!   { kind: 'LAKE', entries: [{ name: 'Lake Ontario', id: 'Q1062' }] }
//! ]);
//! scanner.hydrateStopWords(['the', 'is', 'a', 'an']);
//! scanner.build();
//!
//! // Single annotate call - tokens, entities, timings
//! const doc = scanner.annotate('The Amazon is something.');
//! console.log(doc.entities);  // [{ text: 'Amazon', kind: 'RIVER', link: '...' }]
//! console.log(doc.stats);     // Counts and timing per phase
//! ```

pub mod scanner;

pub use scanner::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("hydroscan v{}", env!("CARGO_PKG_VERSION"))
}
