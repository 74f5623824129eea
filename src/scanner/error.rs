//! Error taxonomy for gazetteer loading and scanning
//!
//! Initialization problems are fatal: the scanner refuses to build rather
//! than run with a partial vocabulary. Annotating before a successful
//! build is the one precondition error. Everything else in the pipeline
//! (unknown kind labels, missing identifiers) is a defined fallback, not
//! an error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("vocabulary is empty. Add gazetteer entries before build().")]
    EmptyVocabulary,

    #[error("stop-word set is empty. Load stop words before build().")]
    EmptyStopWords,

    #[error("failed to load gazetteer artifact: {0}")]
    BadArtifact(String),

    #[error("failed to build phrase automaton: {0}")]
    AutomatonBuild(String),

    #[error("scanner is not built. Call build() first.")]
    NotBuilt,
}
