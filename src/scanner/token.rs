//! Tokenizer - word-level segmentation with byte ranges
//!
//! Splits text into the word units the scanner operates on. Spans produced
//! by the pipeline are token-index ranges; the byte range on each token
//! lets callers map annotations back onto the source text.
//!
//! Rules:
//! - Unicode word bounds decide segmentation; hyphenated and slashed
//!   compounds ("Arctic-Indian") split into separate tokens.
//! - Punctuation survives as standalone tokens so that qualifier stitching
//!   never reaches across a sentence or list boundary.
//! - A trailing period is folded into a known abbreviation ("Mt." stays
//!   one token).

use serde::{Deserialize, Serialize};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

// ==================== TYPE DEFINITIONS ====================

/// Text range (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "TextRange: start must be <= end");
        TextRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the text slice from a source string
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        TextRange::new(range.start, range.end)
    }
}

/// A single word or punctuation unit of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub range: TextRange,
}

impl Token {
    pub fn new(text: impl Into<String>, range: TextRange) -> Self {
        Token {
            text: text.into(),
            range,
        }
    }

    /// Lower-cased text, the form all dictionary comparisons use
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

// ==================== TOKENIZER ====================

/// Words that keep a directly trailing period as part of the token.
const DOTTED_ABBREVIATIONS: &[&str] = &["mt", "st", "ft"];

/// Tokenize text into word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut skip_until = 0;

    for (offset, word) in text.split_word_bound_indices() {
        if offset < skip_until {
            continue;
        }
        if word.chars().any(|c| c.is_alphanumeric()) {
            let mut end = offset + word.len();
            if DOTTED_ABBREVIATIONS.contains(&word.to_lowercase().as_str())
                && text[end..].starts_with('.')
            {
                end += 1;
                skip_until = end;
            }
            tokens.push(Token::new(&text[offset..end], TextRange::new(offset, end)));
        } else if word.chars().any(|c| !c.is_whitespace()) {
            // Punctuation token; blocks qualifier stitching across it.
            tokens.push(Token::new(
                word,
                TextRange::new(offset, offset + word.len()),
            ));
        }
    }

    tokens
}

// ==================== TESTS ====================
