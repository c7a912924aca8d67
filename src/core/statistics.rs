//! Line, word and character statistics
//!
//! Words here are plain separator-delimited tokens with no punctuation
//! stripping, so `"World!"` and `"world"` are different words.

use std::collections::HashSet;

use serde::Serialize;

use crate::utils::text_utils::{round_to_hundredths, split_lines, split_words};

/// Basic counts over a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub line_count: usize,
    pub word_count: usize,
    /// Characters excluding line breaks
    pub char_count: usize,
    /// Mean token length rounded to two decimals, 0 with no words
    pub avg_word_length: f64,
    /// Distinct tokens after case-folding
    pub unique_words: usize,
}

/// Compute statistics over already split lines
pub fn compute<S: AsRef<str>>(lines: &[S]) -> Statistics {
    let mut word_count = 0;
    let mut char_count = 0;
    let mut total_word_length = 0;
    let mut distinct = HashSet::new();

    for line in lines {
        let line = line.as_ref();
        char_count += line.chars().count();

        for word in split_words(line) {
            word_count += 1;
            total_word_length += word.chars().count();
            distinct.insert(word.to_lowercase());
        }
    }

    let avg_word_length = if word_count > 0 {
        round_to_hundredths(total_word_length as f64 / word_count as f64)
    } else {
        0.0
    };

    Statistics {
        line_count: lines.len(),
        word_count,
        char_count,
        avg_word_length,
        unique_words: distinct.len(),
    }
}

/// Split `text` into lines and compute statistics over them
pub fn compute_text(text: &str) -> Statistics {
    compute(&split_lines(text))
}
