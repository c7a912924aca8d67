//! Combined text analysis
//!
//! This file contains the TextAnalyzer which runs the balance checker, the
//! statistics pass and the frequency counter over one text and gathers their
//! results into a single report.

use std::time::Instant;

use log::info;
use serde::Serialize;

use crate::core::balance::{BalanceReport, SymbolBalanceChecker};
use crate::core::frequency::{WordCount, WordFrequencyCounter};
use crate::core::statistics::{self, Statistics};
use crate::utils::text_utils::split_lines;

/// Default number of entries in the top words list
pub const DEFAULT_TOP_N: usize = 10;

/// Summary of the frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSummary {
    /// All counted words, repeats included
    pub total_words: usize,
    pub distinct_words: usize,
    /// Words that occur exactly once
    pub words_once: usize,
    pub top_words: Vec<WordCount>,
}

/// Everything known about one analyzed text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub balance: BalanceReport,
    pub statistics: Statistics,
    pub words: WordSummary,
}

/// Core text analyzer structure
pub struct TextAnalyzer {
    checker: SymbolBalanceChecker,
    counter: WordFrequencyCounter,
    /// Length of the top words list in reports
    top_n: usize,
}

impl TextAnalyzer {
    /// Create a new TextAnalyzer
    ///
    /// # Arguments
    ///
    /// * `top_n` - Number of most frequent words to include in reports
    ///
    /// # Returns
    ///
    /// A new TextAnalyzer instance
    pub fn new(top_n: usize) -> Self {
        Self {
            checker: SymbolBalanceChecker::new(),
            counter: WordFrequencyCounter::new(),
            top_n,
        }
    }

    /// Analyze a text and return the combined report
    ///
    /// Every call recomputes all results from scratch.
    ///
    /// # Arguments
    ///
    /// * `text` - Full document text
    ///
    /// # Returns
    ///
    /// The analysis report
    pub fn analyze(&mut self, text: &str) -> AnalysisReport {
        info!("Analyzing text of {} bytes", text.len());
        let start_time = Instant::now();

        let balance = self.checker.analyze(text);
        let statistics = statistics::compute(&split_lines(text));
        self.counter.ingest(text);

        let words = WordSummary {
            total_words: self.counter.total_words(),
            distinct_words: self.counter.distinct_words(),
            words_once: self.counter.unique_word_count(),
            top_words: self
                .counter
                .top_n(self.top_n)
                .into_iter()
                .map(|(word, count)| WordCount { word, count })
                .collect(),
        };

        info!(
            "Analysis completed in {:?} ({} errors, {} words)",
            start_time.elapsed(),
            balance.errors.len(),
            statistics.word_count
        );

        AnalysisReport { balance, statistics, words }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Balance checker holding the last result
    pub fn checker(&self) -> &SymbolBalanceChecker {
        &self.checker
    }

    /// Frequency counter holding the last table
    pub fn counter(&self) -> &WordFrequencyCounter {
        &self.counter
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}
