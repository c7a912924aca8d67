//! Bracket balance checker
//!
//! Scans text character by character and matches `(`, `{`, `[` against their
//! closing counterparts using an explicit stack. Every mismatch is recorded
//! with its line and column; nothing here ever fails.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::core::stack::Stack;
use crate::utils::text_utils::split_lines;

/// Which side of a pair could not be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceKind {
    /// A closer with an empty stack or a different opener on top
    UnmatchedClosing,
    /// An opener still on the stack once the scan is done
    UnmatchedOpening,
}

/// A single recorded imbalance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisError {
    /// 1-based line the offending symbol sits on
    pub line: usize,
    /// 1-based column within that line
    pub column: usize,
    pub symbol: char,
    pub kind: ImbalanceKind,
}

impl AnalysisError {
    fn unmatched_closing(symbol: char, line: usize, column: usize) -> Self {
        Self { line, column, symbol, kind: ImbalanceKind::UnmatchedClosing }
    }

    fn unmatched_opening(symbol: char, line: usize, column: usize) -> Self {
        Self { line, column, symbol, kind: ImbalanceKind::UnmatchedOpening }
    }

    /// Human readable description, without the line prefix
    pub fn message(&self) -> String {
        let side = match self.kind {
            ImbalanceKind::UnmatchedClosing => "closing",
            ImbalanceKind::UnmatchedOpening => "opening",
        };
        format!("Unmatched {} symbol '{}' at position {}", side, self.symbol, self.column)
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message())
    }
}

/// Outcome of a balance check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub balanced: bool,
    /// Errors in detection order; leftover openers come last, most recent first
    pub errors: Vec<AnalysisError>,
}

/// An opener waiting for its closer
#[derive(Debug, Clone, Copy)]
struct OpenSymbol {
    symbol: char,
    line: usize,
    column: usize,
}

fn is_opening(c: char) -> bool {
    matches!(c, '(' | '{' | '[')
}

/// The opener a closing symbol expects, or `None` if `c` is not a closer
fn expected_opener(c: char) -> Option<char> {
    match c {
        ')' => Some('('),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

/// Stateful checker holding the result of the last `analyze` call
#[derive(Debug, Default)]
pub struct SymbolBalanceChecker {
    errors: Vec<AnalysisError>,
    balanced: bool,
}

impl SymbolBalanceChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `text` for balanced brackets, replacing any previous result
    pub fn analyze(&mut self, text: &str) -> BalanceReport {
        self.errors.clear();

        let mut stack: Stack<OpenSymbol> = Stack::new();

        for (line_index, line) in split_lines(text).into_iter().enumerate() {
            let line_number = line_index + 1;

            for (char_index, c) in line.chars().enumerate() {
                let column = char_index + 1;

                if is_opening(c) {
                    stack.push(OpenSymbol { symbol: c, line: line_number, column });
                } else if let Some(expected) = expected_opener(c) {
                    let matches_top = stack.peek().map_or(false, |top| top.symbol == expected);

                    // A mismatch leaves the opener in place for later closers
                    if matches_top {
                        stack.pop();
                    } else {
                        self.errors
                            .push(AnalysisError::unmatched_closing(c, line_number, column));
                    }
                }
            }
        }

        if !stack.is_empty() {
            debug!("{} opening symbols left on the stack", stack.len());
        }

        while let Some(open) = stack.pop() {
            self.errors
                .push(AnalysisError::unmatched_opening(open.symbol, open.line, open.column));
        }

        self.balanced = self.errors.is_empty();
        debug!("Balance check finished with {} errors", self.errors.len());

        self.report()
    }

    /// Whether the last analyzed text was balanced; `false` before any analysis
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    pub fn errors(&self) -> &[AnalysisError] {
        &self.errors
    }

    pub fn report(&self) -> BalanceReport {
        BalanceReport {
            balanced: self.balanced,
            errors: self.errors.clone(),
        }
    }
}
