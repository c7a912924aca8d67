//! Core module for text analysis
//!
//! This module contains the analysis components: the bracket balance checker,
//! text statistics and word frequency counting, plus the analyzer that
//! combines them.

pub mod analyzer;
pub mod balance;
pub mod frequency;
pub mod stack;
pub mod statistics;
