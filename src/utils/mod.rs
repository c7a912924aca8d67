//! Utility modules for the text analyzer
//!
//! This module contains utility functions for file handling, output formatting,
//! and shared text helpers.

pub mod file_utils;
pub mod output_formatter;
pub mod text_utils;
