//! Text Analyzer - bracket balance checking and word statistics for text files
//!
//! This library checks whether the brackets of a document are properly nested,
//! reporting every mismatch with its position, and computes word statistics
//! and a word frequency table.

pub mod core;
pub mod utils;

pub use crate::core::analyzer::{AnalysisReport, TextAnalyzer};
pub use crate::core::balance::{AnalysisError, BalanceReport, SymbolBalanceChecker};
pub use crate::core::frequency::WordFrequencyCounter;
pub use crate::core::statistics::Statistics;
pub use crate::utils::file_utils::TextSourceError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a text and return the combined report
///
/// # Arguments
///
/// * `text` - Full document text
/// * `top_n` - Number of most frequent words to include
pub fn analyze_text(text: &str, top_n: usize) -> AnalysisReport {
    TextAnalyzer::new(top_n).analyze(text)
}

/// Read a file and analyze its content
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to analyze
/// * `top_n` - Number of most frequent words to include
///
/// # Returns
///
/// The analysis report, or the reason the file could not be read as text
pub fn analyze_file<P: AsRef<std::path::Path>>(
    file_path: P,
    top_n: usize,
) -> Result<AnalysisReport, TextSourceError> {
    let text = utils::file_utils::read_text_file(file_path.as_ref())?;
    Ok(analyze_text(&text, top_n))
}

/// Library configuration
pub mod config {
    use log::{error, info};
    use serde::{Deserialize, Serialize};
    use serde_json::Value;
    use std::path::Path;

    use crate::core::analyzer::DEFAULT_TOP_N;

    fn default_top_n() -> usize {
        DEFAULT_TOP_N
    }

    fn default_bar_width() -> usize {
        20
    }

    /// Settings read from a JSON configuration file
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AnalyzerConfig {
        /// Number of words in the frequency listing
        #[serde(default = "default_top_n")]
        pub top_n: usize,

        /// Width of the frequency bars in console output
        #[serde(default = "default_bar_width")]
        pub bar_width: usize,

        /// Wrap console output in triple backticks
        #[serde(default)]
        pub use_markdown: bool,
    }

    impl Default for AnalyzerConfig {
        fn default() -> Self {
            Self {
                top_n: default_top_n(),
                bar_width: default_bar_width(),
                use_markdown: false,
            }
        }
    }

    /// Create default configuration
    pub fn default_config() -> Value {
        serde_json::json!({
            "top_n": DEFAULT_TOP_N,
            "bar_width": default_bar_width(),
            "use_markdown": false
        })
    }

    /// Load configuration from file if provided
    ///
    /// A missing file or invalid JSON is logged and falls back to the defaults.
    pub fn load_config(config_path: Option<&Path>) -> AnalyzerConfig {
        let path = match config_path {
            Some(path) => path,
            None => return AnalyzerConfig::default(),
        };

        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return AnalyzerConfig::default();
        }

        let config_str = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                error!("Could not read configuration file {}: {}", path.display(), e);
                return AnalyzerConfig::default();
            }
        };

        match serde_json::from_str(&config_str) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("Invalid JSON in configuration file: {}", e);
                AnalyzerConfig::default()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_default_config_matches_struct() {
            let config: AnalyzerConfig =
                serde_json::from_value(default_config()).expect("Invalid default config");
            assert_eq!(config, AnalyzerConfig::default());
        }

        #[test]
        fn test_partial_config_uses_defaults() {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("config.json");
            std::fs::write(&path, r#"{"top_n": 3}"#).expect("Failed to write config");

            let config = load_config(Some(&path));
            assert_eq!(config.top_n, 3);
            assert_eq!(config.bar_width, 20);
            assert!(!config.use_markdown);
        }

        #[test]
        fn test_missing_or_invalid_config_falls_back() {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let missing = dir.path().join("missing.json");
            assert_eq!(load_config(Some(&missing)), AnalyzerConfig::default());

            let invalid = dir.path().join("invalid.json");
            std::fs::write(&invalid, "{ not json").expect("Failed to write config");
            assert_eq!(load_config(Some(&invalid)), AnalyzerConfig::default());

            assert_eq!(load_config(None), AnalyzerConfig::default());
        }
    }
}
