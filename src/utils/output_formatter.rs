//! Output formatter for analysis reports
//!
//! This module handles formatting and exporting analysis reports in various formats,
//! including console output, JSON, HTML, and CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::core::analyzer::AnalysisReport;

/// Width of section frames in console output
const FRAME_WIDTH: usize = 60;

/// Upper bound on the frequency bar length
pub const MAX_BAR_WIDTH: usize = 200;

const CHECK: &str = "✓";
const CROSS: &str = "✗";
const ARROW: &str = "→";
const BULLET: &str = "•";
const DIAMOND: &str = "♦";
const STAR: &str = "★";
const LINE: &str = "─";

/// Options controlling console output
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Length of the bar drawn for the most frequent word, capped at [`MAX_BAR_WIDTH`]
    pub bar_width: usize,
    /// Wrap output in triple backticks
    pub use_markdown: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            bar_width: 20,
            use_markdown: false,
        }
    }
}

/// Serializable view of a report together with where it came from
#[derive(Serialize)]
struct ReportDocument<'a> {
    file: &'a str,
    metadata: serde_json::Map<String, serde_json::Value>,
    balanced: bool,
    errors: Vec<serde_json::Value>,
    statistics: &'a crate::core::statistics::Statistics,
    words: &'a crate::core::analyzer::WordSummary,
}

impl<'a> ReportDocument<'a> {
    fn new(report: &'a AnalysisReport, file: &'a str, metadata: &[(String, String)]) -> Self {
        let metadata = metadata
            .iter()
            .map(|(key, value)| (key.clone(), json!(value)))
            .collect();

        let errors = report
            .balance
            .errors
            .iter()
            .map(|e| {
                json!({
                    "line": e.line,
                    "column": e.column,
                    "symbol": e.symbol.to_string(),
                    "kind": e.kind,
                    "message": e.message(),
                })
            })
            .collect();

        Self {
            file,
            metadata,
            balanced: report.balance.balanced,
            errors,
            statistics: &report.statistics,
            words: &report.words,
        }
    }
}

fn header(text: &str) -> String {
    let padding = FRAME_WIDTH.saturating_sub(text.chars().count() + 2) / 2;
    let rule = LINE.repeat(padding);
    format!("\n{}", format!("╭{} {} {}╮", rule, text, rule).cyan())
}

fn footer() -> String {
    format!("{}", format!("╰{}╯", LINE.repeat(FRAME_WIDTH)).cyan())
}

fn stat_line(label: &str, value: &str) -> String {
    format!("{} {}", format!("{} {}:", DIAMOND, label).blue(), value)
}

/// Format an analysis report for console output
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `metadata` - File metadata shown in a leading section when not empty
/// * `options` - Bar width and markdown wrapping
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(
    report: &AnalysisReport,
    metadata: &[(String, String)],
    options: &FormatOptions,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    if options.use_markdown {
        lines.push("```".to_string());
    }

    if !metadata.is_empty() {
        lines.push(header("File Information"));
        for (key, value) in metadata {
            lines.push(stat_line(key, value));
        }
        lines.push(footer());
    }

    lines.push(header("Syntax Analysis"));
    if report.balance.errors.is_empty() {
        lines.push(format!("{} No syntax errors found.", CHECK).green().to_string());
    } else {
        lines.push("Syntax errors found:".red().to_string());
        for error in &report.balance.errors {
            lines.push(format!("{} {}", ARROW, error));
        }
    }
    lines.push(footer());

    let stats = &report.statistics;
    lines.push(header("Text Statistics"));
    lines.push(stat_line("Lines", &stats.line_count.to_string()));
    lines.push(stat_line("Characters", &stats.char_count.to_string()));
    lines.push(stat_line("Words", &stats.word_count.to_string()));
    lines.push(stat_line("Average word length", &format!("{:.2}", stats.avg_word_length)));
    lines.push(stat_line("Unique words", &stats.unique_words.to_string()));
    lines.push(footer());

    lines.push(header("Word Frequency Analysis"));
    let top_words = &report.words.top_words;
    match top_words.iter().map(|w| w.count).max() {
        Some(max_count) => {
            let bar_width = options.bar_width.min(MAX_BAR_WIDTH);
            for entry in top_words {
                let bar_length = entry.count.saturating_mul(bar_width) / max_count;
                lines.push(format!(
                    "{} {:<15} {:>5} {}",
                    STAR.yellow(),
                    entry.word,
                    entry.count,
                    LINE.repeat(bar_length).blue()
                ));
            }
            lines.push(String::new());
            lines.push(stat_line("Total words", &report.words.total_words.to_string()));
            lines.push(stat_line("Distinct words", &report.words.distinct_words.to_string()));
            lines.push(stat_line("Words appearing once", &report.words.words_once.to_string()));
        }
        None => lines.push(format!("{} No words found in text.", BULLET)),
    }
    lines.push(footer());

    lines.push(header("Balance Check"));
    if report.balance.balanced {
        lines.push(
            format!("{} All brackets and parentheses are properly balanced.", CHECK)
                .green()
                .to_string(),
        );
    } else {
        lines.push(
            format!("{} Warning: Unbalanced brackets or parentheses detected.", CROSS)
                .red()
                .to_string(),
        );
    }
    lines.push(footer());

    if options.use_markdown {
        lines.push("```".to_string());
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Export a report to a JSON file
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `file` - Name of the analyzed file
/// * `metadata` - File metadata
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_report_json(
    report: &AnalysisReport,
    file: &str,
    metadata: &[(String, String)],
    output_path: &Path,
) -> Result<()> {
    let document = ReportDocument::new(report, file, metadata);

    let out = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(out, &document).context("Failed to write JSON data")?;

    Ok(())
}

/// Create an HTML report
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `file` - Name of the analyzed file
/// * `metadata` - File metadata
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_html_report(
    report: &AnalysisReport,
    file: &str,
    metadata: &[(String, String)],
    output_path: &Path,
) -> Result<()> {
    let mut handlebars = Handlebars::new();

    const HTML_TEMPLATE: &str = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Text Analysis Report</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                line-height: 1.6;
                color: #333;
                max-width: 1000px;
                margin: 0 auto;
                padding: 20px;
            }
            h1 {
                color: #2c3e50;
                border-bottom: 2px solid #3498db;
                padding-bottom: 10px;
            }
            h2 {
                color: #2980b9;
                margin-top: 30px;
            }
            .section {
                background-color: #f8f9fa;
                border-radius: 5px;
                padding: 15px;
                margin-bottom: 20px;
                box-shadow: 0 2px 5px rgba(0,0,0,0.1);
            }
            .ok { color: #27ae60; }
            .bad { color: #c0392b; }
            .timestamp {
                color: #7f8c8d;
                font-size: 0.9em;
                margin-bottom: 30px;
            }
            table { border-collapse: collapse; }
            td, th { padding: 4px 12px; border-bottom: 1px solid #eee; text-align: left; }
            .bar {
                background-color: #3498db;
                height: 10px;
            }
        </style>
    </head>
    <body>
        <h1>Text Analysis Report</h1>
        <div class="timestamp">{{file}} &middot; generated on {{timestamp}}</div>

        {{#if metadata}}
        <div class="section">
            <h2>File Information</h2>
            <table>
                {{#each metadata}}
                <tr><th>{{@key}}</th><td>{{this}}</td></tr>
                {{/each}}
            </table>
        </div>
        {{/if}}

        <div class="section">
            <h2>Syntax Analysis</h2>
            {{#if errors}}
            <ul>
                {{#each errors}}
                <li class="bad">Line {{line}}: {{message}}</li>
                {{/each}}
            </ul>
            {{else}}
            <p class="ok">No syntax errors found.</p>
            {{/if}}
        </div>

        <div class="section">
            <h2>Text Statistics</h2>
            <table>
                <tr><th>Lines</th><td>{{statistics.line_count}}</td></tr>
                <tr><th>Characters</th><td>{{statistics.char_count}}</td></tr>
                <tr><th>Words</th><td>{{statistics.word_count}}</td></tr>
                <tr><th>Average word length</th><td>{{avg_word_length}}</td></tr>
                <tr><th>Unique words</th><td>{{statistics.unique_words}}</td></tr>
            </table>
        </div>

        <div class="section">
            <h2>Word Frequency Analysis</h2>
            {{#if words}}
            <table>
                {{#each words}}
                <tr><td>{{word}}</td><td>{{count}}</td><td><div class="bar" style="width: {{percent}}px"></div></td></tr>
                {{/each}}
            </table>
            {{else}}
            <p>No words found in text.</p>
            {{/if}}
        </div>

        <div class="section">
            <h2>Balance Check</h2>
            {{#if balanced}}
            <p class="ok">All brackets and parentheses are properly balanced.</p>
            {{else}}
            <p class="bad">Warning: Unbalanced brackets or parentheses detected.</p>
            {{/if}}
        </div>
    </body>
    </html>
    "#;

    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let document = ReportDocument::new(report, file, metadata);
    let max_count = report.words.top_words.iter().map(|w| w.count).max().unwrap_or(1);
    let words: Vec<_> = report
        .words
        .top_words
        .iter()
        .map(|w| json!({ "word": w.word, "count": w.count, "percent": w.count.saturating_mul(200) / max_count }))
        .collect();

    let template_data = json!({
        "file": document.file,
        "timestamp": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "metadata": document.metadata,
        "errors": document.errors,
        "statistics": document.statistics,
        "avg_word_length": format!("{:.2}", report.statistics.avg_word_length),
        "words": words,
        "balanced": document.balanced,
    });

    let html = handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")?;

    let mut out = File::create(output_path)
        .context(format!("Failed to create HTML output file: {}", output_path.display()))?;

    out.write_all(html.as_bytes()).context("Failed to write HTML data")?;

    Ok(())
}

/// Create a CSV file of the word frequency table
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `output_path` - Path where the CSV file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn create_csv_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let out = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(out);

    writer
        .write_record(["Rank", "Word", "Count"])
        .context("Failed to write CSV header")?;

    for (i, entry) in report.words.top_words.iter().enumerate() {
        let rank = (i + 1).to_string();
        let count = entry.count.to_string();
        writer
            .write_record([rank.as_str(), entry.word.as_str(), count.as_str()])
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::TextAnalyzer;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_contains_all_sections() {
        plain();
        let report = TextAnalyzer::default().analyze("Hello (World)\nhello again");
        let output = format_report(&report, &[], &FormatOptions::default());

        assert!(output.contains("Syntax Analysis"));
        assert!(output.contains("Text Statistics"));
        assert!(output.contains("Word Frequency Analysis"));
        assert!(output.contains("Balance Check"));
        assert!(output.contains("No syntax errors found."));
        assert!(output.contains("All brackets and parentheses are properly balanced."));
        assert!(!output.contains("File Information"));
    }

    #[test]
    fn test_format_lists_errors_with_lines() {
        plain();
        let report = TextAnalyzer::default().analyze("ok\n(]");
        let output = format_report(&report, &[], &FormatOptions::default());

        assert!(output.contains("Syntax errors found:"));
        assert!(output.contains("Line 2: Unmatched closing symbol ']' at position 2"));
        assert!(output.contains("Line 2: Unmatched opening symbol '(' at position 1"));
        assert!(output.contains("Warning: Unbalanced brackets or parentheses detected."));
    }

    #[test]
    fn test_format_scales_bars() {
        plain();
        let report = TextAnalyzer::default().analyze("a a a a b b c");
        let options = FormatOptions { bar_width: 8, use_markdown: false };
        let output = format_report(&report, &[], &options);

        let bar_of = |word: &str| {
            output
                .lines()
                .find(|l| l.starts_with(&format!("{} {:<15}", STAR, word)))
                .map(|l| l.matches(LINE).count())
        };
        assert_eq!(bar_of("a"), Some(8));
        assert_eq!(bar_of("b"), Some(4));
        assert_eq!(bar_of("c"), Some(2));
    }

    #[test]
    fn test_format_caps_bar_width() {
        plain();
        let report = TextAnalyzer::default().analyze("a a b");
        let options = FormatOptions { bar_width: usize::MAX, use_markdown: false };
        let output = format_report(&report, &[], &options);

        let bar_of = |word: &str| {
            output
                .lines()
                .find(|l| l.starts_with(&format!("{} {:<15}", STAR, word)))
                .map(|l| l.matches(LINE).count())
        };
        assert_eq!(bar_of("a"), Some(MAX_BAR_WIDTH));
        assert_eq!(bar_of("b"), Some(MAX_BAR_WIDTH / 2));
    }

    #[test]
    fn test_format_empty_text() {
        plain();
        let report = TextAnalyzer::default().analyze("");
        let output = format_report(&report, &[], &FormatOptions::default());
        assert!(output.contains("No words found in text."));
        assert!(output.contains("Lines: 1"));
    }

    #[test]
    fn test_format_markdown_and_metadata() {
        plain();
        let report = TextAnalyzer::default().analyze("x");
        let metadata = vec![("size".to_string(), "1 bytes".to_string())];
        let options = FormatOptions { bar_width: 20, use_markdown: true };
        let output = format_report(&report, &metadata, &options);

        assert!(output.starts_with("```\n"));
        assert!(output.ends_with("```\n"));
        assert!(output.contains("File Information"));
        assert!(output.contains("size: 1 bytes"));
    }

    #[test]
    fn test_export_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("report.json");
        let report = TextAnalyzer::default().analyze("word word (");

        export_report_json(&report, "doc.txt", &[], &path).expect("Failed to export JSON");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("Failed to read JSON"))
                .expect("Invalid JSON");
        assert_eq!(value["file"], "doc.txt");
        assert_eq!(value["balanced"], false);
        assert_eq!(value["errors"][0]["kind"], "unmatched_opening");
        assert_eq!(value["errors"][0]["message"], "Unmatched opening symbol '(' at position 11");
        assert_eq!(value["statistics"]["word_count"], 3);
        assert_eq!(value["words"]["top_words"][0]["word"], "word");
        assert_eq!(value["words"]["top_words"][0]["count"], 2);
    }

    #[test]
    fn test_export_csv() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("words.csv");
        let report = TextAnalyzer::default().analyze("beta alpha beta");

        create_csv_report(&report, &path).expect("Failed to export CSV");

        let content = std::fs::read_to_string(&path).expect("Failed to read CSV");
        assert_eq!(content, "Rank,Word,Count\n1,beta,2\n2,alpha,1\n");
    }

    #[test]
    fn test_export_html() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("report.html");
        let report = TextAnalyzer::default().analyze("{ unclosed");

        create_html_report(&report, "doc.txt", &[], &path).expect("Failed to export HTML");

        let html = std::fs::read_to_string(&path).expect("Failed to read HTML");
        assert!(html.contains("Text Analysis Report"));
        assert!(html.contains("Line 1: Unmatched opening symbol"));
        assert!(html.contains("unclosed"));
        assert!(html.contains("Warning: Unbalanced brackets"));
    }
}
