//! Text Analyzer - bracket balance checking and word statistics for text files
//!
//! The main entry point for the text analyzer application. It parses command-line
//! arguments, reads the document and prints or exports the analysis.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{info, warn, LevelFilter};
use std::fs::File;
use std::path::PathBuf;
use std::process;

use text_analyzer::config::{load_config, AnalyzerConfig};
use text_analyzer::utils::file_utils::{get_file_metadata, read_text_file};
use text_analyzer::utils::output_formatter::{self, FormatOptions};
use text_analyzer::TextAnalyzer;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "text_analyzer",
    version,
    about = "Check bracket balance and word statistics of a text file",
    long_about = "This tool analyzes a text file and reports:
- Unmatched or mismatched brackets with their line and position
- Line, word and character counts
- The most frequent words"
)]
struct Args {
    /// Path to the file to analyze
    #[arg(name = "FILE")]
    file_path: PathBuf,

    /// Number of most frequent words to show (default: 10)
    #[arg(long = "top")]
    top: Option<usize>,

    /// Width of the frequency bars (default: 20)
    #[arg(long = "bar-width")]
    bar_width: Option<usize>,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export the report to a JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export the word frequency table to a CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Export the report to an HTML file
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write log output to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args);

    let config = merge_config(load_config(args.config.as_deref()), &args);

    if !args.quiet {
        println!(
            "\n{}",
            format!("§ Analyzing file: {}", args.file_path.display()).cyan()
        );
    }

    let text = match read_text_file(&args.file_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", format!("✗ Error: {}", e).red());
            process::exit(1);
        }
    };

    let metadata = match get_file_metadata(&args.file_path, &text) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Could not read metadata for {}: {}", args.file_path.display(), e);
            Vec::new()
        }
    };

    let mut analyzer = TextAnalyzer::new(config.top_n);
    let report = analyzer.analyze(&text);

    let file_name = args.file_path.to_string_lossy().to_string();

    if let Some(json_path) = &args.json {
        output_formatter::export_report_json(&report, &file_name, &metadata, json_path)?;
        info!("Wrote JSON report to {}", json_path.display());
    }

    if let Some(csv_path) = &args.csv {
        output_formatter::create_csv_report(&report, csv_path)?;
        info!("Wrote CSV report to {}", csv_path.display());
    }

    if let Some(html_path) = &args.html {
        output_formatter::create_html_report(&report, &file_name, &metadata, html_path)?;
        info!("Wrote HTML report to {}", html_path.display());
    }

    if !args.quiet {
        let options = FormatOptions {
            bar_width: config.bar_width,
            use_markdown: config.use_markdown,
        };
        print!("{}", output_formatter::format_report(&report, &metadata, &options));
    }

    Ok(())
}

/// Command line flags take precedence over the configuration file
fn merge_config(mut config: AnalyzerConfig, args: &Args) -> AnalyzerConfig {
    if let Some(top) = args.top {
        config.top_n = top;
    }
    if let Some(bar_width) = args.bar_width {
        config.bar_width = bar_width;
    }
    if args.md {
        config.use_markdown = true;
    }
    config
}

/// Set up logging to stderr or to the requested log file
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        match File::create(log_file) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Could not open log file {}: {}", log_file.display(), e),
        }
    }

    builder.init();
}
