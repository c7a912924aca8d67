//! Simple example demonstrating how to use the Text Analyzer library

use text_analyzer::analyze_text;

fn main() {
    let text = r#"fn greet(name: &str) {
    println!("Hello, {}!", name);
    let parts = [1, 2, 3;
}
"#;

    let report = analyze_text(text, 5);

    if report.balance.balanced {
        println!("Brackets are balanced");
    } else {
        for error in &report.balance.errors {
            println!("{}", error);
        }
    }

    println!(
        "{} lines, {} words, average length {:.2}",
        report.statistics.line_count, report.statistics.word_count, report.statistics.avg_word_length
    );

    for entry in &report.words.top_words {
        println!("{:<10} {}", entry.word, entry.count);
    }
}
