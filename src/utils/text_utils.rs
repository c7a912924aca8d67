//! Text helpers shared by the analysis components
//!
//! Line and word splitting live here so the balance checker, the statistics
//! pass and the frequency counter agree on what a line and a word are.

use std::borrow::Cow;

/// Convert `\r\n` and lone `\r` line breaks to `\n`
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split text into lines.
///
/// `\n`, `\r\n` and a lone `\r` each end a line and are not part of it. The
/// empty string yields a single empty line, and a trailing line break yields
/// a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    // Both break bytes are ASCII, so every slice boundary is a char boundary
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Whether `c` separates words: Unicode whitespace plus the ASCII
/// file, group, record and unit separators
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split a line into non-empty tokens on word separators
pub fn split_words(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_word_separator).filter(|word| !word.is_empty())
}

/// Round a value to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
