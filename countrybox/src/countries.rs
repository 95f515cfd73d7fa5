//! Built-in vocabulary and word-list loading.

use anyhow::{Context, Result};
use std::path::Path;

/// Some countries, in no particular order.
pub const COUNTRIES: &[&str] = &[
    "Nigeria",
    "Afghanistan",
    "Algeria",
    "American Samoa",
    "Bahamas",
    "Brazil",
    "Cameroon",
    "Denmark",
    "Egypt",
    "Finland",
    "Ivory Coast",
    "Jamaica",
    "Malaysia",
    "Netherlands",
    "Samoa",
    "Senegal",
    "Tunisia",
    "United Kingdom",
    "United States",
    "Vietnam",
    "Yemen",
    "Zambia",
];

/// Parse a word list: one entry per line, surrounding whitespace trimmed,
/// blank lines and `#` comments skipped.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load a word list from disk.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let words = parse_word_list(&content);
    if words.is_empty() {
        anyhow::bail!("word list {} is empty", path.display());
    }
    Ok(words)
}
