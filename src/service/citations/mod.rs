//! Citation extraction from generated legal text
//!
//! Recognizes the phrase form `Section <code> IPC`, where `<code>` is one or
//! more digits optionally followed by letters. The surrounding words match
//! case-insensitively; the letter suffix of the code is canonicalized to
//! uppercase so that `498a` and `498A` name the same section.

use std::sync::LazyLock;

use regex::Regex;

pub mod validation;

pub use validation::{verify_citations, verify_draft};

/// `\b` on both ends keeps the pattern from matching inside longer tokens,
/// and the code must be followed by whitespace, so `12abc3` never matches.
static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:section)\s+(\d+[A-Za-z]*)\s+(?i:ipc)\b")
        .unwrap_or_else(|e| unreachable!("citation pattern is a valid literal: {e}"))
});

/// Extract citations in order of appearance. Duplicates are kept.
pub fn extract_citations(text: &str) -> Vec<String> {
    CITATION_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|code| canonicalize(code.as_str()))
        .collect()
}

/// Trim and uppercase the letter suffix; digits are left untouched.
pub fn canonicalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
