//! Line normalisation and token filtering

/// Characters replaced by a single space before splitting a line
pub const PUNCTUATION: &[char] = &[
    '\n', '\t', ',', '.', '-', '!', '?', '\'', ':', '_', '[', ']', '"', '`', '(', ')', ';',
];

/// Single-letter words that are kept in the vocabulary
pub const SINGLE_LETTER_WORDS: &[&str] = &["a", "i"];

/// Lowercase and trim a line, then blank out punctuation
///
/// Each punctuation character becomes exactly one space; runs are not collapsed.
///
/// # Examples
/// ```
/// use madison_words::corpus::tokenizer::normalize_line;
///
/// assert_eq!(normalize_line("  Hello, World!\n"), "hello  world ");
/// ```
#[must_use]
pub fn normalize_line(line: &str) -> String {
    line.to_lowercase()
        .trim()
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect()
}

/// Check whether a token may enter the vocabulary
///
/// Rejects empty tokens, tokens with any non-alphabetic character, and
/// single letters other than "a" and "i".
#[must_use]
pub fn is_acceptable(token: &str) -> bool {
    if token.is_empty() || !token.chars().all(char::is_alphabetic) {
        return false;
    }
    token.chars().count() != 1 || SINGLE_LETTER_WORDS.contains(&token)
}

/// Split a raw line into accepted vocabulary tokens
#[must_use]
pub fn tokens(line: &str) -> Vec<String> {
    normalize_line(line)
        .split_whitespace()
        .filter(|token| is_acceptable(token))
        .map(str::to_owned)
        .collect()
}
