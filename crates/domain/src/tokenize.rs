// crates/domain/src/tokenize.rs

/// Punctuation characters treated as word separators.
///
/// Process-wide immutable configuration; matching is a plain character
/// comparison, no Unicode awareness beyond ASCII.
pub const DELIMITERS: &[char] = &[
    '.', ',', ';', ':', '?', '$', '@', '^', '<', '>', '#', '%', '`', '!', '*', '-', '=', '(', ')',
    '[', ']', '{', '}', '/', '"', '\'',
];

/// Split a line into lowercase words.
///
/// Each delimiter character is replaced by a space, the result is split on
/// whitespace, and every token is lowercased. Empty input yields an empty
/// vector; there are no error conditions.
pub fn tokenize(line: &str) -> Vec<String> {
    let stripped: String = line
        .chars()
        .map(|c| if DELIMITERS.contains(&c) { ' ' } else { c })
        .collect();
    stripped.split_whitespace().map(str::to_lowercase).collect()
}
