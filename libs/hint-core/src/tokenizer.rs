//! Splits hint text into alternating word and non-word runs.

/// A maximal run of hint text.
///
/// Word tokens hold ASCII letters only; every other character (spaces,
/// digits, punctuation, non-ASCII) lands in a non-word token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_word: bool,
}

impl<'a> Token<'a> {
    /// True for a non-word token made only of whitespace.
    pub fn is_whitespace(&self) -> bool {
        !self.is_word && self.text.chars().all(char::is_whitespace)
    }
}

/// Tokenize a hint. Concatenating the token texts yields the input.
pub fn tokenize(hint: &str) -> Vec<Token<'_>> {
    let bytes = hint.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;

    // Multi-byte UTF-8 sequences never contain ASCII letters, so every
    // class change falls on a char boundary.
    while start < bytes.len() {
        let is_word = bytes[start].is_ascii_alphabetic();
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_alphabetic() != is_word)
            .map_or(bytes.len(), |offset| start + offset);

        tokens.push(Token {
            text: &hint[start..end],
            is_word,
        });
        start = end;
    }

    tokens
}
