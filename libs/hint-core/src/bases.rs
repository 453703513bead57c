//! Search bases derived from a card's headword.

/// Filler words dropped from the front of a headword ("the acumen", "to vex").
const FILLER_PREFIXES: [&str; 2] = ["the", "to"];

/// Shortest base that may match inside a longer word.
pub const MIN_SUBSTRING_LEN: usize = 3;

/// A lowercase form of the headword used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBase {
    pub text: String,
    pub words: Vec<String>,
}

impl SearchBase {
    fn new(text: String) -> Self {
        let words = text.split_whitespace().map(str::to_string).collect();
        Self { text, words }
    }

    /// Multi-word bases are matched word by word against the hint.
    pub fn is_phrase(&self) -> bool {
        self.words.len() > 1
    }

    /// Whether a single hint word counts as an occurrence of this base.
    ///
    /// Exact equality always matches; containment only for bases long
    /// enough to keep "to" or "a" from lighting up half the hint.
    pub fn matches_word(&self, word: &str) -> bool {
        if self.is_phrase() {
            return false;
        }

        let word = word.to_ascii_lowercase();
        if word == self.text {
            return true;
        }
        self.text.len() >= MIN_SUBSTRING_LEN && word.contains(&self.text)
    }
}

/// Derive the search bases for a headword, full form first.
///
/// Returns an empty list when the headword is blank.
pub fn derive_bases(headword: &str) -> Vec<SearchBase> {
    let normalized = headword.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    let stripped = strip_filler_prefix(&normalized).to_string();

    let mut bases = vec![SearchBase::new(normalized)];
    if !stripped.is_empty() && stripped != bases[0].text {
        bases.push(SearchBase::new(stripped));
    }
    bases
}

/// Remove a leading "the " / "to " from an already lowercased headword.
fn strip_filler_prefix(normalized: &str) -> &str {
    for prefix in FILLER_PREFIXES {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    normalized
}
