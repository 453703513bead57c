//! Emphasis of headword occurrences inside a hint.
//!
//! The hint is tokenized into word and non-word runs and walked left to
//! right. At each word, phrase bases are tried first (exact word equality,
//! single whitespace runs between words), then single-word bases (substring
//! containment). A single-word match absorbs a preceding "to " and a
//! following parenthetical gloss:
//!
//! ```text
//! annotate("vex", "they plan to vex (irritate), often")
//!   -> "they plan " + **"to vex (irritate),"** + " often"
//! ```
//!
//! Segment texts always concatenate back to the hint unchanged.

use crate::bases::{derive_bases, SearchBase};
use crate::tokenizer::{tokenize, Token};
use crate::types::Segment;

/// Split `hint` into plain and emphasized segments for `headword`.
///
/// Total over all inputs: an empty hint yields no segments, a blank
/// headword yields the hint as a single plain segment.
pub fn annotate(headword: &str, hint: &str) -> Vec<Segment> {
    if hint.is_empty() {
        return Vec::new();
    }

    let bases = derive_bases(headword);
    if bases.is_empty() {
        return vec![Segment::plain(hint)];
    }

    let tokens = tokenize(hint);
    let mut builder = SegmentBuilder::default();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];

        if !token.is_word {
            builder.push_plain(token.text);
            i += 1;
            continue;
        }

        if let Some(end) = match_phrase(&tokens, i, &bases) {
            builder.push_emphasized(span_text(&tokens[i..end]));
            i = end;
            continue;
        }

        if bases.iter().any(|base| base.matches_word(token.text)) {
            let extension = extend_forward(&tokens, i);
            builder.push_word_match(extension.emphasized);
            if let Some(rest) = extension.remainder {
                builder.push_plain(rest);
            }
            i = extension.next;
            continue;
        }

        builder.push_plain(token.text);
        i += 1;
    }

    builder.finish()
}

/// Try every phrase base at `start`; returns the exclusive end token index
/// of the first full match.
fn match_phrase(tokens: &[Token<'_>], start: usize, bases: &[SearchBase]) -> Option<usize> {
    bases
        .iter()
        .filter(|base| base.is_phrase())
        .find_map(|base| phrase_end(tokens, start, &base.words))
}

fn phrase_end(tokens: &[Token<'_>], start: usize, words: &[String]) -> Option<usize> {
    let mut pos = start;

    for (k, word) in words.iter().enumerate() {
        if k > 0 {
            if !tokens.get(pos)?.is_whitespace() {
                return None;
            }
            pos += 1;
        }

        let token = tokens.get(pos)?;
        if !token.is_word || token.text.to_ascii_lowercase() != *word {
            return None;
        }
        pos += 1;
    }

    Some(pos)
}

fn span_text(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

/// A single-word match together with any absorbed parenthetical.
struct Extension<'a> {
    emphasized: String,
    /// Tail of the closing run that falls outside the parenthetical.
    remainder: Option<&'a str>,
    /// First token index after everything consumed.
    next: usize,
}

/// Absorb a parenthetical that follows the word at `index`, directly or
/// through whitespace, up to and including the first ")" and one comma
/// right after it.
fn extend_forward<'a>(tokens: &[Token<'a>], index: usize) -> Extension<'a> {
    let mut emphasized = tokens[index].text.to_string();
    let mut next = index + 1;

    let opens_paren = tokens
        .get(next)
        .is_some_and(|t| !t.is_word && t.text.trim_start().starts_with('('));
    if !opens_paren {
        return Extension {
            emphasized,
            remainder: None,
            next,
        };
    }

    while let Some(token) = tokens.get(next) {
        next += 1;

        if let Some(close) = token.text.find(')') {
            let mut cut = close + 1;
            if token.text[cut..].starts_with(',') {
                cut += 1;
            }
            emphasized.push_str(&token.text[..cut]);
            let rest = &token.text[cut..];
            return Extension {
                emphasized,
                remainder: (!rest.is_empty()).then_some(rest),
                next,
            };
        }

        emphasized.push_str(token.text);
    }

    // Unterminated "(": everything to the end belongs to the gloss.
    Extension {
        emphasized,
        remainder: None,
        next,
    }
}

/// Accumulates output segments, merging a "to " prefix into word matches.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    fn push_plain(&mut self, text: &str) {
        self.segments.push(Segment::plain(text));
    }

    fn push_emphasized(&mut self, text: String) {
        self.segments.push(Segment::emphasized(text));
    }

    /// Push a single-word match, pulling in the two previous segments when
    /// they read "to" followed by whitespace.
    fn push_word_match(&mut self, text: String) {
        let merged = match self.segments.as_slice() {
            [.., to, space]
                if to.text.eq_ignore_ascii_case("to")
                    && !space.emphasized
                    && space.is_whitespace() =>
            {
                Some(format!("{}{}{}", to.text, space.text, text))
            }
            _ => None,
        };

        match merged {
            Some(merged) => {
                self.segments.truncate(self.segments.len() - 2);
                self.push_emphasized(merged);
            }
            None => self.push_emphasized(text),
        }
    }

    fn finish(self) -> Vec<Segment> {
        self.segments
    }
}
