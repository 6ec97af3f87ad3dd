//! Sentence and word segmentation for English text.
//!
//! Both passes start from UAX #29 boundaries and then adjust them towards
//! Penn Treebank conventions:
//!
//! - a sentence only ends at `.`, `!` or `?` (optionally followed by closing
//!   quotes or brackets), and never after a common abbreviation such as
//!   "Dr." or "e.g.", nor after "No." or "Vol." when a number follows
//! - runs joined by a hyphen, slash or dash stay whole ("well-known",
//!   "buy/sell")
//! - clitics are split off ("don't" -> "do", "n't"; "John's" -> "John", "'s")
//! - fused forms are split ("cannot" -> "can", "not"; "gonna" -> "gon", "na")
//!
//! Every token borrows from the input text.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::token_filter::filter_words;

/// Common abbreviations that should NOT be treated as sentence boundaries.
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "sr", "jr",
        "inc", "ltd", "corp", "co", "llc",
        "e.g", "i.e", "vs", "etc", "approx",
        "u.s", "u.k", "p.m", "a.m",
        "st", "ave", "blvd", "dept",
    ]
    .into_iter()
    .collect()
});

/// Abbreviations that only hold a sentence open when a number follows.
const NUMBERING_ABBREVIATIONS: &[&str] = &["no", "nos", "vol", "fig"];

/// Connectors that do not split a token when nothing surrounds them.
const JOINERS: &[&str] = &["-", "/", "\u{2013}", "\u{2014}"];

const SENTENCE_TERMINALS: &[char] = &['.', '!', '?'];
const CLOSING_PUNCTUATION: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}', '\u{bb}'];
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Clitic suffixes split off after an apostrophe.
const CLITICS: &[&str] = &["s", "m", "d", "ll", "re", "ve"];

/// Fused forms and the byte index they split at.
const CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("d'ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("wanna", 3),
];

/// Split `text` into sentences and words.
///
/// Empty input yields two empty sequences.
pub fn segment(text: &str) -> (Vec<&str>, Vec<&str>) {
    (sentences(text), words(text))
}

/// Split `text` into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (offset, piece) in text.split_sentence_bound_indices() {
        let begin = *start.get_or_insert(offset);
        if closes_sentence(piece, &text[offset + piece.len()..]) {
            push_trimmed(&mut sentences, &text[begin..offset + piece.len()]);
            start = None;
        }
    }

    if let Some(begin) = start {
        push_trimmed(&mut sentences, &text[begin..]);
    }

    sentences
}

/// Split `text` into word and punctuation tokens, dropping whitespace.
pub fn words(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let bounds: Vec<(usize, &str)> = text
        .split_word_bound_indices()
        .filter(|(_, token)| !token.trim().is_empty())
        .collect();

    let mut idx = 0;
    while idx < bounds.len() {
        let (offset, token) = bounds[idx];
        let end = offset + token.len();

        // Re-join `word-word`, `word/word` when nothing separates the pieces.
        if JOINERS.contains(&token) && idx + 1 < bounds.len() {
            if let Some(last) = spans.last_mut() {
                let (next_offset, next) = bounds[idx + 1];
                if last.1 == offset
                    && next_offset == end
                    && is_wordlike(&text[last.0..last.1])
                    && is_wordlike(next)
                {
                    last.1 = next_offset + next.len();
                    idx += 2;
                    continue;
                }
            }
        }

        spans.push((offset, end));
        idx += 1;
    }

    let mut words = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        let token = &text[start..end];
        let spaced = text[end..].chars().next().map_or(true, char::is_whitespace);
        match clitic_split(token).or_else(|| contraction_split(token, spaced)) {
            Some(at) => {
                words.push(&token[..at]);
                words.push(&token[at..]);
            }
            None => words.push(token),
        }
    }
    words
}

/// The per-document token view consumed by the metrics calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet<'a> {
    text: &'a str,
    sentences: Vec<&'a str>,
    words: Vec<&'a str>,
    filtered: Vec<&'a str>,
}

impl<'a> TokenSet<'a> {
    /// Tokenize and filter `text`.
    pub fn from_text(text: &'a str) -> Self {
        let (sentences, words) = segment(text);
        let filtered = filter_words(&words);
        Self {
            text,
            sentences,
            words,
            filtered,
        }
    }

    /// Assemble a token set from pre-computed parts.
    pub fn from_parts(
        text: &'a str,
        sentences: Vec<&'a str>,
        words: Vec<&'a str>,
        filtered: Vec<&'a str>,
    ) -> Self {
        Self {
            text,
            sentences,
            words,
            filtered,
        }
    }

    /// The original document text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    /// Raw word sequence, punctuation included.
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Alphabetic, non-stopword subset of [`words`](Self::words).
    pub fn filtered(&self) -> &[&'a str] {
        &self.filtered
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

fn closes_sentence(piece: &str, rest: &str) -> bool {
    let body = piece.trim_end().trim_end_matches(CLOSING_PUNCTUATION);
    if !body.ends_with(SENTENCE_TERMINALS) {
        return false;
    }
    if !body.ends_with('.') {
        return true;
    }

    let before_period = &body[..body.len() - 1];
    let last_word = before_period
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or("");
    let last_word = last_word.to_lowercase();
    if ABBREVIATIONS.contains(last_word.as_str()) {
        return false;
    }
    let numbered = rest
        .trim_start()
        .starts_with(|c: char| c.is_ascii_digit());
    !(numbered && NUMBERING_ABBREVIATIONS.contains(&last_word.as_str()))
}

fn is_wordlike(token: &str) -> bool {
    token.chars().next().map_or(false, char::is_alphanumeric)
}

/// Byte index at which a clitic starts, if `token` carries one.
fn clitic_split(token: &str) -> Option<usize> {
    let lower = token.to_lowercase();
    if lower.len() != token.len() {
        return None;
    }

    for apostrophe in APOSTROPHES {
        let negation = format!("n{}t", apostrophe);
        if lower.len() > negation.len() && lower.ends_with(&negation) {
            return Some(token.len() - negation.len());
        }
    }

    let at = token.rfind(APOSTROPHES)?;
    if at == 0 {
        return None;
    }
    let apostrophe_len = token[at..].chars().next().map_or(1, char::len_utf8);
    let suffix = &lower[at + apostrophe_len..];
    if CLITICS.contains(&suffix) {
        Some(at)
    } else {
        None
    }
}

/// Byte index at which a fused form splits. `wanna` only splits before
/// whitespace or the end of the text.
fn contraction_split(token: &str, spaced: bool) -> Option<usize> {
    CONTRACTIONS
        .iter()
        .find(|(form, _)| token.eq_ignore_ascii_case(form))
        .filter(|(form, _)| *form != "wanna" || spaced)
        .map(|&(_, at)| at)
}
