//! Sentence and word segmentation
//!
//! Both passes are rule-based and follow Unicode text segmentation
//! (UAX #29) through `unicode-segmentation`, with a few English-specific
//! adjustments on top:
//!
//! - a single line break inside a paragraph does not end a sentence
//! - a piece ending in a known abbreviation is glued to the next piece when
//!   the abbreviation is a title or the next piece starts lowercase or with
//!   a digit
//! - clitics (`'s`, `'re`, `'ve`, `'ll`, `'d`, `'m`, `n't`) are split off
//!   their stem

use crate::types::Sentence;
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period without necessarily ending the sentence
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "fig",
];

/// Abbreviations that precede a name and never end a sentence
const TITLE_ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "prof"];

/// Clitics split off after an apostrophe
const APOSTROPHE_CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Rule-based sentence and word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Lowercase abbreviations, without the trailing period
    abbreviations: FxHashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default abbreviation list
    pub fn new() -> Self {
        Self::with_abbreviations(DEFAULT_ABBREVIATIONS)
    }

    /// Create a tokenizer with a custom abbreviation list
    pub fn with_abbreviations<S: AsRef<str>>(abbreviations: &[S]) -> Self {
        let abbreviations = abbreviations
            .iter()
            .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        Self { abbreviations }
    }

    /// Split text into sentences, in order of appearance
    ///
    /// Sentences are trimmed; whitespace-only pieces are dropped. Offsets are
    /// byte offsets into `text`, and sentence text is copied verbatim, so a
    /// wrapped sentence keeps its line break.
    pub fn segment_sentences(&self, text: &str) -> Vec<Sentence> {
        // Same byte length as `text`, so spans apply to both
        let joined = join_wrapped_lines(text);

        let pieces: Vec<(usize, usize)> = joined
            .split_sentence_bound_indices()
            .filter_map(|(offset, piece)| {
                let trimmed = piece.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let start = offset + (piece.len() - piece.trim_start().len());
                Some((start, start + trimmed.len()))
            })
            .collect();

        let mut sentences = Vec::new();
        // Start of a piece held back because it ended in an abbreviation
        let mut pending: Option<usize> = None;

        for (i, &(piece_start, end)) in pieces.iter().enumerate() {
            let start = pending.take().unwrap_or(piece_start);

            let next = pieces.get(i + 1).map(|&(s, e)| &joined[s..e]);
            if next.is_some_and(|next| self.continues_into(&joined[piece_start..end], next)) {
                pending = Some(start);
                continue;
            }

            let index = sentences.len();
            sentences.push(Sentence::new(&text[start..end], start, end, index));
        }

        sentences
    }

    /// Split text into word candidates
    ///
    /// Punctuation comes back as separate tokens; only whitespace is dropped.
    /// Clitics become tokens of their own: `rust's` gives `rust` and `'s`,
    /// `don't` gives `do` and `n't`.
    pub fn segment_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();
        for token in text.split_word_bounds().filter(|w| !w.trim().is_empty()) {
            match split_clitic(token) {
                Some((stem, clitic)) => {
                    words.push(stem);
                    words.push(clitic);
                }
                None => words.push(token),
            }
        }
        words
    }

    /// Whether `piece` runs on into `next` instead of ending at its period
    fn continues_into(&self, piece: &str, next: &str) -> bool {
        let Some(abbreviation) = self.trailing_abbreviation(piece) else {
            return false;
        };
        if TITLE_ABBREVIATIONS.contains(&abbreviation.as_str()) {
            return true;
        }

        next.chars()
            .find(|c| c.is_alphanumeric())
            .is_some_and(|c| c.is_lowercase() || c.is_numeric())
    }

    /// The piece's final token, lowercased, when it is a known abbreviation
    /// followed by a period
    fn trailing_abbreviation(&self, piece: &str) -> Option<String> {
        let body = piece.strip_suffix('.')?;
        let last = body
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(body)
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        (!last.is_empty() && self.abbreviations.contains(&last)).then_some(last)
    }
}

/// Replace the line break of every whitespace run holding exactly one `\n`
/// with spaces. Runs with two or more (paragraph breaks) are left alone.
fn join_wrapped_lines(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }

    let mut joined = String::with_capacity(text.len());
    let mut run = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            joined.push(c);
            continue;
        }

        run.clear();
        run.push(c);
        while let Some(next) = chars.next_if(|c| c.is_whitespace()) {
            run.push(next);
        }

        if run.matches('\n').count() == 1 {
            joined.extend(run.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
        } else {
            joined.push_str(&run);
        }
    }

    Cow::Owned(joined)
}

/// Split a trailing clitic off `token`, returning `(stem, clitic)`
fn split_clitic(token: &str) -> Option<(&str, &str)> {
    let (pos, apostrophe) = token.char_indices().rev().find(|&(_, c)| c == '\'' || c == '\u{2019}')?;
    if pos == 0 {
        return None;
    }

    let suffix = token[pos + apostrophe.len_utf8()..].to_lowercase();
    if APOSTROPHE_CLITICS.contains(&suffix.as_str()) {
        return Some((&token[..pos], &token[pos..]));
    }

    // n't keeps the n: don't -> do + n't
    let stem = &token[..pos];
    if suffix == "t" && stem.len() > 1 && stem.ends_with(|c: char| c == 'n' || c == 'N') {
        let split = pos - 1;
        return Some((&token[..split], &token[split..]));
    }

    None
}

/// Whether a token counts as a word: non-empty and entirely alphanumeric
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
