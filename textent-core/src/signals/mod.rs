// textent-core/src/signals/mod.rs
//! Structural disorder signals.
//!
//! Each signal is an independent ratio in `[0, 1]` relative to the
//! whitespace-free character count, so the scorer can weight them without
//! renormalizing.

use crate::lexicon::{
    is_cjk, ASCII_SYMBOL_RUN, BASIC_PUNCT_SPLIT, LOGIC_WORDS, PARAGRAPH_SPLIT, PUNCT_RUN,
    SENTENCE_SPLIT, SPECIAL_SYMBOLS,
};

/// Texts below this whitespace-free length judge sentences more strictly.
pub const SHORT_TEXT_LIMIT: usize = 200;

/// Length-dependent judgment thresholds, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// A sentence longer than this counts as overlong.
    pub long_sentence: usize,
    /// A punctuation-free segment at least this long counts against the text.
    pub no_punct: usize,
}

impl Thresholds {
    /// Short texts naturally run shorter sentences, so the bar scales down.
    pub fn for_length(total_chars: usize) -> Self {
        if total_chars < SHORT_TEXT_LIMIT {
            Self { long_sentence: 20, no_punct: 20 }
        } else {
            Self { long_sentence: 30, no_punct: 25 }
        }
    }
}

/// The independent disorder ratios extracted from one text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StructuralSignals {
    /// Share of characters sitting in overlong sentences.
    pub long_sentence_ratio: f64,
    /// Share of characters in long punctuation-free stretches.
    pub no_punct_ratio: f64,
    /// Share of excess characters in runs of three-or-more identical CJK chars.
    pub repeat_ratio: f64,
    /// Share of the text taken by its single longest paragraph.
    pub longest_para_ratio: f64,
    /// Share of characters in runs of consecutive punctuation.
    pub punct_run_ratio: f64,
    /// Share of emoji/symbol characters and repeated ASCII operators.
    pub special_symbol_ratio: f64,
    /// Share of characters belonging to logical-connective words.
    pub logic_ratio: f64,
}

/// Extracts all structural signals in one pass over `text`.
///
/// `raw` must be `text` with all whitespace removed; sentence and paragraph
/// splits run against the original text, run detection against `raw`.
pub fn extract_signals(text: &str, raw: &str, thresholds: Thresholds) -> StructuralSignals {
    let total_chars = raw.chars().count();
    if total_chars == 0 {
        return StructuralSignals::default();
    }
    let total = total_chars as f64;

    let long_sentence_chars: usize = SENTENCE_SPLIT
        .split(text)
        .map(stripped_len)
        .filter(|&len| len > thresholds.long_sentence)
        .sum();

    let no_punct_chars: usize = BASIC_PUNCT_SPLIT
        .split(text)
        .map(stripped_len)
        .filter(|&len| len >= thresholds.no_punct)
        .sum();

    let punct_run_chars: usize = PUNCT_RUN
        .find_iter(raw)
        .map(|m| m.as_str().chars().count())
        .sum();

    // Each special-symbol match is a single scalar; ASCII runs contribute
    // their full length.
    let special_symbol_chars = SPECIAL_SYMBOLS.find_iter(raw).count()
        + ASCII_SYMBOL_RUN
            .find_iter(raw)
            .map(|m| m.as_str().chars().count())
            .sum::<usize>();

    let logic_chars: usize = LOGIC_WORDS
        .iter()
        .map(|w| w.chars().count() * text.matches(w).count())
        .sum();

    StructuralSignals {
        long_sentence_ratio: long_sentence_chars as f64 / total,
        no_punct_ratio: (no_punct_chars as f64 / total).min(1.0),
        repeat_ratio: repeated_cjk_excess(raw) as f64 / total,
        longest_para_ratio: longest_paragraph_len(text) as f64 / total,
        punct_run_ratio: punct_run_chars as f64 / total,
        special_symbol_ratio: special_symbol_chars as f64 / total,
        logic_ratio: logic_chars as f64 / total,
    }
}

fn stripped_len(segment: &str) -> usize {
    segment.chars().filter(|c| !c.is_whitespace()).count()
}

/// Counts excess characters in runs of three-or-more identical CJK
/// characters: a run of length n contributes n - 1.
/// The regex crate has no backreferences, so runs are scanned by hand.
fn repeated_cjk_excess(raw: &str) -> usize {
    let chars: Vec<char> = raw.chars().collect();
    let mut excess = 0;
    let mut i = 0;
    while i < chars.len() {
        let mut j = i + 1;
        while j < chars.len() && chars[j] == chars[i] {
            j += 1;
        }
        if is_cjk(chars[i]) && j - i >= 3 {
            excess += j - i - 1;
        }
        i = j;
    }
    excess
}

/// Whitespace-free length of the longest paragraph. Newlines delimit
/// paragraphs when present; otherwise sentence terminators stand in so that
/// unbroken single-line text is still judged.
fn longest_paragraph_len(text: &str) -> usize {
    let splitter = if text.contains('\n') {
        &*PARAGRAPH_SPLIT
    } else {
        &*SENTENCE_SPLIT
    };
    splitter.split(text).map(stripped_len).max().unwrap_or(0)
}
