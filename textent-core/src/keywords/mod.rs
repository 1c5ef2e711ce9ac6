// textent-core/src/keywords/mod.rs
//! Core-keyword extraction and scoring.
//!
//! Produces the three keyword metrics consumed by the entropy scorer:
//! concentration (how much of the meaningful text the keywords cover),
//! distribution (how evenly their occurrences spread), and relevance
//! (how many of them also appear in the document title).
//!
//! Keywords are matched as plain literal substrings over character
//! sequences. No pattern syntax applies, so user keywords containing
//! characters like `.` or `(` are inert by construction.

use std::collections::HashMap;

use crate::lexicon::{is_cjk, STOP_CHARS, STOP_WORDS};

/// How many terms auto-extraction keeps.
const CORE_KEYWORD_COUNT: usize = 3;

/// Concentration below this share of the valid text is flagged.
pub const LOW_CONCENTRATION_CUTOFF: f64 = 0.02;
/// Distribution below this evenness is flagged.
pub const POOR_DISTRIBUTION_CUTOFF: f64 = 0.3;
/// Relevance below this share of title-matched keywords is flagged.
pub const LOW_RELEVANCE_CUTOFF: f64 = 0.3;

/// How the document's core keywords sit in the text.
/// All three values are clamped to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordMetrics {
    /// Fraction of the meaningful text occupied by keyword occurrences.
    pub concentration: f64,
    /// How evenly the occurrences spread across the text (variance-based,
    /// 1.0 means perfectly even).
    pub distribution: f64,
    /// Fraction of the core keywords that also appear in the title.
    pub relevance: f64,
}

impl KeywordMetrics {
    /// The no-signal result: empty text or no usable keywords.
    pub const ZERO: Self = Self {
        concentration: 0.0,
        distribution: 0.0,
        relevance: 0.0,
    };

    /// Threshold checks used for both score penalties and diagnostics.
    pub fn flags(&self) -> KeywordFlags {
        KeywordFlags {
            low_concentration: self.concentration < LOW_CONCENTRATION_CUTOFF,
            poor_distribution: self.distribution < POOR_DISTRIBUTION_CUTOFF,
            low_relevance: self.relevance < LOW_RELEVANCE_CUTOFF,
        }
    }
}

/// Boolean view of [`KeywordMetrics`] against the fixed cutoffs.
#[derive(Debug, Clone, Copy)]
pub struct KeywordFlags {
    pub low_concentration: bool,
    pub poor_distribution: bool,
    pub low_relevance: bool,
}

/// Scores the core keywords of `text`.
///
/// When `user_keywords` is non-empty it is used directly (empty strings are
/// dropped); otherwise the top three terms by frequency are auto-extracted
/// from single characters and adjacent bigrams of the valid-character
/// sequence. Returns [`KeywordMetrics::ZERO`] when the text has no valid
/// characters or no keywords remain.
pub fn analyze_keywords(text: &str, user_keywords: &[String], title: &str) -> KeywordMetrics {
    let valid_chars: Vec<char> = text
        .chars()
        .filter(|c| is_cjk(*c) && !STOP_CHARS.contains(c))
        .collect();
    if valid_chars.is_empty() {
        return KeywordMetrics::ZERO;
    }

    let core: Vec<String> = if user_keywords.is_empty() {
        extract_core_keywords(&valid_chars)
    } else {
        user_keywords
            .iter()
            .filter(|k| !k.is_empty())
            .cloned()
            .collect()
    };
    if core.is_empty() {
        return KeywordMetrics::ZERO;
    }

    let text_chars: Vec<char> = text.chars().collect();
    let mut matched_len = 0usize;
    let mut positions: Vec<usize> = Vec::new();
    for keyword in &core {
        let needle: Vec<char> = keyword.chars().collect();
        let found = find_occurrences(&text_chars, &needle);
        matched_len += found.len() * needle.len();
        positions.extend(found);
    }

    KeywordMetrics {
        concentration: (matched_len as f64 / valid_chars.len() as f64).min(1.0),
        distribution: occurrence_spread(&positions, valid_chars.len()),
        relevance: title_relevance(&core, title),
    }
}

/// Ranks single characters and adjacent bigrams of the valid-character
/// sequence by frequency and keeps the top three. Bigrams that are
/// themselves stop words are skipped; the stable sort breaks frequency ties
/// by first-encounter order (singles before bigrams).
fn extract_core_keywords(valid_chars: &[char]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for &c in valid_chars {
        let term = c.to_string();
        match counts.get_mut(&term) {
            Some(n) => *n += 1,
            None => {
                counts.insert(term.clone(), 1);
                order.push(term);
            }
        }
    }

    for pair in valid_chars.windows(2) {
        let bigram: String = pair.iter().collect();
        if STOP_WORDS.contains(bigram.as_str()) {
            continue;
        }
        match counts.get_mut(&bigram) {
            Some(n) => *n += 1,
            None => {
                counts.insert(bigram.clone(), 1);
                order.push(bigram);
            }
        }
    }

    order.sort_by_key(|term| std::cmp::Reverse(counts[term]));
    order.truncate(CORE_KEYWORD_COUNT);
    order
}

/// Non-overlapping literal occurrences of `needle`, as character offsets
/// into `haystack`.
fn find_occurrences(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut found = Vec::new();
    if needle.is_empty() || haystack.len() < needle.len() {
        return found;
    }
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == *needle {
            found.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    found
}

/// Variance of the occurrence offsets, normalized by the widest possible
/// spread for a valid sequence of `valid_len` characters and inverted so
/// that 1.0 means evenly spread. Fewer than two occurrences degenerate to
/// 1.0 (a single point cannot be uneven) or 0.0 (no signal).
fn occurrence_spread(positions: &[usize], valid_len: usize) -> f64 {
    match positions.len() {
        0 => 0.0,
        1 => 1.0,
        n => {
            let n = n as f64;
            let mean = positions.iter().sum::<usize>() as f64 / n;
            let variance = positions
                .iter()
                .map(|&p| {
                    let d = p as f64 - mean;
                    d * d
                })
                .sum::<f64>()
                / n;
            let max_variance = ((valid_len - 1) as f64).powi(2) / 4.0;
            if max_variance > 0.0 {
                1.0 - (variance / max_variance).min(1.0)
            } else {
                0.0
            }
        }
    }
}

/// Fraction of core keywords appearing as substrings of the title. A blank
/// title, or one without CJK characters, gives no signal and defaults to
/// full relevance.
fn title_relevance(core: &[String], title: &str) -> f64 {
    if title.trim().is_empty() || !title.chars().any(is_cjk) {
        return 1.0;
    }
    let matched = core.iter().filter(|kw| title.contains(kw.as_str())).count();
    matched as f64 / core.len() as f64
}
