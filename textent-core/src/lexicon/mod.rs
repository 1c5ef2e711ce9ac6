// textent-core/src/lexicon/mod.rs
//! Fixed lookup tables shared across the analyzer.
//!
//! Everything here is process-wide read-only state, initialized lazily on
//! first use and never mutated or reconfigured at runtime.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Common Chinese function words and pronouns that carry no topical weight.
/// Multi-character entries only matter for bigram filtering; single-character
/// entries are also used to filter the valid-character sequence.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "的", "了", "是", "在", "有", "我", "他", "她", "它", "我们", "你们", "他们",
        "这", "那", "哪", "什么", "怎么", "为什么", "和", "与", "及", "或", "因为", "所以",
        "就", "都", "还", "也", "只", "但", "而", "如果", "虽然", "不过", "对于", "关于",
    ])
});

/// The single-character subset of [`STOP_WORDS`], for per-character checks.
pub static STOP_CHARS: Lazy<HashSet<char>> = Lazy::new(|| {
    STOP_WORDS
        .iter()
        .filter(|w| w.chars().count() == 1)
        .filter_map(|w| w.chars().next())
        .collect()
});

/// Logical connectives whose presence marks deliberately ordered prose.
pub const LOGIC_WORDS: [&str; 10] = [
    "首先", "其次", "然后", "因此", "总之", "另外", "但是", "所以", "同时", "最后",
];

/// CJK Unified Ideographs, used as the proxy for meaningful text content.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Sentence terminators; runs collapse into a single split point.
pub static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new("[。？！?!；;]+").expect("valid sentence splitter"));

/// The basic punctuation set, split one character at a time so that adjacent
/// punctuation yields empty segments rather than merged ones.
pub static BASIC_PUNCT_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new("[。．？！?!；;，,、]").expect("valid punctuation splitter"));

/// Paragraph boundaries: one or more newlines.
pub static PARAGRAPH_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("valid paragraph splitter"));

/// Two or more consecutive characters from the basic punctuation set.
pub static PUNCT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[。．？！?!；;，,、]{2,}").expect("valid punctuation-run pattern"));

/// Emoji, arrow, math, and geometric-symbol Unicode blocks. Full-width CJK
/// punctuation is deliberately not part of this table.
pub static SPECIAL_SYMBOLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[\\x{1F600}-\\x{1F64F}\
          \\x{1F300}-\\x{1F5FF}\
          \\x{1F680}-\\x{1F6FF}\
          \\x{1F1E0}-\\x{1F1FF}\
          \\x{2600}-\\x{26FF}\
          \\x{2700}-\\x{27BF}\
          \\x{1F900}-\\x{1F9FF}\
          \\x{1FA70}-\\x{1FAFF}\
          \\x{2190}-\\x{21FF}\
          \\x{2200}-\\x{22FF}\
          \\x{2300}-\\x{23FF}\
          \\x{25A0}-\\x{25FF}\
          \\x{2B00}-\\x{2BFF}]",
    )
    .expect("valid special-symbol pattern")
});

/// Runs of three or more repeated ASCII operators or punctuation, e.g.
/// `***`, `===`, `---`.
pub static ASCII_SYMBOL_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\-=\*_~#@\^\$%\+\|\\/<>\{\}\[\]\(\)\.,:;!\?]{3,}")
        .expect("valid symbol-run pattern")
});
