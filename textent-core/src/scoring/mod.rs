// textent-core/src/scoring/mod.rs
//! Aggregation of all signals into the bounded 0-100 entropy score.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{classify, EMPTY_INPUT_PROMPT};
use crate::keywords::analyze_keywords;
use crate::signals::{extract_signals, StructuralSignals, Thresholds};

/// Additive penalty when keyword concentration is low.
const CONCENTRATION_PENALTY: f64 = 12.0;
/// Additive penalty when keyword occurrences cluster.
const DISTRIBUTION_PENALTY: f64 = 10.0;
/// Additive penalty when keywords miss the title.
const RELEVANCE_PENALTY: f64 = 8.0;

/// Above this share of connective words the text reads as deliberately
/// ordered and earns a small discount.
const LOGIC_BONUS_THRESHOLD: f64 = 0.08;
const LOGIC_BONUS_FACTOR: f64 = 0.97;

/// Scores above this are surfaced as warnings.
const WARNING_CUTOFF: u8 = 50;

/// Weight, in percentage points at ratio 1.0, of each structural signal.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub long_sentence: f64,
    pub no_punct: f64,
    pub repeat: f64,
    pub longest_para: f64,
    pub punct_run: f64,
    pub special_symbol: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            long_sentence: 35.0,
            no_punct: 30.0,
            repeat: 15.0,
            longest_para: 10.0,
            punct_run: 5.0,
            special_symbol: 5.0,
        }
    }
}

/// Severity bucket for host UIs (progress-bar color, status badge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Warning,
}

/// The analyzer's output: a bounded disorder score plus one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntropyResult {
    pub status: Status,
    /// Integer in `[0, 100]`; higher means more likely to need editing.
    pub progress: u8,
    /// One zh-CN diagnostic, chosen by priority.
    pub message: String,
}

/// Optional metadata supplied by the host document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Caller-chosen core keywords; auto-extracted when empty.
    pub user_keywords: Vec<String>,
    /// Document title, used for topic-relevance scoring.
    pub title: String,
    /// Heading levels (1-6) present in the source document.
    pub heading_levels: Vec<u8>,
}

/// Analyzes `text` and returns its entropy state.
///
/// Pure and infallible: any well-formed string input yields a well-formed
/// result, and empty or whitespace-only text returns the input prompt with
/// a zero score.
pub fn analyze_entropy(text: &str, options: &AnalysisOptions) -> EntropyResult {
    let raw: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let total_chars = raw.chars().count();
    if total_chars == 0 {
        return EntropyResult {
            status: Status::Normal,
            progress: 0,
            message: EMPTY_INPUT_PROMPT.to_string(),
        };
    }

    let thresholds = Thresholds::for_length(total_chars);
    let metrics = analyze_keywords(text, &options.user_keywords, &options.title);
    let flags = metrics.flags();
    let signals = extract_signals(text, &raw, thresholds);
    log::debug!("analyzed {total_chars} chars: {signals:?}, {metrics:?}");

    let mut score = weighted_base(&signals, &ScoringWeights::default());
    if flags.low_concentration {
        score += CONCENTRATION_PENALTY;
    }
    if flags.poor_distribution {
        score += DISTRIBUTION_PENALTY;
    }
    if flags.low_relevance {
        score += RELEVANCE_PENALTY;
    }
    if signals.logic_ratio > LOGIC_BONUS_THRESHOLD {
        score *= LOGIC_BONUS_FACTOR;
    }
    score *= heading_multiplier(&options.heading_levels);

    let progress = score.clamp(0.0, 100.0).round() as u8;
    let status = if progress > WARNING_CUTOFF {
        Status::Warning
    } else {
        Status::Normal
    };
    let message = classify(&signals, flags).message(progress);

    EntropyResult { status, progress, message }
}

/// The weighted sum of the structural ratios, on the 0-100 scale before
/// penalties and multipliers.
pub fn weighted_base(signals: &StructuralSignals, weights: &ScoringWeights) -> f64 {
    signals.long_sentence_ratio * weights.long_sentence
        + signals.no_punct_ratio * weights.no_punct
        + signals.repeat_ratio * weights.repeat
        + signals.longest_para_ratio * weights.longest_para
        + signals.punct_run_ratio * weights.punct_run
        + signals.special_symbol_ratio * weights.special_symbol
}

/// A heading skeleton signals deliberate structure: a full H1/H2/H3 ladder
/// earns the largest discount, a bare H1 the smallest. Levels below H1
/// contribute nothing on their own.
fn heading_multiplier(levels: &[u8]) -> f64 {
    let h1 = levels.contains(&1);
    let h2 = levels.contains(&2);
    let h3 = levels.contains(&3);
    if h1 && h2 && h3 {
        0.80
    } else if h1 && h2 {
        0.85
    } else if h1 {
        0.90
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_empty_and_whitespace_input() {
        for text in ["", "   ", "\n\t\r\n"] {
            let result = analyze_entropy(text, &AnalysisOptions::default());
            assert_eq!(result.status, Status::Normal);
            assert_eq!(result.progress, 0);
            assert_eq!(result.message, EMPTY_INPUT_PROMPT);
        }
    }

    #[test]
    fn test_weighted_base_uses_all_six_weights() {
        let signals = StructuralSignals {
            long_sentence_ratio: 1.0,
            no_punct_ratio: 1.0,
            repeat_ratio: 1.0,
            longest_para_ratio: 1.0,
            punct_run_ratio: 1.0,
            special_symbol_ratio: 1.0,
            logic_ratio: 0.0,
        };
        let base = weighted_base(&signals, &ScoringWeights::default());
        assert!((base - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_heading_multiplier_ladder() {
        assert_eq!(heading_multiplier(&[]), 1.0);
        assert_eq!(heading_multiplier(&[2, 3]), 1.0);
        assert_eq!(heading_multiplier(&[1]), 0.90);
        assert_eq!(heading_multiplier(&[1, 2]), 0.85);
        assert_eq!(heading_multiplier(&[1, 2, 3]), 0.80);
        // Order and duplicates are irrelevant.
        assert_eq!(heading_multiplier(&[3, 1, 2, 2]), 0.80);
        assert_eq!(heading_multiplier(&[1, 4, 5, 6]), 0.90);
    }

    #[test_log::test]
    fn test_status_tracks_warning_cutoff() {
        // 60 distinct characters, no punctuation: base score is exactly 75
        // (35 long-sentence + 30 no-punct + 10 paragraph).
        let text = sixty_distinct_chars();
        let result = analyze_entropy(&text, &AnalysisOptions::default());
        assert_eq!(result.progress, 75);
        assert_eq!(result.status, Status::Warning);

        let calm = analyze_entropy("苹果很好吃。", &AnalysisOptions::default());
        assert_eq!(calm.status, Status::Normal);
        assert!(calm.progress <= 50);
    }

    #[test]
    fn test_heading_levels_discount_the_score() {
        let text = sixty_distinct_chars();
        let progress_for = |levels: &[u8]| {
            analyze_entropy(
                &text,
                &AnalysisOptions {
                    heading_levels: levels.to_vec(),
                    ..AnalysisOptions::default()
                },
            )
            .progress
        };
        assert_eq!(progress_for(&[]), 75);
        assert_eq!(progress_for(&[1]), 68);
        assert_eq!(progress_for(&[1, 2]), 64);
        assert_eq!(progress_for(&[1, 2, 3]), 60);
    }

    #[test]
    fn test_idempotence() {
        let options = AnalysisOptions {
            user_keywords: vec!["苹果".to_string()],
            title: "苹果测评".to_string(),
            heading_levels: vec![1, 2],
        };
        let text = "苹果很好吃，苹果很甜。";
        assert_eq!(
            analyze_entropy(text, &options),
            analyze_entropy(text, &options)
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let result = analyze_entropy("", &AnalysisOptions::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "normal");
        assert_eq!(json["progress"], 0);
    }

    fn sixty_distinct_chars() -> String {
        let text = "天地玄黄宇宙洪荒日月盈昃辰宿列张寒来暑往秋收冬藏闰余成岁\
                    律吕调阳云腾致雨露结为霜金生丽水玉出昆冈剑号巨阙珠称夜光果珍李柰";
        assert_eq!(text.chars().count(), 60);
        text.to_string()
    }
}
