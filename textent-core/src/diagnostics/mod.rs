// textent-core/src/diagnostics/mod.rs
//! Priority-ordered diagnostic selection.
//!
//! The scorer surfaces exactly one message per analysis. Rules are held as
//! an ordered list of (predicate, variant) pairs and evaluated top to
//! bottom; the first hit wins, so problems that block reading outrank
//! keyword-level advice, which in turn outranks the style nudge about
//! connectives. The ordering is part of the contract and is tested as such.

use crate::keywords::KeywordFlags;
use crate::signals::StructuralSignals;

/// Message returned for empty or whitespace-only input.
pub const EMPTY_INPUT_PROMPT: &str = "输入内容以分析";

/// One structural finding about the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    MissingPunctuation,
    LongSentences,
    RepeatedCharacters,
    OversizedParagraph,
    PunctuationRuns,
    SpecialSymbols,
    LowKeywordConcentration,
    UnevenKeywordDistribution,
    LowTitleRelevance,
    FewConnectives,
    Clean,
}

/// Picks the single diagnostic to surface for this analysis.
pub fn classify(signals: &StructuralSignals, flags: KeywordFlags) -> Diagnostic {
    let rules = [
        (signals.no_punct_ratio > 0.4, Diagnostic::MissingPunctuation),
        (signals.long_sentence_ratio > 0.35, Diagnostic::LongSentences),
        (signals.repeat_ratio > 0.12, Diagnostic::RepeatedCharacters),
        (signals.longest_para_ratio > 0.35, Diagnostic::OversizedParagraph),
        (signals.punct_run_ratio > 0.05, Diagnostic::PunctuationRuns),
        (signals.special_symbol_ratio > 0.12, Diagnostic::SpecialSymbols),
        (flags.low_concentration, Diagnostic::LowKeywordConcentration),
        (flags.poor_distribution, Diagnostic::UnevenKeywordDistribution),
        (flags.low_relevance, Diagnostic::LowTitleRelevance),
        (signals.logic_ratio <= 0.005, Diagnostic::FewConnectives),
    ];

    rules
        .into_iter()
        .find_map(|(hit, diagnostic)| hit.then_some(diagnostic))
        .unwrap_or(Diagnostic::Clean)
}

impl Diagnostic {
    /// The zh-CN advice string shown to the writer. `progress` is embedded
    /// only in the clean-structure variant.
    pub fn message(self, progress: u8) -> String {
        match self {
            Self::MissingPunctuation => "缺少标点分隔，建议添加标点".to_string(),
            Self::LongSentences => "句子过长，建议拆分短句".to_string(),
            Self::RepeatedCharacters => "重复文字较多，建议精简表达".to_string(),
            Self::OversizedParagraph => "单个段落过长，建议分段".to_string(),
            Self::PunctuationRuns => "连续标点较多，建议减少冗余标点".to_string(),
            Self::SpecialSymbols => "特殊符号过多".to_string(),
            Self::LowKeywordConcentration => "核心关键词占比过低".to_string(),
            Self::UnevenKeywordDistribution => "核心关键词分布不均".to_string(),
            Self::LowTitleRelevance => "关键词与主题关联度低".to_string(),
            Self::FewConnectives => "逻辑词偏少".to_string(),
            Self::Clean => format!("文本结构清晰（熵值：{progress}）"),
        }
    }
}
