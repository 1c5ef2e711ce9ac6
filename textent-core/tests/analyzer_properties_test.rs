// textent-core/tests/analyzer_properties_test.rs
//! End-to-end properties of the entropy analyzer, exercised through the
//! public API only.

use textent_core::{analyze_entropy, analyze_keywords, AnalysisOptions, Status};

const EPSILON: f64 = 1e-10;

fn analyze(text: &str) -> textent_core::EntropyResult {
    analyze_entropy(text, &AnalysisOptions::default())
}

fn fixtures() -> Vec<&'static str> {
    vec![
        "",
        "   \n\t",
        "苹果很好吃，苹果很甜。",
        "今天天气很好。我们出去玩。",
        "你好！！！再见。。",
        "→→→",
        "***",
        "啊啊啊啊啊啊",
        "hello world, nothing CJK here!",
        "首先，市场分析很重要。市场数据要全。\n其次，市场需求变化快。团队要跟进。\n最后，市场报告要按时。经验要总结。",
    ]
}

#[test]
fn test_progress_bounded_and_status_consistent() {
    for text in fixtures() {
        let result = analyze(text);
        assert!(result.progress <= 100, "out of bounds for {text:?}");
        assert_eq!(
            result.status == Status::Warning,
            result.progress > 50,
            "status/progress mismatch for {text:?}"
        );
        assert!(!result.message.is_empty());
    }
}

#[test]
fn test_messages_round_trip_as_input() {
    for text in fixtures() {
        let first = analyze(text);
        let second = analyze(&first.message);
        assert!(second.progress <= 100);
        assert!(!second.message.is_empty());
    }
}

#[test]
fn test_repeated_run_does_not_lower_the_score() {
    let base = "今天天气很好。我们出去玩。";
    let with_run = format!("{base}啊啊啊啊啊啊");
    let before = analyze(base).progress;
    let after = analyze(&with_run).progress;
    assert!(
        after >= before,
        "appending a repeat run dropped the score: {before} -> {after}"
    );
}

#[test]
fn test_heading_levels_never_raise_the_score() {
    for text in fixtures() {
        let plain = analyze(text).progress;
        let structured = analyze_entropy(
            text,
            &AnalysisOptions {
                heading_levels: vec![1, 2, 3],
                ..AnalysisOptions::default()
            },
        )
        .progress;
        assert!(structured <= plain, "heading bonus raised score for {text:?}");
    }
}

#[test]
fn test_documented_concentration_example() {
    let metrics = analyze_keywords(
        "苹果很好吃，苹果很甜。",
        &["苹果".to_string()],
        "",
    );
    // Two occurrences of a two-character keyword over the nine-character
    // CJK-only filtered sequence.
    assert!((metrics.concentration - 4.0 / 9.0).abs() < EPSILON);
}

#[test]
fn test_no_punct_message_wins_over_long_sentence() {
    // A single unbroken stretch trips both the no-punctuation and the
    // long-sentence predicates; the punctuation message must win.
    let text = "天地玄黄宇宙洪荒日月盈昃辰宿列张寒来暑往秋收冬藏闰余成岁\
                律吕调阳云腾致雨露结为霜金生丽水玉出昆冈剑号巨阙珠称夜光果珍李柰";
    let result = analyze(text);
    assert_eq!(result.message, "缺少标点分隔，建议添加标点");
    assert_eq!(result.progress, 75);
    assert_eq!(result.status, Status::Warning);
}

#[test]
fn test_priority_chain_on_crafted_fixtures() {
    // Heavy punctuation runs with everything above them quiet.
    let runs = analyze("你好！！！再见。。");
    assert_eq!(runs.message, "连续标点较多，建议减少冗余标点");
    assert_eq!(runs.progress, 15);

    // Balanced paragraphs with emoji sprinkled in: special symbols fire
    // before any keyword advice.
    let symbols = analyze("天气很好⚡⚡\n出门走走⚡⚡\n心情不错⚡⚡");
    assert_eq!(symbols.message, "特殊符号过多");

    // A repeat-heavy afterthought lands on the repetition message.
    let repeats = analyze("今天天气很好。我们出去玩。啊啊啊啊啊啊");
    assert_eq!(repeats.message, "重复文字较多，建议精简表达");
}

#[test]
fn test_clean_structured_text_reports_clean_message() {
    let text = "首先，市场分析很重要。市场数据要全。\n\
                其次，市场需求变化快。团队要跟进。\n\
                最后，市场报告要按时。经验要总结。";
    let result = analyze(text);
    assert_eq!(result.status, Status::Normal);
    assert_eq!(result.message, format!("文本结构清晰（熵值：{}）", result.progress));
}

#[test]
fn test_empty_input_prompt() {
    let result = analyze("");
    assert_eq!(result.status, Status::Normal);
    assert_eq!(result.progress, 0);
    assert_eq!(result.message, "输入内容以分析");
}

#[test]
fn test_json_shape() {
    let result = analyze("苹果很好吃，苹果很甜。");
    let json = serde_json::to_string(&result).unwrap();
    let back: textent_core::EntropyResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
