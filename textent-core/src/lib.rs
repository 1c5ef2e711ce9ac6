// textent-core/src/lib.rs
//! # textent Core Library
//!
//! `textent-core` estimates how disorganized a block of CJK note text is.
//! Given plain text plus optional metadata (user keywords, a document title,
//! the heading levels used in the source document), it computes a bounded
//! 0-100 "entropy" score and a single human-readable diagnostic.
//!
//! The library is pure and stateless: no I/O, no caching, no shared mutable
//! state. Every call reads its inputs, allocates local intermediates, and
//! returns a fresh [`EntropyResult`]. It is safe to call from any number of
//! threads without synchronization. Malformed inputs never panic; degenerate
//! cases fall back to neutral metric values instead of errors.
//!
//! ## Modules
//!
//! * `lexicon`: Fixed stop-word, connective, punctuation, and symbol tables.
//! * `keywords`: Core-keyword extraction plus concentration / distribution /
//!   relevance scoring.
//! * `signals`: The independent structural disorder ratios.
//! * `diagnostics`: Priority-ordered selection of the one message to surface.
//! * `scoring`: Weighted aggregation into the final [`EntropyResult`].
//!
//! ## Usage Example
//!
//! ```rust
//! use textent_core::{analyze_entropy, AnalysisOptions, Status};
//!
//! let options = AnalysisOptions {
//!     user_keywords: vec!["苹果".to_string()],
//!     ..AnalysisOptions::default()
//! };
//! let result = analyze_entropy("苹果很好吃，苹果很甜。", &options);
//!
//! assert_eq!(result.status, Status::Normal);
//! assert!(result.progress <= 100);
//! ```

pub mod diagnostics;
pub mod keywords;
pub mod lexicon;
pub mod scoring;
pub mod signals;

pub use diagnostics::Diagnostic;
pub use keywords::{analyze_keywords, KeywordFlags, KeywordMetrics};
pub use scoring::{analyze_entropy, AnalysisOptions, EntropyResult, ScoringWeights, Status};
pub use signals::{StructuralSignals, Thresholds};
