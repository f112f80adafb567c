//! codelens - multi-language structural code analyzer.
//!
//! Takes source text in one of eight languages, parses it once with
//! tree-sitter, and extracts a [`StructuralSummary`]: functions, classes,
//! imports, cyclomatic complexity and size statistics.
//!
//! ```no_run
//! use codelens::{analyze, LanguageId};
//!
//! let summary = analyze(LanguageId::Python, "def add(a, b):\n    return a + b\n")?;
//! assert_eq!(summary.functions[0].params, vec!["a", "b"]);
//! # Ok::<(), codelens::AnalyzerError>(())
//! ```
//!
//! # Architecture
//!
//! - `grammar`: per-language tree-sitter grammars, queries and node-kind tables
//! - `extract`: functions, classes and imports from a parsed tree
//! - `metrics`: cyclomatic complexity and size statistics
//! - `analyzer`: parse once, run extraction and metrics, merge
//! - `scan`: walk a directory and analyze its files in parallel
//! - `config`: YAML scan configuration
//! - `report`: Output formatting (pretty, JSON)
//!
//! # Adding a New Language
//!
//! See `src/grammar/languages/` for examples. Provide a `GrammarConfig` and
//! register it in `grammar/languages/mod.rs`.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod grammar;
pub mod hash;
pub mod language;
pub mod metrics;
pub mod report;
pub mod scan;
pub mod summary;

pub use analyzer::{analyze, analyze_id, Analyzer};
pub use config::ScanConfig;
pub use error::AnalyzerError;
pub use grammar::{grammar_for, grammar_for_id, Grammar};
pub use hash::content_hash;
pub use language::{detect_language, LanguageId};
pub use scan::{FileReport, ScanReport, Scanner, SkipReason, SkippedFile};
pub use summary::{
    ClassInfo, ComplexityScore, FunctionInfo, ImportInfo, StructuralSummary, SummaryStats,
};
