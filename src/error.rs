//! Error types for the analyzer core.

use thiserror::Error;

use crate::language::LanguageId;

/// Errors that can occur when selecting a grammar or analyzing source.
///
/// Malformed source is never an error: it produces a best-effort summary.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("unsupported language: {id} (supported: {})", supported_ids())]
    UnsupportedLanguage { id: String },
    #[error("failed to build {language} grammar: {message}")]
    Grammar {
        language: LanguageId,
        message: String,
    },
}

impl AnalyzerError {
    pub fn unsupported(id: impl Into<String>) -> Self {
        AnalyzerError::UnsupportedLanguage { id: id.into() }
    }
}

fn supported_ids() -> String {
    LanguageId::ALL
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
