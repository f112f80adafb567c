//! Analyzer facade: parse once, extract and measure, merge.

use crate::error::AnalyzerError;
use crate::extract::{extract_classes, extract_functions, extract_imports};
use crate::grammar::{grammar_for, grammar_for_id, Grammar};
use crate::language::LanguageId;
use crate::metrics::{complexity_of, line_stats, summary_of};
use crate::summary::StructuralSummary;

/// Analyzer bound to one language.
///
/// Holds only a reference to the shared grammar, so it is cheap to create
/// and can be used from any thread.
#[derive(Clone, Copy)]
pub struct Analyzer {
    grammar: &'static Grammar,
}

impl Analyzer {
    pub fn new(language: LanguageId) -> Result<Self, AnalyzerError> {
        Ok(Self {
            grammar: grammar_for(language)?,
        })
    }

    /// Create an analyzer from a language id such as `"typescript"`.
    pub fn for_id(id: &str) -> Result<Self, AnalyzerError> {
        Ok(Self {
            grammar: grammar_for_id(id)?,
        })
    }

    pub fn language(&self) -> LanguageId {
        self.grammar.id()
    }

    /// Analyze source text.
    ///
    /// Never fails: malformed source yields whatever structure the
    /// error-tolerant parse recovered.
    pub fn analyze(&self, source: &str) -> StructuralSummary {
        let Some(parsed) = self.grammar.parse(source) else {
            return StructuralSummary::empty(line_stats(source));
        };

        StructuralSummary {
            functions: extract_functions(&parsed),
            classes: extract_classes(&parsed),
            imports: extract_imports(&parsed),
            complexity: complexity_of(self.grammar, &parsed.tree),
            summary: summary_of(&parsed.tree, source),
        }
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("language", &self.language())
            .finish()
    }
}

/// Analyze `source` as `language`.
pub fn analyze(language: LanguageId, source: &str) -> Result<StructuralSummary, AnalyzerError> {
    Ok(Analyzer::new(language)?.analyze(source))
}

/// Analyze `source` as the language named by `id`.
///
/// # Errors
///
/// [`AnalyzerError::UnsupportedLanguage`] if `id` is not one of the
/// supported language ids.
pub fn analyze_id(id: &str, source: &str) -> Result<StructuralSummary, AnalyzerError> {
    Ok(Analyzer::for_id(id)?.analyze(source))
}
