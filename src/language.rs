//! Supported languages and filename-based language detection.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// Closed set of languages the analyzer has grammars for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Go,
    Rust,
}

impl LanguageId {
    /// Every supported language, in registry order.
    pub const ALL: [LanguageId; 8] = [
        LanguageId::Python,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Java,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::Go,
        LanguageId::Rust,
    ];

    /// The canonical lowercase identifier (e.g. "cpp", "typescript").
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Java => "java",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::Go => "go",
            LanguageId::Rust => "rust",
        }
    }

    /// File extensions (without dot) that map to this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Python => &["py"],
            LanguageId::JavaScript => &["js", "jsx"],
            LanguageId::TypeScript => &["ts", "tsx"],
            LanguageId::Java => &["java"],
            LanguageId::C => &["c", "h"],
            LanguageId::Cpp => &["cpp", "cc", "cxx", "hpp", "hxx"],
            LanguageId::Go => &["go"],
            LanguageId::Rust => &["rs"],
        }
    }

    /// Look up a language by bare extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSIONS.get(ext.to_lowercase().as_str()).copied()
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageId::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| AnalyzerError::unsupported(s))
    }
}

static EXTENSIONS: phf::Map<&'static str, LanguageId> = phf_map! {
    "py" => LanguageId::Python,
    "js" => LanguageId::JavaScript,
    "jsx" => LanguageId::JavaScript,
    "ts" => LanguageId::TypeScript,
    "tsx" => LanguageId::TypeScript,
    "java" => LanguageId::Java,
    "c" => LanguageId::C,
    "h" => LanguageId::C,
    "cpp" => LanguageId::Cpp,
    "cc" => LanguageId::Cpp,
    "cxx" => LanguageId::Cpp,
    "hpp" => LanguageId::Cpp,
    "hxx" => LanguageId::Cpp,
    "go" => LanguageId::Go,
    "rs" => LanguageId::Rust,
};

/// Detect a language from a filename by its last extension.
///
/// Returns None for unknown extensions. A name without a dot is looked up
/// as a whole, so `"Makefile"` is absent while a bare `"py"` is Python.
pub fn detect_language(filename: &str) -> Option<LanguageId> {
    let ext = filename.rsplit('.').next().unwrap_or(filename);
    LanguageId::from_extension(ext)
}
