//! Records produced by one analysis call.

use serde::{Deserialize, Serialize};

/// Name used for functions whose identifier cannot be resolved.
pub const ANONYMOUS_FUNCTION: &str = "anonymous";

/// Name used for classes whose identifier cannot be resolved.
pub const ANONYMOUS_CLASS: &str = "Anonymous";

/// Cyclomatic complexity: 1 plus one per decision point.
pub type ComplexityScore = u32;

/// A function, method or function literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// End line (1-indexed, inclusive).
    pub end_line: usize,
    pub docstring: Option<String>,
}

impl FunctionInfo {
    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS_FUNCTION
    }
}

/// A class-like construct: class, struct, enum, Rust impl block, Go type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    /// Method names in source order.
    pub methods: Vec<String>,
}

/// Verbatim text of one import/include/use statement, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportInfo(pub String);

impl ImportInfo {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImportInfo {
    fn from(text: &str) -> Self {
        ImportInfo(text.trim().to_string())
    }
}

/// Size and shape statistics for a source file and its tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of newline-delimited segments, blank ones included.
    pub total_lines: usize,
    /// Segments containing non-whitespace characters.
    pub non_empty_lines: usize,
    /// Total nodes in the syntax tree, anonymous tokens included.
    pub node_count: usize,
    /// Edges on the longest root-to-leaf path.
    pub max_depth: usize,
}

/// The analyzer's single output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSummary {
    pub functions: Vec<FunctionInfo>,
    pub classes: Vec<ClassInfo>,
    pub imports: Vec<ImportInfo>,
    pub complexity: ComplexityScore,
    pub summary: SummaryStats,
}

impl StructuralSummary {
    /// Summary for input that produced no syntax tree at all.
    pub fn empty(summary: SummaryStats) -> Self {
        Self {
            functions: Vec::new(),
            classes: Vec::new(),
            imports: Vec::new(),
            complexity: 1,
            summary,
        }
    }

    /// Find a function by name.
    pub fn function(&self, name: &str) -> Option<&FunctionInfo> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Find a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.iter().find(|c| c.name == name)
    }
}
