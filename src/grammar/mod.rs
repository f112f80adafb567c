//! Grammar registry: one tree-sitter grammar plus node-kind tables per language.
//!
//! Each supported language contributes a [`GrammarConfig`] from
//! `languages/<lang>.rs`: three tree-sitter queries (function-like,
//! class-like and import-like nodes) and a set of [`NodeKinds`] tables.
//! The extractor and the metrics calculator only ever consult these tables,
//! so the traversal code stays language-agnostic.
//!
//! # Adding a New Language
//!
//! 1. Add the grammar crate to `Cargo.toml` and a variant to [`LanguageId`]
//! 2. Create `languages/<lang>.rs` returning a `GrammarConfig`
//! 3. Wire it into `languages::config_for` and the registry below

pub mod languages;

use once_cell::sync::OnceCell;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

use crate::error::AnalyzerError;
use crate::language::LanguageId;

/// How a language attaches documentation to functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocstringStyle {
    /// First string expression statement inside the function body (Python).
    BodyString,
    /// `/** ... */` block comment immediately before the function (JS, TS, Java).
    BlockComment,
    /// No docstring extraction.
    None,
}

/// Node-kind tables consulted by the extractor and metrics calculator.
#[derive(Debug, Clone)]
pub struct NodeKinds {
    /// Kinds that can carry a function or method name.
    pub function_names: &'static [&'static str],
    /// Kinds that can carry a class/type name.
    pub class_names: &'static [&'static str],
    /// Kinds that can carry a parameter name.
    pub parameter_names: &'static [&'static str],
    /// Function kinds that are anonymous unless they have a `name` field.
    pub anonymous_functions: &'static [&'static str],
    /// Wrappers around a function's name and parameter list (C/C++ declarators).
    pub declarators: &'static [&'static str],
    /// Wrappers around a class name (Go `type_spec`, Rust `generic_type`).
    pub name_wrappers: &'static [&'static str],
    /// Parameter list kinds.
    pub parameter_lists: &'static [&'static str],
    /// Rest, splat and variadic wrappers around a parameter's identifier
    /// (`...rest`, `*args`, `String... args`).
    pub parameter_wrappers: &'static [&'static str],
    /// Function-shaped kinds collected as methods inside class bodies.
    pub methods: &'static [&'static str],
    /// Body containers searched for methods.
    pub bodies: &'static [&'static str],
    /// Decision points that add one to cyclomatic complexity.
    pub decisions: &'static [&'static str],
    /// Binary-expression kinds checked for a logical operator child.
    pub logical_expressions: &'static [&'static str],
    /// Spellings of logical AND/OR in this language.
    pub logical_operators: &'static [&'static str],
    pub docstring: DocstringStyle,
}

/// Static definition of one language's grammar.
#[derive(Clone)]
pub struct GrammarConfig {
    pub id: LanguageId,
    pub language: Language,
    /// Query capturing function-like nodes as `@function`.
    pub function_query: &'static str,
    /// Query capturing class-like nodes as `@class`.
    pub class_query: &'static str,
    /// Query capturing import-like nodes as `@import`.
    pub import_query: &'static str,
    pub kinds: NodeKinds,
}

/// A compiled grammar: language, queries and node-kind tables.
///
/// Read-only after construction and shared across threads. Parsers are not
/// `Sync`, so a fresh one is created for every parse.
pub struct Grammar {
    id: LanguageId,
    language: Language,
    function_query: Query,
    class_query: Query,
    import_query: Query,
    kinds: NodeKinds,
}

impl Grammar {
    /// Compile a grammar from its configuration.
    pub fn new(config: GrammarConfig) -> Result<Self, AnalyzerError> {
        let id = config.id;
        let failed = |message: String| AnalyzerError::Grammar {
            language: id,
            message,
        };

        // Surface ABI mismatches here rather than on the first parse.
        Parser::new()
            .set_language(&config.language)
            .map_err(|e| failed(e.to_string()))?;

        let compile = |source: &str| {
            Query::new(&config.language, source).map_err(|e| failed(e.to_string()))
        };

        Ok(Self {
            id,
            function_query: compile(config.function_query)?,
            class_query: compile(config.class_query)?,
            import_query: compile(config.import_query)?,
            language: config.language,
            kinds: config.kinds,
        })
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn kinds(&self) -> &NodeKinds {
        &self.kinds
    }

    pub fn function_query(&self) -> &Query {
        &self.function_query
    }

    pub fn class_query(&self) -> &Query {
        &self.class_query
    }

    pub fn import_query(&self) -> &Query {
        &self.import_query
    }

    /// Parse source text into a syntax tree.
    ///
    /// Syntax errors still produce a tree (with ERROR nodes). None is only
    /// returned when tree-sitter gives up entirely.
    pub fn parse<'s>(&self, source: &'s str) -> Option<ParsedSource<'_, 's>> {
        let mut parser = Parser::new();
        parser.set_language(&self.language).ok()?;
        let tree = parser.parse(source, None)?;
        Some(ParsedSource {
            grammar: self,
            tree,
            source,
        })
    }
}

/// A syntax tree together with the grammar and text it was parsed from.
///
/// Owned by a single analysis call and dropped when extraction completes.
pub struct ParsedSource<'g, 's> {
    pub grammar: &'g Grammar,
    pub tree: Tree,
    pub source: &'s str,
}

impl<'g, 's> ParsedSource<'g, 's> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: Node) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// All nodes captured by `query`, deduplicated, in source order.
    ///
    /// Nodes sharing a start byte are ordered outermost first.
    pub fn captures(&self, query: &Query) -> Vec<Node<'_>> {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(query, self.tree.root_node(), self.source.as_bytes());

        let mut nodes = Vec::new();
        let mut seen = std::collections::HashSet::new();

        while let Some(m) = matches.next() {
            for capture in m.captures {
                if seen.insert(capture.node.id()) {
                    nodes.push(capture.node);
                }
            }
        }

        nodes.sort_by_key(|n| (n.start_byte(), std::cmp::Reverse(n.end_byte())));
        nodes
    }
}

static PYTHON: OnceCell<Grammar> = OnceCell::new();
static JAVASCRIPT: OnceCell<Grammar> = OnceCell::new();
static TYPESCRIPT: OnceCell<Grammar> = OnceCell::new();
static JAVA: OnceCell<Grammar> = OnceCell::new();
static C: OnceCell<Grammar> = OnceCell::new();
static CPP: OnceCell<Grammar> = OnceCell::new();
static GO: OnceCell<Grammar> = OnceCell::new();
static RUST: OnceCell<Grammar> = OnceCell::new();

fn slot(language: LanguageId) -> &'static OnceCell<Grammar> {
    match language {
        LanguageId::Python => &PYTHON,
        LanguageId::JavaScript => &JAVASCRIPT,
        LanguageId::TypeScript => &TYPESCRIPT,
        LanguageId::Java => &JAVA,
        LanguageId::C => &C,
        LanguageId::Cpp => &CPP,
        LanguageId::Go => &GO,
        LanguageId::Rust => &RUST,
    }
}

/// Get the shared grammar for a language, building it on first use.
pub fn grammar_for(language: LanguageId) -> Result<&'static Grammar, AnalyzerError> {
    slot(language).get_or_try_init(|| Grammar::new(languages::config_for(language)))
}

/// Get the shared grammar for a language id such as `"python"` or `"cpp"`.
///
/// Fails with [`AnalyzerError::UnsupportedLanguage`] for any other id; there
/// is no fallback grammar.
pub fn grammar_for_id(id: &str) -> Result<&'static Grammar, AnalyzerError> {
    grammar_for(id.parse()?)
}
