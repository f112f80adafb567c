//! TypeScript grammar configuration.
//!
//! Uses the plain TypeScript dialect of `tree-sitter-typescript`; `.tsx`
//! files are parsed with the same grammar.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

use super::javascript::DECISIONS;
use super::C_LOGICAL_OPERATORS;

/// Same shapes as JavaScript, plus class methods as standalone functions.
const FUNCTION_QUERY: &str = r#"
[
  (function_declaration)
  (generator_function_declaration)
  (arrow_function)
  (function_expression)
  (method_definition)
] @function
"#;

const CLASS_QUERY: &str = "(class_declaration) @class";

const IMPORT_QUERY: &str = "(import_statement) @import";

const KINDS: NodeKinds = NodeKinds {
    function_names: &["identifier", "property_identifier", "private_property_identifier"],
    class_names: &["type_identifier", "identifier"],
    parameter_names: &["identifier"],
    anonymous_functions: &["arrow_function", "function_expression"],
    declarators: &[],
    name_wrappers: &[],
    parameter_lists: &["formal_parameters"],
    parameter_wrappers: &["rest_pattern"],
    methods: &["method_definition"],
    bodies: &["class_body"],
    decisions: DECISIONS,
    logical_expressions: &["binary_expression"],
    logical_operators: C_LOGICAL_OPERATORS,
    docstring: DocstringStyle::BlockComment,
};

pub fn config() -> GrammarConfig {
    GrammarConfig {
        id: LanguageId::TypeScript,
        language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        function_query: FUNCTION_QUERY,
        class_query: CLASS_QUERY,
        import_query: IMPORT_QUERY,
        kinds: KINDS,
    }
}
