//! JavaScript grammar configuration.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

use super::C_LOGICAL_OPERATORS;

/// Named declarations plus function literals (arrow and anonymous).
const FUNCTION_QUERY: &str = r#"
[
  (function_declaration)
  (generator_function_declaration)
  (arrow_function)
  (function_expression)
] @function
"#;

const CLASS_QUERY: &str = "(class_declaration) @class";

const IMPORT_QUERY: &str = "(import_statement) @import";

pub(crate) const DECISIONS: &[&str] = &[
    "if_statement",
    "else_clause",
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
    "switch_statement",
    "switch_case",
    "try_statement",
    "catch_clause",
    "ternary_expression",
];

const KINDS: NodeKinds = NodeKinds {
    function_names: &["identifier", "property_identifier", "private_property_identifier"],
    class_names: &["identifier"],
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
        id: LanguageId::JavaScript,
        language: tree_sitter_javascript::LANGUAGE.into(),
        function_query: FUNCTION_QUERY,
        class_query: CLASS_QUERY,
        import_query: IMPORT_QUERY,
        kinds: KINDS,
    }
}
