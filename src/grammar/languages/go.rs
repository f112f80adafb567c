//! Go grammar configuration.
//!
//! Receiver methods are reported as functions only. Go declares them
//! outside the type, so they never appear in a class's method list.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

use super::C_LOGICAL_OPERATORS;

const FUNCTION_QUERY: &str = r#"
[
  (function_declaration)
  (method_declaration)
] @function
"#;

const CLASS_QUERY: &str = "(type_declaration) @class";

const IMPORT_QUERY: &str = "(import_declaration) @import";

const KINDS: NodeKinds = NodeKinds {
    function_names: &["identifier", "field_identifier"],
    class_names: &["type_identifier"],
    parameter_names: &["identifier"],
    anonymous_functions: &[],
    declarators: &[],
    name_wrappers: &["type_spec", "type_alias"],
    parameter_lists: &["parameter_list"],
    parameter_wrappers: &[],
    methods: &["method_declaration"],
    bodies: &[],
    decisions: &[
        "if_statement",
        "for_statement",
        "expression_switch_statement",
        "type_switch_statement",
        "select_statement",
        "expression_case",
        "type_case",
        "communication_case",
    ],
    logical_expressions: &["binary_expression"],
    logical_operators: C_LOGICAL_OPERATORS,
    docstring: DocstringStyle::None,
};

pub fn config() -> GrammarConfig {
    GrammarConfig {
        id: LanguageId::Go,
        language: tree_sitter_go::LANGUAGE.into(),
        function_query: FUNCTION_QUERY,
        class_query: CLASS_QUERY,
        import_query: IMPORT_QUERY,
        kinds: KINDS,
    }
}
