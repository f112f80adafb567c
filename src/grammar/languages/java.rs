//! Java grammar configuration.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

use super::C_LOGICAL_OPERATORS;

const FUNCTION_QUERY: &str = "(method_declaration) @function";

const CLASS_QUERY: &str = "(class_declaration) @class";

const IMPORT_QUERY: &str = "(import_declaration) @import";

const KINDS: NodeKinds = NodeKinds {
    function_names: &["identifier"],
    class_names: &["identifier"],
    parameter_names: &["identifier"],
    anonymous_functions: &["lambda_expression"],
    declarators: &[],
    name_wrappers: &[],
    parameter_lists: &["formal_parameters"],
    parameter_wrappers: &["spread_parameter", "variable_declarator"],
    methods: &["method_declaration"],
    bodies: &["class_body"],
    decisions: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "switch_expression",
        "switch_block_statement_group",
        "try_statement",
        "catch_clause",
        "ternary_expression",
    ],
    logical_expressions: &["binary_expression"],
    logical_operators: C_LOGICAL_OPERATORS,
    docstring: DocstringStyle::BlockComment,
};

pub fn config() -> GrammarConfig {
    GrammarConfig {
        id: LanguageId::Java,
        language: tree_sitter_java::LANGUAGE.into(),
        function_query: FUNCTION_QUERY,
        class_query: CLASS_QUERY,
        import_query: IMPORT_QUERY,
        kinds: KINDS,
    }
}
