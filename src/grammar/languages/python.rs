//! Python grammar configuration.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

const FUNCTION_QUERY: &str = "(function_definition) @function";

const CLASS_QUERY: &str = "(class_definition) @class";

const IMPORT_QUERY: &str = r#"
[
  (import_statement)
  (import_from_statement)
] @import
"#;

/// Python spells logical operators as keywords and parses them as
/// `boolean_operator`, not `binary_expression`.
const KINDS: NodeKinds = NodeKinds {
    function_names: &["identifier"],
    class_names: &["identifier"],
    parameter_names: &["identifier"],
    anonymous_functions: &["lambda"],
    declarators: &[],
    name_wrappers: &[],
    parameter_lists: &["parameters", "lambda_parameters"],
    parameter_wrappers: &["list_splat_pattern", "dictionary_splat_pattern"],
    methods: &["function_definition"],
    bodies: &["block", "decorated_definition"],
    decisions: &[
        "if_statement",
        "elif_clause",
        "else_clause",
        "for_statement",
        "while_statement",
        "try_statement",
        "except_clause",
        "conditional_expression",
        "match_statement",
        "case_clause",
    ],
    logical_expressions: &["boolean_operator"],
    logical_operators: &["and", "or"],
    docstring: DocstringStyle::BodyString,
};

pub fn config() -> GrammarConfig {
    GrammarConfig {
        id: LanguageId::Python,
        language: tree_sitter_python::LANGUAGE.into(),
        function_query: FUNCTION_QUERY,
        class_query: CLASS_QUERY,
        import_query: IMPORT_QUERY,
        kinds: KINDS,
    }
}
