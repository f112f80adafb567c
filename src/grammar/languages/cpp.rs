//! C++ grammar configuration.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

use super::C_LOGICAL_OPERATORS;

const FUNCTION_QUERY: &str = "(function_definition) @function";

const CLASS_QUERY: &str = r#"
[
  (class_specifier)
  (struct_specifier)
] @class
"#;

const IMPORT_QUERY: &str = "(preproc_include) @import";

/// The C table plus range-for and exception handling.
const DECISIONS: &[&str] = &[
    "if_statement",
    "else_clause",
    "for_statement",
    "for_range_loop",
    "while_statement",
    "do_statement",
    "switch_statement",
    "case_statement",
    "conditional_expression",
    "try_statement",
    "catch_clause",
];

const KINDS: NodeKinds = NodeKinds {
    function_names: &[
        "identifier",
        "field_identifier",
        "qualified_identifier",
        "destructor_name",
        "operator_name",
    ],
    class_names: &["type_identifier"],
    parameter_names: &["identifier"],
    anonymous_functions: &["lambda_expression"],
    declarators: &[
        "function_declarator",
        "pointer_declarator",
        "reference_declarator",
        "parenthesized_declarator",
        "array_declarator",
    ],
    name_wrappers: &[],
    parameter_lists: &["parameter_list"],
    parameter_wrappers: &["variadic_declarator"],
    methods: &["function_definition"],
    bodies: &["field_declaration_list", "template_declaration"],
    decisions: DECISIONS,
    logical_expressions: &["binary_expression"],
    logical_operators: C_LOGICAL_OPERATORS,
    docstring: DocstringStyle::None,
};

pub fn config() -> GrammarConfig {
    GrammarConfig {
        id: LanguageId::Cpp,
        language: tree_sitter_cpp::LANGUAGE.into(),
        function_query: FUNCTION_QUERY,
        class_query: CLASS_QUERY,
        import_query: IMPORT_QUERY,
        kinds: KINDS,
    }
}
