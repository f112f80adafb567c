//! C grammar configuration.
//!
//! Function names and parameters sit inside declarator chains
//! (`pointer_declarator` -> `function_declarator` -> `identifier`), so
//! resolution walks the `declarators` table.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

use super::C_LOGICAL_OPERATORS;

const FUNCTION_QUERY: &str = "(function_definition) @function";

const CLASS_QUERY: &str = "(struct_specifier) @class";

const IMPORT_QUERY: &str = "(preproc_include) @import";

const DECISIONS: &[&str] = &[
    "if_statement",
    "else_clause",
    "for_statement",
    "while_statement",
    "do_statement",
    "switch_statement",
    "case_statement",
    "conditional_expression",
];

const DECLARATORS: &[&str] = &[
    "function_declarator",
    "pointer_declarator",
    "parenthesized_declarator",
    "array_declarator",
];

const KINDS: NodeKinds = NodeKinds {
    function_names: &["identifier"],
    class_names: &["type_identifier"],
    parameter_names: &["identifier"],
    anonymous_functions: &[],
    declarators: DECLARATORS,
    name_wrappers: &[],
    parameter_lists: &["parameter_list"],
    parameter_wrappers: &[],
    methods: &["function_definition"],
    bodies: &["field_declaration_list"],
    decisions: DECISIONS,
    logical_expressions: &["binary_expression"],
    logical_operators: C_LOGICAL_OPERATORS,
    docstring: DocstringStyle::None,
};

pub fn config() -> GrammarConfig {
    GrammarConfig {
        id: LanguageId::C,
        language: tree_sitter_c::LANGUAGE.into(),
        function_query: FUNCTION_QUERY,
        class_query: CLASS_QUERY,
        import_query: IMPORT_QUERY,
        kinds: KINDS,
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::analyze;
    use crate::language::LanguageId;

    const PROGRAM: &str = r#"#include <stdio.h>
#include "util.h"
#include <stdlib.h>

struct point {
    int x;
    int y;
};

int add(int a, int b) {
    return a + b;
}

void print_hello(void) {
    printf("hello\n");
}

char *dup(const char *s) {
    return strdup(s);
}
"#;

    #[test]
    fn test_c_functions() {
        let result = analyze(LanguageId::C, PROGRAM).unwrap();
        let names: Vec<_> = result.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["add", "print_hello", "dup"]);

        assert_eq!(result.functions[0].params, vec!["a", "b"]);
        assert!(result.functions[1].params.is_empty());
        assert_eq!(result.functions[2].params, vec!["s"]);
        assert_eq!(result.functions[0].start_line, 10);
        assert_eq!(result.functions[0].end_line, 12);
        assert!(result.functions.iter().all(|f| f.docstring.is_none()));
    }

    #[test]
    fn test_c_structs() {
        let result = analyze(LanguageId::C, PROGRAM).unwrap();
        assert_eq!(result.classes.len(), 1);
        assert_eq!(result.classes[0].name, "point");
        assert!(result.classes[0].methods.is_empty());
    }

    #[test]
    fn test_c_includes_trimmed() {
        let result = analyze(LanguageId::C, PROGRAM).unwrap();
        let imports: Vec<_> = result.imports.iter().map(|i| i.as_str()).collect();
        assert_eq!(
            imports,
            vec!["#include <stdio.h>", "#include \"util.h\"", "#include <stdlib.h>"]
        );
    }

    #[test]
    fn test_c_complexity() {
        let source = r#"
int classify(int x) {
    if (x < 0 || x > 100) return -1;
    for (int i = 0; i < x; i++) {
        switch (i) {
            case 1: break;
            case 2: break;
        }
    }
    return x ? 1 : 0;
}
"#;
        let result = analyze(LanguageId::C, source).unwrap();
        // 1 (base) + if + || + for + switch + 2 cases + conditional
        assert_eq!(result.complexity, 8);
    }
}
