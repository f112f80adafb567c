//! Rust grammar configuration.
//!
//! Structs, enums and impl blocks are all class-like. An impl block is named
//! after the type it implements, so `impl<T> Display for Wrapper<T>` is
//! reported as `Wrapper`.

use crate::grammar::{DocstringStyle, GrammarConfig, NodeKinds};
use crate::language::LanguageId;

use super::C_LOGICAL_OPERATORS;

const FUNCTION_QUERY: &str = "(function_item) @function";

const CLASS_QUERY: &str = r#"
[
  (struct_item)
  (enum_item)
  (impl_item)
] @class
"#;

const IMPORT_QUERY: &str = "(use_declaration) @import";

const KINDS: NodeKinds = NodeKinds {
    function_names: &["identifier"],
    class_names: &["type_identifier"],
    parameter_names: &["identifier", "self"],
    anonymous_functions: &["closure_expression"],
    declarators: &[],
    name_wrappers: &["generic_type", "scoped_type_identifier"],
    parameter_lists: &["parameters"],
    parameter_wrappers: &["mut_pattern"],
    methods: &["function_item"],
    bodies: &["declaration_list"],
    decisions: &[
        "if_expression",
        "else_clause",
        "for_expression",
        "while_expression",
        "loop_expression",
        "match_expression",
        "match_arm",
    ],
    logical_expressions: &["binary_expression"],
    logical_operators: C_LOGICAL_OPERATORS,
    docstring: DocstringStyle::None,
};

pub fn config() -> GrammarConfig {
    GrammarConfig {
        id: LanguageId::Rust,
        language: tree_sitter_rust::LANGUAGE.into(),
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

    const POINTS: &str = r#"use std::fmt;
use std::collections::HashMap;

pub struct Point {
    x: i32,
    y: i32,
}

enum Shape {
    Circle(f64),
    Square(f64),
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> Wrapper<T> {
    fn get(&self) -> &T {
        &self.0
    }
}
"#;

    #[test]
    fn test_rust_items_and_impls() {
        let result = analyze(LanguageId::Rust, POINTS).unwrap();

        let names: Vec<_> = result.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Point", "Shape", "Point", "Point", "Wrapper"]);

        assert!(result.classes[0].methods.is_empty());
        assert_eq!(result.classes[2].methods, vec!["new"]);
        assert_eq!(result.classes[3].methods, vec!["fmt"]);
        assert_eq!(result.classes[4].methods, vec!["get"]);
    }

    #[test]
    fn test_rust_functions() {
        let result = analyze(LanguageId::Rust, POINTS).unwrap();

        let names: Vec<_> = result.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["new", "fmt", "get"]);
        assert_eq!(result.functions[0].params, vec!["x", "y"]);
        assert_eq!(result.functions[1].params, vec!["self", "f"]);
        assert_eq!(result.functions[0].start_line, 15);
        assert_eq!(result.functions[0].end_line, 17);
    }

    #[test]
    fn test_rust_use_declarations() {
        let result = analyze(LanguageId::Rust, POINTS).unwrap();
        let imports: Vec<_> = result.imports.iter().map(|i| i.as_str()).collect();
        assert_eq!(imports, vec!["use std::fmt;", "use std::collections::HashMap;"]);
    }

    #[test]
    fn test_rust_match_complexity() {
        let source = r#"
fn describe(n: i32) -> &'static str {
    match n {
        0 => "zero",
        x if x < 0 && x > -10 => "small negative",
        _ => "other",
    }
}
"#;
        let result = analyze(LanguageId::Rust, source).unwrap();
        // 1 (base) + match + 3 arms + &&
        assert_eq!(result.complexity, 6);
    }

    #[test]
    fn test_rust_else_if_chain() {
        let source = r#"
fn sign(n: i32) -> i32 {
    if n > 0 {
        1
    } else if n < 0 {
        -1
    } else {
        0
    }
}
"#;
        let result = analyze(LanguageId::Rust, source).unwrap();
        // 1 (base) + 2 ifs + 2 else clauses
        assert_eq!(result.complexity, 5);
    }

    #[test]
    fn test_rust_mut_parameter() {
        let source = "fn drain(mut count: usize, name: &str) {}\n";
        let result = analyze(LanguageId::Rust, source).unwrap();
        assert_eq!(result.functions[0].params, vec!["count", "name"]);
    }
}
