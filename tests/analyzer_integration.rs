//! Integration tests for the analyzer against the testdata fixtures.
//!
//! One fixture per supported language; each test checks the structure a
//! reader would expect from the file.

use std::path::PathBuf;

use codelens::{analyze, analyze_id, detect_language, LanguageId, StructuralSummary};

const FIXTURES: &[&str] = &[
    "inventory.py",
    "cache.js",
    "router.ts",
    "Cart.java",
    "lines.c",
    "polygon.cpp",
    "store.go",
    "lexer.rs",
];

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(testdata_path().join(name)).expect("should read fixture")
}

fn analyze_fixture(name: &str) -> StructuralSummary {
    let language = detect_language(name).expect("fixture should have a supported extension");
    analyze(language, &read_fixture(name)).expect("analysis should succeed")
}

fn function_names(summary: &StructuralSummary) -> Vec<&str> {
    summary.functions.iter().map(|f| f.name.as_str()).collect()
}

fn class_names(summary: &StructuralSummary) -> Vec<&str> {
    summary.classes.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_fixture_languages() {
    let detected: Vec<_> = FIXTURES.iter().map(|f| detect_language(f)).collect();
    let expected: Vec<_> = LanguageId::ALL.iter().copied().map(Some).collect();
    assert_eq!(detected, expected);
}

#[test]
fn test_python_fixture() {
    let result = analyze_fixture("inventory.py");

    assert_eq!(
        function_names(&result),
        vec!["restock", "__init__", "add", "low_stock", "load"]
    );
    assert_eq!(class_names(&result), vec!["Item", "Inventory"]);
    assert_eq!(
        result.class("Inventory").unwrap().methods,
        vec!["__init__", "add", "low_stock"]
    );
    assert!(result.class("Missing").is_none());

    let load = result.function("load").unwrap();
    assert_eq!(load.params, vec!["path", "strict"]);
    assert!(load
        .docstring
        .as_deref()
        .unwrap()
        .starts_with("Load an inventory from disk."));
    assert_eq!(result.function("restock").unwrap().docstring.as_deref(), Some("Add stock."));

    let imports: Vec<_> = result.imports.iter().map(|i| i.as_str()).collect();
    assert_eq!(imports, vec!["import os", "from dataclasses import dataclass, field"]);

    // if (restock) + if + and (load); the comprehension filter is not a branch
    assert_eq!(result.complexity, 4);
}

#[test]
fn test_javascript_fixture() {
    let result = analyze_fixture("cache.js");

    assert_eq!(function_names(&result), vec!["loadConfig", "anonymous"]);
    assert!(!result.functions[0].is_anonymous());
    assert!(result.functions[1].is_anonymous());
    assert_eq!(result.functions[0].params, vec!["path", "defaults"]);
    assert_eq!(
        result.functions[0].docstring.as_deref(),
        Some("Parse a config file.")
    );
    assert_eq!(result.functions[1].params, vec!["cache"]);

    assert_eq!(class_names(&result), vec!["Cache"]);
    assert_eq!(result.classes[0].methods, vec!["lookup", "store"]);

    // if + || + else
    assert_eq!(result.complexity, 4);
}

#[test]
fn test_typescript_fixture() {
    let result = analyze_fixture("router.ts");

    // Interface method signatures have no body and are not functions
    assert_eq!(function_names(&result), vec!["register", "handle", "createRouter"]);
    assert_eq!(result.functions[0].params, vec!["path", "handler"]);
    assert_eq!(class_names(&result), vec!["Router"]);
    assert_eq!(result.classes[0].methods, vec!["register", "handle"]);
    assert_eq!(result.imports.len(), 2);
    assert_eq!(result.complexity, 2);
}

#[test]
fn test_java_fixture() {
    let result = analyze_fixture("Cart.java");

    assert_eq!(function_names(&result), vec!["add", "total"]);
    assert_eq!(
        result.functions[0].docstring.as_deref(),
        Some("Adds a price to the cart.")
    );
    assert_eq!(result.functions[1].docstring, None);
    assert_eq!(result.functions[1].params, vec!["discounted"]);

    assert_eq!(class_names(&result), vec!["Cart"]);
    assert_eq!(result.classes[0].methods, vec!["add", "total"]);
    assert_eq!(result.imports.len(), 2);

    // if + enhanced for + ternary
    assert_eq!(result.complexity, 4);
}

#[test]
fn test_c_fixture() {
    let result = analyze_fixture("lines.c");

    assert_eq!(function_names(&result), vec!["is_blank", "count_lines"]);
    assert_eq!(result.functions[0].params, vec!["line"]);
    assert_eq!(result.functions[1].params, vec!["buf"]);
    assert_eq!(result.classes[0].name, "buffer");
    assert_eq!(result.imports.len(), 2);

    // while + if + && + for + if
    assert_eq!(result.complexity, 6);
}

#[test]
fn test_cpp_fixture() {
    let result = analyze_fixture("polygon.cpp");

    assert_eq!(
        function_names(&result),
        vec!["Polygon", "size", "Polygon::perimeter"]
    );
    assert_eq!(result.functions[0].params, vec!["points"]);
    assert_eq!(class_names(&result), vec!["Point", "Polygon"]);
    assert_eq!(result.classes[1].methods, vec!["Polygon", "size"]);
    assert_eq!(result.complexity, 2);
}

#[test]
fn test_go_fixture() {
    let result = analyze_fixture("store.go");

    assert_eq!(function_names(&result), vec!["New", "Get", "Put"]);
    assert_eq!(result.functions[1].params, vec!["key"]);
    assert_eq!(result.functions[2].params, vec!["key", "value"]);
    assert_eq!(class_names(&result), vec!["Store"]);
    assert!(result.classes[0].methods.is_empty());
    assert_eq!(result.imports.len(), 1);
    assert_eq!(result.complexity, 2);
}

#[test]
fn test_rust_fixture() {
    let result = analyze_fixture("lexer.rs");

    assert_eq!(
        function_names(&result),
        vec!["new", "next_token", "fmt", "count"]
    );
    assert_eq!(result.functions[1].params, vec!["self"]);
    assert_eq!(result.functions[3].params, vec!["tokens"]);

    assert_eq!(class_names(&result), vec!["Token", "Lexer", "Lexer", "Token"]);
    assert_eq!(result.classes[2].methods, vec!["new", "next_token"]);
    assert_eq!(result.classes[3].methods, vec!["fmt"]);

    // two matches with 3 and 2 arms, one for loop
    assert_eq!(result.complexity, 9);
}

#[test]
fn test_structural_properties_hold_for_every_fixture() {
    for name in FIXTURES {
        let source = read_fixture(name);
        let result = analyze_fixture(name);
        let total = result.summary.total_lines;

        assert_eq!(total, source.split('\n').count(), "{}", name);
        assert!(result.summary.non_empty_lines <= total, "{}", name);
        assert!(result.summary.node_count > 0, "{}", name);
        assert!(result.complexity >= 1, "{}", name);

        for f in &result.functions {
            assert!(f.start_line >= 1 && f.start_line <= f.end_line, "{}: {}", name, f.name);
            assert!(f.end_line <= total, "{}: {}", name, f.name);
        }
        for c in &result.classes {
            assert!(c.start_line >= 1 && c.start_line <= c.end_line, "{}: {}", name, c.name);
            assert!(c.end_line <= total, "{}: {}", name, c.name);
        }
        for import in &result.imports {
            assert!(source.contains(import.as_str()), "{}: {}", name, import.as_str());
            assert_eq!(import.as_str(), import.as_str().trim());
        }
    }
}

#[test]
fn test_analysis_is_deterministic() {
    for name in FIXTURES {
        assert_eq!(analyze_fixture(name), analyze_fixture(name), "{}", name);
    }
}

#[test]
fn test_analyze_by_id_matches_enum() {
    let source = read_fixture("store.go");
    assert_eq!(analyze_id("go", &source).unwrap(), analyze(LanguageId::Go, &source).unwrap());
    assert!(analyze_id("golang", &source).is_err());
}

#[test]
fn test_json_keys() {
    let result = analyze_fixture("inventory.py");
    let value = serde_json::to_value(&result).unwrap();

    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["classes", "complexity", "functions", "imports", "summary"]);

    let mut stats: Vec<_> = value["summary"].as_object().unwrap().keys().cloned().collect();
    stats.sort();
    assert_eq!(stats, vec!["max_depth", "node_count", "non_empty_lines", "total_lines"]);

    let mut function: Vec<_> = value["functions"][0].as_object().unwrap().keys().cloned().collect();
    function.sort();
    assert_eq!(function, vec!["docstring", "end_line", "name", "params", "start_line"]);
}

#[test]
fn test_nested_branching_raises_complexity() {
    let cases = [
        (
            LanguageId::Python,
            "def f(a, b, c):\n    if a:\n        for x in b:\n            if c:\n                pass\n    return 0\n",
            "def f(a, b, c):\n    return 0\n",
        ),
        (
            LanguageId::Java,
            "class A {\n    int f(boolean a, int[] b, boolean c) {\n        if (a) {\n            for (int x : b) {\n                if (c) {\n                    return x;\n                }\n            }\n        }\n        return 0;\n    }\n}\n",
            "class A {\n    int f(boolean a, int[] b, boolean c) {\n        return 0;\n    }\n}\n",
        ),
        (
            LanguageId::Rust,
            "fn f(a: bool, b: &[i32], c: bool) -> i32 {\n    if a {\n        for x in b {\n            if c {\n                return *x;\n            }\n        }\n    }\n    0\n}\n",
            "fn f(a: bool, b: &[i32], c: bool) -> i32 {\n    0\n}\n",
        ),
    ];

    for (language, nested, flat) in cases {
        let nested = analyze(language, nested).unwrap().complexity;
        let flat = analyze(language, flat).unwrap().complexity;
        assert_eq!(flat, 1, "{}", language.as_str());
        // if + for + if
        assert_eq!(nested, 4, "{}", language.as_str());
        assert!(nested > flat, "{}", language.as_str());
    }
}
