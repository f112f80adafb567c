//! Structural extraction: functions, classes and imports from a parsed tree.
//!
//! Every lookup goes through the grammar's [`NodeKinds`] tables, so the
//! same code handles all supported languages. Resolution never fails:
//! unresolvable names fall back to [`ANONYMOUS_FUNCTION`] or
//! [`ANONYMOUS_CLASS`], and missing parameter lists or docstrings come back
//! empty.

use std::collections::HashSet;

use tree_sitter::Node;

use crate::grammar::{DocstringStyle, NodeKinds, ParsedSource};
use crate::summary::{ClassInfo, FunctionInfo, ImportInfo, ANONYMOUS_CLASS, ANONYMOUS_FUNCTION};

/// Extract every function-like node, in source order.
pub fn extract_functions(parsed: &ParsedSource) -> Vec<FunctionInfo> {
    parsed
        .captures(parsed.grammar.function_query())
        .into_iter()
        .map(|node| {
            let (start_line, end_line) = line_span(node);
            FunctionInfo {
                name: function_name(parsed, node)
                    .unwrap_or(ANONYMOUS_FUNCTION)
                    .to_string(),
                params: parameters(parsed, node),
                start_line,
                end_line,
                docstring: docstring(parsed, node),
            }
        })
        .collect()
}

/// Extract every class-like node with its method names, in source order.
pub fn extract_classes(parsed: &ParsedSource) -> Vec<ClassInfo> {
    parsed
        .captures(parsed.grammar.class_query())
        .into_iter()
        .map(|node| {
            let (start_line, end_line) = line_span(node);
            ClassInfo {
                name: class_name(parsed, node).unwrap_or(ANONYMOUS_CLASS).to_string(),
                start_line,
                end_line,
                methods: methods(parsed, node),
            }
        })
        .collect()
}

/// Extract the trimmed text of every import-like node, in source order.
pub fn extract_imports(parsed: &ParsedSource) -> Vec<ImportInfo> {
    parsed
        .captures(parsed.grammar.import_query())
        .into_iter()
        .map(|node| ImportInfo::from(parsed.node_text(node)))
        .collect()
}

/// 1-indexed start and end lines of a node.
fn line_span(node: Node) -> (usize, usize) {
    (node.start_position().row + 1, node.end_position().row + 1)
}

fn is_comment(node: &Node) -> bool {
    node.kind().ends_with("comment")
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

fn function_name<'s>(parsed: &ParsedSource<'_, 's>, node: Node) -> Option<&'s str> {
    let kinds = parsed.grammar.kinds();

    if let Some(name) = node.child_by_field_name("name") {
        if kinds.function_names.contains(&name.kind()) {
            return Some(parsed.node_text(name));
        }
    }

    // Arrow functions and lambdas may hold a bare identifier that is a
    // parameter, not a name.
    if !kinds.anonymous_functions.contains(&node.kind()) {
        if let Some(child) = node
            .children(&mut node.walk())
            .find(|c| kinds.function_names.contains(&c.kind()))
        {
            return Some(parsed.node_text(child));
        }
    }

    let wrappers: Vec<Node> = node
        .children(&mut node.walk())
        .filter(|c| kinds.declarators.contains(&c.kind()))
        .collect();
    wrappers
        .into_iter()
        .find_map(|wrapper| function_name(parsed, wrapper))
}

fn class_name<'s>(parsed: &ParsedSource<'_, 's>, node: Node) -> Option<&'s str> {
    let kinds = parsed.grammar.kinds();

    if let Some(name) = node.child_by_field_name("name") {
        return Some(parsed.node_text(name));
    }

    // Rust impl blocks are named by their target type
    if let Some(target) = node.child_by_field_name("type") {
        if kinds.name_wrappers.contains(&target.kind()) {
            return class_name(parsed, target);
        }
        return Some(parsed.node_text(target));
    }

    let children: Vec<Node> = node.children(&mut node.walk()).collect();
    if let Some(child) = children
        .iter()
        .find(|c| kinds.class_names.contains(&c.kind()))
    {
        return Some(parsed.node_text(*child));
    }

    children
        .into_iter()
        .filter(|c| kinds.name_wrappers.contains(&c.kind()))
        .find_map(|wrapper| class_name(parsed, wrapper))
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

fn parameters(parsed: &ParsedSource, node: Node) -> Vec<String> {
    let kinds = parsed.grammar.kinds();
    let Some(list) = parameter_list(kinds, node) else {
        return Vec::new();
    };

    // Single unparenthesized arrow parameter
    if kinds.parameter_names.contains(&list.kind()) {
        return vec![parsed.node_text(list).to_string()];
    }

    let params: Vec<Node> = list
        .named_children(&mut list.walk())
        .filter(|c| !is_comment(c))
        .collect();
    params
        .into_iter()
        .flat_map(|param| parameter_names(parsed, param))
        .collect()
}

fn parameter_list<'t>(kinds: &NodeKinds, node: Node<'t>) -> Option<Node<'t>> {
    if let Some(list) = node.child_by_field_name("parameters") {
        return Some(list);
    }
    if let Some(param) = node.child_by_field_name("parameter") {
        return Some(param);
    }

    let children: Vec<Node<'t>> = node.children(&mut node.walk()).collect();
    if let Some(list) = children
        .iter()
        .find(|c| kinds.parameter_lists.contains(&c.kind()))
    {
        return Some(*list);
    }

    children
        .into_iter()
        .filter(|c| kinds.declarators.contains(&c.kind()))
        .find_map(|wrapper| parameter_list(kinds, wrapper))
}

/// Names declared by one entry of a parameter list.
///
/// Go groups several names in one declaration (`a, b int`), so this can
/// yield more than one.
fn parameter_names(parsed: &ParsedSource, param: Node) -> Vec<String> {
    let kinds = parsed.grammar.kinds();
    let text = |node: Node| parsed.node_text(node).to_string();

    if kinds.parameter_names.contains(&param.kind())
        || kinds.parameter_wrappers.contains(&param.kind())
    {
        return binding_name(parsed, param).map(str::to_string).into_iter().collect();
    }

    let names: Vec<String> = param
        .children_by_field_name("name", &mut param.walk())
        .map(text)
        .collect();
    if !names.is_empty() {
        return names;
    }

    if let Some(pattern) = param.child_by_field_name("pattern") {
        // Destructuring patterns have no single name; keep their text.
        let name = binding_name(parsed, pattern).unwrap_or_else(|| parsed.node_text(pattern));
        return vec![name.to_string()];
    }

    if let Some(declarator) = param.child_by_field_name("declarator") {
        return binding_name(parsed, declarator)
            .map(|name| vec![name.to_string()])
            .unwrap_or_default();
    }

    let first = param.named_children(&mut param.walk()).find(|c| {
        kinds.parameter_names.contains(&c.kind()) || kinds.parameter_wrappers.contains(&c.kind())
    });
    first
        .and_then(|node| binding_name(parsed, node))
        .map(str::to_string)
        .into_iter()
        .collect()
}

/// Resolve `*name`, `&name`, `name[]`, `...name` and friends down to the
/// identifier.
fn binding_name<'s>(parsed: &ParsedSource<'_, 's>, node: Node) -> Option<&'s str> {
    let kinds = parsed.grammar.kinds();

    if kinds.parameter_names.contains(&node.kind()) {
        return Some(parsed.node_text(node));
    }
    if !kinds.declarators.contains(&node.kind())
        && !kinds.parameter_wrappers.contains(&node.kind())
    {
        return None;
    }
    for field in ["name", "declarator", "pattern"] {
        if let Some(inner) = node.child_by_field_name(field) {
            return binding_name(parsed, inner);
        }
    }

    let children: Vec<Node> = node.named_children(&mut node.walk()).collect();
    children
        .into_iter()
        .find_map(|child| binding_name(parsed, child))
}

// ---------------------------------------------------------------------------
// Docstrings
// ---------------------------------------------------------------------------

fn docstring(parsed: &ParsedSource, node: Node) -> Option<String> {
    match parsed.grammar.kinds().docstring {
        DocstringStyle::BodyString => body_docstring(parsed, node),
        DocstringStyle::BlockComment => block_comment_before(parsed.source, node.start_byte()),
        DocstringStyle::None => None,
    }
}

/// The first string expression statement in a function body, quotes
/// stripped.
fn body_docstring(parsed: &ParsedSource, node: Node) -> Option<String> {
    let body = node.child_by_field_name("body")?;
    let string = body
        .named_children(&mut body.walk())
        .filter(|c| c.kind() == "expression_statement")
        .find_map(|statement| statement.named_child(0).filter(|c| c.kind() == "string"))?;

    let content = string
        .named_children(&mut string.walk())
        .find(|c| c.kind() == "string_content");
    let text = match content {
        Some(content) => parsed.node_text(content),
        None => parsed
            .node_text(string)
            .trim_matches(|c| c == '"' || c == '\''),
    };

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// The `/** ... */` comment ending right before `start`, cleaned of comment
/// markers.
///
/// Only whitespace, annotations and modifiers may sit between the comment
/// and the function; any `;`, `{` or `}` in the gap means the comment
/// belongs to something earlier.
fn block_comment_before(source: &str, start: usize) -> Option<String> {
    let before = source.get(..start)?;
    let open = before.rfind("/**")?;
    let close = open + 2 + before[open + 2..].find("*/")?;

    let gap = &before[close + 2..];
    if gap.contains([';', '{', '}']) {
        return None;
    }

    let cleaned = before[open..close]
        .lines()
        .map(|line| line.trim().trim_start_matches(['/', '*']).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    (!cleaned.is_empty()).then_some(cleaned)
}

// ---------------------------------------------------------------------------
// Methods
// ---------------------------------------------------------------------------

fn methods(parsed: &ParsedSource, class: Node) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    collect_methods(parsed, class, &mut seen, &mut found);
    found
}

/// Depth-first over body containers. A method seen twice at the same line
/// is only listed once.
fn collect_methods<'s>(
    parsed: &ParsedSource<'_, 's>,
    node: Node,
    seen: &mut HashSet<(&'s str, usize)>,
    found: &mut Vec<String>,
) {
    let kinds = parsed.grammar.kinds();
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        if kinds.methods.contains(&child.kind()) {
            if let Some(name) = function_name(parsed, child) {
                if seen.insert((name, child.start_position().row)) {
                    found.push(name.to_string());
                }
            }
        } else if kinds.bodies.contains(&child.kind()) {
            collect_methods(parsed, child, seen, found);
        }
    }
}
