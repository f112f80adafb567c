//! Cyclomatic complexity and size statistics.
//!
//! Both walks are iterative over a [`TreeCursor`](tree_sitter::TreeCursor),
//! so deeply nested sources cannot overflow the stack.

use tree_sitter::{Node, Tree};

use crate::grammar::{Grammar, NodeKinds};
use crate::summary::{ComplexityScore, SummaryStats};

/// 1 plus one per decision point in the tree.
///
/// Decision points are the grammar's decision kinds plus logical
/// expressions whose operator is a logical AND/OR spelling.
pub fn complexity_of(grammar: &Grammar, tree: &Tree) -> ComplexityScore {
    let kinds = grammar.kinds();
    let mut score: ComplexityScore = 1;

    walk(tree, |node, _| {
        if kinds.decisions.contains(&node.kind()) || is_logical(kinds, node) {
            score += 1;
        }
    });

    score
}

/// Line counts plus node count and depth of the tree.
pub fn summary_of(tree: &Tree, source: &str) -> SummaryStats {
    let mut stats = line_stats(source);

    walk(tree, |_, depth| {
        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(depth);
    });

    stats
}

/// Line counts only, for input that produced no tree.
pub fn line_stats(source: &str) -> SummaryStats {
    SummaryStats {
        total_lines: source.split('\n').count(),
        non_empty_lines: source
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .count(),
        node_count: 0,
        max_depth: 0,
    }
}

fn is_logical(kinds: &NodeKinds, node: Node) -> bool {
    if !kinds.logical_expressions.contains(&node.kind()) {
        return false;
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| kinds.logical_operators.contains(&child.kind()));
    found
}

/// Pre-order visit of every node (named and anonymous) with its depth.
fn walk(tree: &Tree, mut visit: impl FnMut(Node, usize)) {
    let mut cursor = tree.walk();
    let mut depth = 0;

    loop {
        visit(cursor.node(), depth);

        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
            depth -= 1;
        }
    }
}
