#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Node-tree shapes produced by the default tokenizer.

use pretty_assertions::assert_eq;
use scour_scan::{Error, LiteralKind, NodeKind, ScanError, Scanner};

fn kinds(children: &[scour_scan::Node]) -> Vec<NodeKind> {
    children.iter().map(|n| n.kind).collect()
}

#[test]
fn statement_splits_into_words_whitespace_and_tokens() {
    let scanner = Scanner::with_defaults();
    let root = scanner.tokenize("var x = 1;").unwrap();
    assert_eq!(root.kind, NodeKind::Root);
    assert_eq!(
        kinds(&root.children),
        vec![
            NodeKind::Text,
            NodeKind::Whitespace,
            NodeKind::Text,
            NodeKind::Whitespace,
            NodeKind::Token,
            NodeKind::Whitespace,
            NodeKind::Text,
            NodeKind::Token,
        ]
    );
}

#[test]
fn children_tile_the_whole_input() {
    let scanner = Scanner::with_defaults();
    let source = "if (a) { b(); } // done\n";
    let root = scanner.tokenize(source).unwrap();
    let mut rebuilt = String::new();
    for child in &root.children {
        rebuilt.push_str(child.text(source));
    }
    assert_eq!(rebuilt, source);
}

#[test]
fn brace_block_tokenizes_its_interior() {
    let scanner = Scanner::with_defaults();
    let source = "if (a) { b(); }";
    let root = scanner.tokenize(source).unwrap();
    let block = root
        .children
        .iter()
        .find(|n| n.kind == NodeKind::Block)
        .expect("block node");
    assert_eq!(block.text(source), "{ b(); }");
    assert_eq!(
        kinds(&block.children),
        vec![
            NodeKind::Whitespace,
            NodeKind::Text,
            NodeKind::Token,
            NodeKind::Token,
            NodeKind::Token,
            NodeKind::Whitespace,
        ]
    );
    assert_eq!(block.children[1].text(source), "b");
}

#[test]
fn separators_inside_strings_stay_inside_the_string_node() {
    let scanner = Scanner::with_defaults();
    let source = "v = \"a;{b}\";";
    let root = scanner.tokenize(source).unwrap();
    let string = root
        .children
        .iter()
        .find(|n| n.kind == NodeKind::Str)
        .expect("string node");
    assert_eq!(string.text(source), "\"a;{b}\"");
    // No block node appears for the `{` inside the literal.
    assert!(root.children.iter().all(|n| n.kind != NodeKind::Block));
}

#[test]
fn comment_kinds_are_distinguished() {
    let scanner = Scanner::with_defaults();
    let source = "a /* b */ c // d\ne";
    let root = scanner.tokenize(source).unwrap();
    let found: Vec<NodeKind> = root
        .children
        .iter()
        .filter(|n| {
            matches!(n.kind, NodeKind::BlockComment | NodeKind::LineComment)
        })
        .map(|n| n.kind)
        .collect();
    assert_eq!(found, vec![NodeKind::BlockComment, NodeKind::LineComment]);
}

#[test]
fn kind_names_are_exposed_for_consumers() {
    let scanner = Scanner::with_defaults();
    let root = scanner.tokenize("x;").unwrap();
    assert_eq!(root.kind.name(), "root");
    assert_eq!(root.children[0].kind.name(), "text");
    assert_eq!(root.children[1].kind.name(), "token");
}

#[test]
fn unterminated_string_is_a_scan_error() {
    let scanner = Scanner::with_defaults();
    assert_eq!(
        scanner.tokenize("x = \"oops").unwrap_err(),
        Error::Scan(ScanError::UnterminatedLiteral {
            kind: LiteralKind::Str,
            start: 4,
        })
    );
}

#[test]
fn unbalanced_brace_is_a_scan_error() {
    let scanner = Scanner::with_defaults();
    assert_eq!(
        scanner.tokenize("{ a; ").unwrap_err(),
        Error::Scan(ScanError::UnterminatedLiteral {
            kind: LiteralKind::Block,
            start: 0,
        })
    );
}
