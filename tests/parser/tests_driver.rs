//! LR driver tests: shift/reduce/accept over hand-built tables.

use rstest::rstest;
use sapling::{Parser, ParserConfig, StrInput, Symbol, TextRange, Whitespace};

use crate::helpers::grammars::{ARITHMETIC, STATEMENTS};
use crate::helpers::tree_assertions::sexp;

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_sums_are_left_associative() {
    let g = &*ARITHMETIC;
    let tree = g.parse("1+2+3");
    assert_eq!(
        sexp(&tree, &g.table, "1+2+3"),
        r#"expr(expr(expr(NUM"1") PLUS"+" NUM"2") PLUS"+" NUM"3")"#
    );
    assert_eq!(tree.range(), TextRange::new(0.into(), 5.into()));
    assert!(!tree.has_errors());
}

#[rstest]
#[case("7", r#"expr(NUM"7")"#)]
#[case(" 12 ", r#"expr(NUM"12")"#)]
#[case("1 +\n 22", r#"expr(expr(NUM"1") PLUS"+" NUM"22")"#)]
#[case("\t1+2 + 3\n", r#"expr(expr(expr(NUM"1") PLUS"+" NUM"2") PLUS"+" NUM"3")"#)]
fn test_arithmetic_shapes(#[case] input: &str, #[case] expected: &str) {
    let g = &*ARITHMETIC;
    assert_eq!(sexp(&g.parse(input), &g.table, input), expected);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(64)]
fn test_chunk_size_does_not_change_the_tree(#[case] chunk_size: usize) {
    let g = &*ARITHMETIC;
    let text = "10 + 200+3 +  4";
    let chunked = g
        .parser()
        .parse(&mut StrInput::new(text).with_chunk_size(chunk_size))
        .unwrap();
    assert_eq!(chunked, g.parse(text));
}

#[test]
fn test_whitespace_classifier_is_configurable() {
    let g = &*ARITHMETIC;
    let mut parser = Parser::new(&g.table, &g.tokens)
        .with_config(ParserConfig::new().with_whitespace(Whitespace::None));
    let tree = parser.parse(&mut StrInput::new("1 + 2")).unwrap();
    assert!(tree.is_error());

    let tree = parser.parse(&mut StrInput::new("1+2")).unwrap();
    assert!(!tree.has_errors());
}

#[test]
fn test_parser_is_reusable() {
    let g = &*ARITHMETIC;
    let mut parser = g.parser();
    let first = parser.parse(&mut StrInput::new("1+2")).unwrap();
    let broken = parser.parse(&mut StrInput::new("1+")).unwrap();
    let again = parser.parse(&mut StrInput::new("1+2")).unwrap();
    assert!(broken.is_error());
    assert_eq!(first, again);
    assert!(!first.ptr_eq(&again));
}

// ============================================================================
// Statements (collapse flags)
// ============================================================================

#[rstest]
#[case("1;", r#"program(stmt(expr(NUM"1") SEMI";"))"#)]
#[case(
    "1;2;3;",
    r#"program(stmt(expr(NUM"1") SEMI";") stmt(expr(NUM"2") SEMI";") stmt(expr(NUM"3") SEMI";"))"#
)]
#[case(
    "1+2; 3;",
    r#"program(stmt(expr(expr(NUM"1") PLUS"+" NUM"2") SEMI";") stmt(expr(NUM"3") SEMI";"))"#
)]
fn test_collapsed_list_is_flat(#[case] input: &str, #[case] expected: &str) {
    let g = &*STATEMENTS;
    let tree = g.parse(input);
    assert_eq!(sexp(&tree, &g.table, input), expected);
    assert!(tree.children().iter().all(|child| child.symbol() == g.symbol("stmt")));
}

#[test]
fn test_symbols_resolve_by_name() {
    let g = &*STATEMENTS;
    assert_eq!(g.table.symbol("END"), Some(Symbol::END));
    assert!(g.table.is_terminal(g.symbol("SEMI")));
    assert!(!g.table.is_terminal(g.symbol("program")));
}
