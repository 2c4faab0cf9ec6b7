//! Leaves plus padding reproduce the source exactly.

use rstest::rstest;
use sapling::TextSize;

use crate::helpers::grammars::STATEMENTS;
use crate::helpers::tree_assertions::assert_span_coverage;

#[rstest]
#[case("1;2;")]
#[case("  1 ;  2 ; ")]
#[case("\n1\n+\n2\n;\n")]
#[case("\t10+\t20 ;3;\r\n")]
#[case("1;2+;3;")]
#[case("1 ; # ; 2 ;")]
#[case("   ")]
fn test_leaves_cover_source(#[case] input: &str) {
    let g = &*STATEMENTS;
    let tree = g.parse(input);
    assert_span_coverage(&tree, input);

    let syntax = tree.to_syntax(input, g.trivia);
    assert_eq!(syntax.text().to_string(), input);
}

#[test]
fn test_root_range_excludes_trailing_whitespace() {
    let g = &*STATEMENTS;
    let tree = g.parse("  1;  ");
    assert_eq!(tree.offset(), TextSize::new(2));
    assert_eq!(tree.size(), TextSize::new(2));
    assert_eq!(tree.total_len(), TextSize::new(4));
}

#[test]
fn test_child_ranges_are_absolute() {
    let g = &*STATEMENTS;
    let input = "1; 22;";
    let tree = g.parse(input);
    let texts: Vec<&str> = tree
        .child_ranges(TextSize::new(0))
        .map(|(range, _)| &input[usize::from(range.start())..usize::from(range.end())])
        .collect();
    assert_eq!(texts, ["1;", "22;"]);
}
