//! Assertion helpers over parsed trees.

use sapling::{ParseTable, TextSize, Tree, TreeKind};

/// Compact rendering of `tree` for structural assertions, e.g.
/// `expr(expr(NUM"1") PLUS"+" NUM"2")`. Error nodes render as `ERROR"text"`.
pub fn sexp(tree: &Tree, table: &ParseTable, source: &str) -> String {
    let mut out = String::new();
    write_sexp(tree, TextSize::new(0), table, source, &mut out);
    out
}

fn write_sexp(tree: &Tree, left_edge: TextSize, table: &ParseTable, source: &str, out: &mut String) {
    out.push_str(table.symbol_name(tree.symbol()));
    match tree.kind() {
        TreeKind::Internal(_) => {
            out.push('(');
            for (index, (edge, child)) in tree.children_at(left_edge).enumerate() {
                if index > 0 {
                    out.push(' ');
                }
                write_sexp(child, edge, table, source, out);
            }
            out.push(')');
        }
        TreeKind::Leaf | TreeKind::Error(_) => {
            let range = tree.range_at(left_edge);
            out.push('"');
            out.push_str(&source[usize::from(range.start())..usize::from(range.end())]);
            out.push('"');
        }
    }
}

/// Leaves and their padding, in order, must reproduce `source` exactly with
/// only whitespace outside the leaves.
pub fn assert_span_coverage(tree: &Tree, source: &str) {
    let mut rebuilt = String::new();
    let mut cursor = 0usize;
    for (range, _) in tree.leaves() {
        let start = usize::from(range.start());
        let end = usize::from(range.end());
        assert!(start >= cursor, "leaf at {:?} overlaps the previous one", range);
        let padding = &source[cursor..start];
        assert!(
            padding.bytes().all(|b| b.is_ascii_whitespace()),
            "non-whitespace {:?} between leaves",
            padding
        );
        rebuilt.push_str(padding);
        rebuilt.push_str(&source[start..end]);
        cursor = end;
    }
    let rest = &source[cursor..];
    assert!(rest.bytes().all(|b| b.is_ascii_whitespace()), "unparsed tail {:?}", rest);
    rebuilt.push_str(rest);
    assert_eq!(rebuilt, source);
}
