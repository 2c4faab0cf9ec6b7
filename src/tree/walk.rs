//! Traversals that recover absolute positions.

use text_size::{TextRange, TextSize};

use super::node::{ErrorInfo, Tree, TreeKind};

/// Depth-first, left-to-right traversal yielding each node with its absolute
/// left edge.
pub struct Preorder<'a> {
    pending: Vec<(TextSize, &'a Tree)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (TextSize, &'a Tree);

    fn next(&mut self) -> Option<Self::Item> {
        let (edge, tree) = self.pending.pop()?;
        let start = self.pending.len();
        self.pending.extend(tree.children_at(edge));
        self.pending[start..].reverse();
        Some((edge, tree))
    }
}

impl Tree {
    /// Walks the tree rooted here, treating this node's left edge as 0.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            pending: vec![(TextSize::new(0), self)],
        }
    }

    /// Leaves and error nodes in source order, with absolute ranges.
    pub fn leaves(&self) -> impl Iterator<Item = (TextRange, &Tree)> {
        self.preorder()
            .filter(|(_, tree)| !matches!(tree.kind(), TreeKind::Internal(_)))
            .map(|(edge, tree)| (tree.range_at(edge), tree))
    }

    /// Every error node with its absolute range.
    pub fn errors(&self) -> impl Iterator<Item = (TextRange, &ErrorInfo)> {
        self.preorder().filter_map(|(edge, tree)| {
            tree.error_info().map(|info| (tree.range_at(edge), info))
        })
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}
