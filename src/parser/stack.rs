//! The parse stack.

use text_size::TextSize;

use crate::base::{StateId, Symbol};
use crate::tree::{Tree, TreeKind};

/// One entry: the state reached after pushing `tree`.
#[derive(Debug, Clone)]
pub struct StackEntry {
    pub state: StateId,
    pub tree: Tree,
    end: TextSize,
}

impl StackEntry {
    /// Absolute end of the entry's tree.
    pub fn end(&self) -> TextSize {
        self.end
    }
}

/// Ordered `(state, tree)` entries above an implicit base in
/// [`StateId::ROOT`].
///
/// Entries own their tree handles: pushing retains, and every entry removed
/// without being rebuilt into a parent releases its tree when dropped. Each
/// entry also caches its absolute end position, so the driver always knows
/// where the unparsed input begins.
#[derive(Debug, Clone, Default)]
pub struct ParseStack {
    entries: Vec<StackEntry>,
}

impl ParseStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    pub fn push(&mut self, state: StateId, tree: Tree) {
        let end = self.end_position() + tree.total_len();
        self.entries.push(StackEntry { state, tree, end });
    }

    /// Pops `child_count` entries and builds the nonterminal they reduce to.
    ///
    /// Children whose collapse flag is set and which are themselves
    /// nonterminals are replaced by their own children. The new node is
    /// returned, not pushed. With no children the node is empty and sits at
    /// the current end of the stack.
    pub fn reduce(&mut self, symbol: Symbol, child_count: usize, collapse: &[bool]) -> Tree {
        let count = child_count.min(self.entries.len());
        let popped = self.entries.split_off(self.entries.len() - count);
        let mut children = Vec::with_capacity(count);
        for (index, entry) in popped.into_iter().enumerate() {
            let collapsed = collapse.get(index).copied().unwrap_or(false);
            if collapsed && matches!(entry.tree.kind(), TreeKind::Internal(_)) {
                children.extend(entry.tree.children().iter().cloned());
            } else {
                children.push(entry.tree);
            }
        }
        Tree::internal(symbol, children)
    }

    /// Drops every entry beyond the first `len`.
    pub fn shrink(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// State on top; [`StateId::ROOT`] when empty.
    pub fn top_state(&self) -> StateId {
        self.state_at(self.entries.len())
    }

    pub fn top_tree(&self) -> Option<&Tree> {
        self.entries.last().map(|entry| &entry.tree)
    }

    /// State after the first `depth` entries.
    pub fn state_at(&self, depth: usize) -> StateId {
        match depth.checked_sub(1).and_then(|index| self.entries.get(index)) {
            Some(entry) => entry.state,
            None => StateId::ROOT,
        }
    }

    /// Absolute end of the first `depth` entries.
    pub fn end_at(&self, depth: usize) -> TextSize {
        match depth.checked_sub(1).and_then(|index| self.entries.get(index)) {
            Some(entry) => entry.end,
            None => TextSize::new(0),
        }
    }

    /// Absolute position where the text not yet on the stack begins,
    /// padding included.
    pub fn end_position(&self) -> TextSize {
        self.end_at(self.entries.len())
    }

    /// The finished tree: the only entry left once the input is accepted.
    pub fn root(&self) -> Option<&Tree> {
        match self.entries.as_slice() {
            [entry] => Some(&entry.tree),
            _ => None,
        }
    }
}
