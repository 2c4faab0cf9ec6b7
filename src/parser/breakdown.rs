//! Stack breakdown: seeding the stack from a previous tree.
//!
//! Before reparsing edited text, the previous tree is taken apart from the
//! root down along the path that leads to the edit. Every node on the way
//! that ends strictly before the edit is pushed whole, in the state the table
//! reaches by shifting its symbol. The node that touches the edit is opened
//! up and its children are considered in turn; siblings after it lie past
//! the edit and are never pushed.
//!
//! The top entry is then unfolded until it is a token or error node; an
//! empty nonterminal on top is simply dropped. Reductions are decided
//! by the token that follows, and the token after the reused prefix may have
//! changed, so the last node built before the edit must be rebuilt. The driver
//! resumes lexing where the last pushed entry ends.
//!
//! ```text
//! expr(expr(expr(1) + 2) + 3)        edit at 4 (the "3")
//!      expr(expr(1) + 2)   pushed    ends at 3
//!      +                   opened    ends at 4: a leaf, stop
//!      expr(expr(1) + 2)   unfolded  expr(1), +, 2 pushed
//! ```

use text_size::TextSize;
use tracing::debug;

use super::parser::Parser;
use crate::base::InputEdit;
use crate::lexer::Recognizer;
use crate::tree::{Tree, TreeKind};

impl<R: Recognizer + ?Sized> Parser<'_, R> {
    /// Pushes the reusable prefix of `previous` and returns where lexing
    /// must resume.
    pub(super) fn breakdown(&mut self, previous: &Tree, edit: &InputEdit) -> TextSize {
        // An error root is what is left when recovery ran out of input; it
        // was never shifted, so there is no state to resume it in.
        if previous.is_error() {
            debug!("previous tree is an error root, parsing from scratch");
            return TextSize::new(0);
        }

        let mut left = TextSize::new(0);
        let mut level = std::slice::from_ref(previous);

        'descend: loop {
            for node in level {
                let end = left + node.total_len();
                if end >= edit.position {
                    if !node.has_children() {
                        break 'descend;
                    }
                    level = node.children();
                    continue 'descend;
                }
                if !self.push_reused(node) {
                    break 'descend;
                }
                left = end;
            }
            break;
        }

        while let Some(top) = self
            .stack
            .top_tree()
            .filter(|tree| matches!(tree.kind(), TreeKind::Internal(_)))
            .cloned()
        {
            self.stack.shrink(self.stack.len() - 1);
            for child in top.children() {
                if !self.push_reused(child) {
                    break;
                }
            }
        }

        let resume = self.stack.end_position();
        debug!(
            reused = self.stack.len(),
            resume_at = u32::from(resume),
            edit_at = u32::from(edit.position),
            "broke down previous tree"
        );
        resume
    }

    /// Pushes `node` in the state reached by shifting its symbol. Nodes
    /// flattened by collapsing may have no transition of their own from
    /// here; those are refused.
    fn push_reused(&mut self, node: &Tree) -> bool {
        match self.table.shift_target(self.stack.top_state(), node.symbol()) {
            Some(state) => {
                self.stack.push(state, node.clone());
                true
            }
            None => false,
        }
    }
}
