//! Error recovery.
//!
//! On a missing action the driver hands over the offending lookahead. The
//! error node records what was found and what the failing state expected;
//! then tokens are skipped in [`LexState::ERROR`] until one can follow an
//! `ERROR` shift from some state on the stack. The innermost such state wins,
//! so as little finished structure as possible is thrown away.

use text_size::TextSize;
use tracing::debug;

use super::parser::Parser;
use crate::base::{LexState, StateId, Symbol};
use crate::lexer::{Lexer, Recognizer};
use crate::tree::{ErrorInfo, Tree};

pub(super) enum Recovery {
    /// An error node was pushed and the driver can continue.
    Resumed,
    /// End of input came first; the error node is the whole result.
    Exhausted(Tree),
}

/// What is known about the failure before any input is skipped.
struct Failure {
    /// Start of the first byte of input not on the stack.
    frontier: TextSize,
    found: Option<u8>,
    found_at: TextSize,
    expected: Vec<Symbol>,
}

impl<R: Recognizer + ?Sized> Parser<'_, R> {
    pub(super) fn recover(&mut self, lexer: &mut Lexer<'_>, offending: Tree) -> Recovery {
        let table = self.table;
        let state = self.stack.top_state();
        let failure = Failure {
            frontier: self.stack.end_position() + offending.offset(),
            found: lexer.token_first_byte(),
            found_at: lexer.token_start(),
            expected: table.expected_symbols(state),
        };
        debug!(
            state = state.0,
            symbol = table.symbol_name(offending.symbol()),
            position = u32::from(failure.found_at),
            "syntax error"
        );
        // Anything not on the stack is folded into the error node's span.
        drop(offending);
        self.pending = None;

        loop {
            let token = lexer.lex(self.recognizer, LexState::ERROR);
            let end = lexer.token_start() - token.offset();

            if token.symbol() == Symbol::END {
                let error = self.error_node(0, end, failure);
                self.stack.clear();
                debug!(range = ?error.range(), "no resynchronization point before end of input");
                return Recovery::Exhausted(error);
            }

            for depth in (0..=self.stack.len()).rev() {
                let Some(after_error) = table.shift_target(self.stack.state_at(depth), Symbol::ERROR) else {
                    continue;
                };
                if table.action(after_error, token.symbol()).is_error() {
                    continue;
                }
                debug!(
                    depth,
                    discarded = self.stack.len() - depth,
                    symbol = table.symbol_name(token.symbol()),
                    "resynchronized"
                );
                let error = self.error_node(depth, end, failure);
                self.stack.shrink(depth);
                self.stack.push(after_error, error);
                self.lookahead = Some(token);
                return Recovery::Resumed;
            }
        }
    }

    /// Turns a lex error the table can shift into an error node, so the bad
    /// input is reported like any other syntax error.
    pub(super) fn lex_error(&self, lexer: &Lexer<'_>, state: StateId, token: Tree) -> Tree {
        debug!(
            state = state.0,
            position = u32::from(lexer.token_start()),
            "shifting unrecognized input"
        );
        let info = ErrorInfo::new(
            lexer.token_first_byte(),
            TextSize::new(0),
            self.table.expected_symbols(state),
        );
        Tree::error(token.offset(), token.size(), info)
    }

    /// Builds the error node that replaces every entry above `depth` and all
    /// input up to `end`.
    fn error_node(&self, depth: usize, end: TextSize, failure: Failure) -> Tree {
        let left = self.stack.end_at(depth);
        let start = match self.stack.entries().get(depth) {
            Some(entry) => self.stack.end_at(depth) + entry.tree.offset(),
            None => failure.frontier,
        };
        let info = ErrorInfo::new(failure.found, failure.found_at - start, failure.expected);
        Tree::error(start - left, end - start, info)
    }
}
