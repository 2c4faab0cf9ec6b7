//! The LR driver.
//!
//! Runs the shift/reduce loop over a [`ParseTable`], pulling tokens from a
//! [`Lexer`] on demand. A reduced nonterminal re-enters the table as the next
//! lookahead, exactly like a token, while the token that triggered the
//! reduction waits in a second slot. That keeps a single action table for
//! terminals and nonterminals alike.

use text_size::TextSize;
use tracing::{debug, trace};

use super::recovery::Recovery;
use super::stack::ParseStack;
use super::table::{ParseAction, ParseTable};
use crate::base::{InputEdit, Symbol};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexer::{Input, Lexer, Recognizer};
use crate::tree::Tree;

/// A previous tree and the edit made to its text since it was parsed.
#[derive(Debug, Clone, Copy)]
pub struct Reuse<'a> {
    pub tree: &'a Tree,
    pub edit: InputEdit,
}

/// Incremental LR parser for one grammar.
///
/// The table and recognizer are borrowed for the parser's lifetime; the
/// stack and lookahead buffer are reused between parses and are empty
/// whenever no parse is running.
pub struct Parser<'t, R: ?Sized> {
    pub(super) table: &'t ParseTable,
    pub(super) recognizer: &'t R,
    pub(super) config: ParserConfig,
    pub(super) stack: ParseStack,
    pub(super) lookahead: Option<Tree>,
    pub(super) pending: Option<Tree>,
}

impl<'t, R: Recognizer + ?Sized> Parser<'t, R> {
    pub fn new(table: &'t ParseTable, recognizer: &'t R) -> Self {
        Self {
            table,
            recognizer,
            config: ParserConfig::default(),
            stack: ParseStack::new(),
            lookahead: None,
            pending: None,
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(&self) -> &'t ParseTable {
        self.table
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `input` from scratch.
    pub fn parse(&mut self, input: &mut dyn Input) -> Result<Tree, ParseError> {
        self.parse_with(input, None)
    }

    /// Parses the edited `input`, reusing the part of `previous` that lies
    /// entirely before the edit.
    pub fn reparse(
        &mut self,
        input: &mut dyn Input,
        previous: &Tree,
        edit: InputEdit,
    ) -> Result<Tree, ParseError> {
        self.parse_with(
            input,
            Some(Reuse {
                tree: previous,
                edit,
            }),
        )
    }

    /// Runs one parse to completion.
    ///
    /// Syntax errors never fail a parse: they end up as error nodes in the
    /// returned tree, and an unrecoverable error makes the root itself an
    /// error node. The only failure is the input source failing.
    pub fn parse_with(
        &mut self,
        input: &mut dyn Input,
        reuse: Option<Reuse<'_>>,
    ) -> Result<Tree, ParseError> {
        self.reset();
        let start = match reuse {
            Some(reuse) => self.breakdown(reuse.tree, &reuse.edit),
            None => TextSize::new(0),
        };
        let mut lexer = Lexer::new(input, start, self.config.whitespace);
        let tree = self.run(&mut lexer);
        self.reset();
        match lexer.take_failure() {
            Some(err) => Err(err.into()),
            None => Ok(tree),
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.lookahead = None;
        self.pending = None;
    }

    fn run(&mut self, lexer: &mut Lexer<'_>) -> Tree {
        let table = self.table;
        loop {
            let state = self.stack.top_state();
            let lookahead = match self.lookahead.take() {
                Some(lookahead) => lookahead,
                None => lexer.lex(self.recognizer, table.lex_state(state)),
            };
            let symbol = lookahead.symbol();

            match table.action(state, symbol) {
                ParseAction::Shift(target) => {
                    trace!(state = state.0, symbol = table.symbol_name(symbol), to = target.0, "shift");
                    let node = if symbol == Symbol::ERROR && lookahead.is_leaf() {
                        self.lex_error(lexer, state, lookahead)
                    } else {
                        lookahead
                    };
                    self.stack.push(*target, node);
                    self.lookahead = self.pending.take();
                }
                // A nonterminal lookahead must be shifted before the token
                // behind it can be used; anything else is a broken table.
                ParseAction::Reduce(reduction) if self.pending.is_none() => {
                    trace!(
                        state = state.0,
                        symbol = table.symbol_name(symbol),
                        to = table.symbol_name(reduction.symbol),
                        children = reduction.child_count,
                        "reduce"
                    );
                    let node = self.stack.reduce(reduction.symbol, reduction.child_count, &reduction.collapse);
                    self.pending = Some(lookahead);
                    self.lookahead = Some(node);
                }
                ParseAction::Accept => {
                    trace!(state = state.0, "accept");
                    return self.finish(lookahead);
                }
                ParseAction::Reduce(_) | ParseAction::Error => match self.recover(lexer, lookahead) {
                    Recovery::Resumed => {}
                    Recovery::Exhausted(error) => return error,
                },
            }
        }
    }

    fn finish(&mut self, lookahead: Tree) -> Tree {
        if let Some(root) = self.stack.root() {
            return root.clone();
        }
        debug!(entries = self.stack.len(), "accepted with more than one entry on the stack");
        self.stack.top_tree().cloned().unwrap_or(lookahead)
    }
}
