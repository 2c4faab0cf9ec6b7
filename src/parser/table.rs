//! Parse tables: the read-only product of a grammar compiler.
//!
//! A [`ParseTable`] is a dense `state × symbol` matrix of [`ParseAction`]s
//! plus the lexer start state of every parse state and the symbol names used
//! in diagnostics. It is built once, validated, and then shared by reference
//! for as long as any [`Parser`](super::Parser) uses it.

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::debug;

use crate::base::{LexState, StateId, Symbol};
use crate::error::TableError;

/// What the driver does in a state when it sees a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParseAction {
    /// No action: a syntax error.
    #[default]
    Error,
    /// Push the lookahead and move to the state.
    Shift(StateId),
    /// Replace the top entries with one nonterminal.
    Reduce(Reduction),
    /// The input is complete.
    Accept,
}

impl ParseAction {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// A reduce action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub symbol: Symbol,
    /// Immediate children popped from the stack, before collapsing.
    pub child_count: usize,
    /// One flag per immediate child; a collapsed child is replaced by its
    /// own children in the new node.
    pub collapse: Box<[bool]>,
}

static ERROR_ACTION: ParseAction = ParseAction::Error;

/// States and symbols are `u16` ids.
const MAX_IDS: usize = u16::MAX as usize + 1;

/// Immutable parse table.
#[derive(Debug, Clone)]
pub struct ParseTable {
    symbol_count: usize,
    actions: Vec<ParseAction>,
    lex_states: Vec<LexState>,
    names: IndexSet<SmolStr>,
    nonterminals: FxHashSet<Symbol>,
}

impl ParseTable {
    pub fn builder() -> ParseTableBuilder {
        ParseTableBuilder::new()
    }

    pub fn state_count(&self) -> usize {
        self.lex_states.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// The action for `symbol` in `state`; [`ParseAction::Error`] when either
    /// is out of range.
    pub fn action(&self, state: StateId, symbol: Symbol) -> &ParseAction {
        if symbol.index() >= self.symbol_count {
            return &ERROR_ACTION;
        }
        self.actions
            .get(state.index() * self.symbol_count + symbol.index())
            .unwrap_or(&ERROR_ACTION)
    }

    /// Target of a shift on `symbol` from `state`, if there is one.
    pub fn shift_target(&self, state: StateId, symbol: Symbol) -> Option<StateId> {
        match self.action(state, symbol) {
            ParseAction::Shift(target) => Some(*target),
            _ => None,
        }
    }

    /// Lexer start state to use when the stack is in `state`.
    pub fn lex_state(&self, state: StateId) -> LexState {
        self.lex_states.get(state.index()).copied().unwrap_or_default()
    }

    /// Every symbol with a non-error action in `state`, in symbol order.
    pub fn expected_symbols(&self, state: StateId) -> Vec<Symbol> {
        (0..self.symbol_count)
            .map(|index| Symbol(index as u16))
            .filter(|&symbol| !self.action(state, symbol).is_error())
            .collect()
    }

    /// Whether `symbol` comes from the lexer rather than from a reduction.
    pub fn is_terminal(&self, symbol: Symbol) -> bool {
        !self.nonterminals.contains(&symbol)
    }

    /// Diagnostic name of `symbol`, `"?"` if unknown.
    pub fn symbol_name(&self, symbol: Symbol) -> &str {
        self.names
            .get_index(symbol.index())
            .map(SmolStr::as_str)
            .unwrap_or("?")
    }

    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.names.get_index_of(name).map(|index| Symbol(index as u16))
    }
}

/// Assembles a [`ParseTable`] state by state.
///
/// Symbols are interned by name; `"ERROR"` and `"END"` are pre-registered as
/// [`Symbol::ERROR`] and [`Symbol::END`].
#[derive(Debug, Clone)]
pub struct ParseTableBuilder {
    names: IndexSet<SmolStr>,
    rows: Vec<FxHashMap<Symbol, ParseAction>>,
    lex_states: Vec<LexState>,
    errors: Vec<TableError>,
}

impl Default for ParseTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseTableBuilder {
    pub fn new() -> Self {
        let mut names = IndexSet::new();
        names.insert(SmolStr::new_static("ERROR"));
        names.insert(SmolStr::new_static("END"));
        Self {
            names,
            rows: Vec::new(),
            lex_states: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Interns `name`, returning the same symbol for the same name.
    ///
    /// Once every id is taken, new names get [`Symbol::ERROR`] and
    /// [`build`](Self::build) fails with [`TableError::Capacity`].
    pub fn symbol(&mut self, name: &str) -> Symbol {
        if let Some(index) = self.names.get_index_of(name) {
            return Symbol(index as u16);
        }
        let Ok(id) = u16::try_from(self.names.len()) else {
            self.errors.push(TableError::Capacity {
                kind: "symbols",
                limit: MAX_IDS,
            });
            return Symbol::ERROR;
        };
        self.names.insert(SmolStr::new(name));
        Symbol(id)
    }

    /// Allocates the next state. The first one is [`StateId::ROOT`].
    ///
    /// Past the last id this records [`TableError::Capacity`] and hands back
    /// the last state again.
    pub fn state(&mut self) -> StateId {
        let Ok(index) = u16::try_from(self.rows.len()) else {
            self.errors.push(TableError::Capacity {
                kind: "states",
                limit: MAX_IDS,
            });
            return StateId(u16::MAX);
        };
        let id = StateId(index);
        self.rows.push(FxHashMap::default());
        self.lex_states.push(LexState::default());
        id
    }

    pub fn lex_state(&mut self, state: StateId, lex_state: LexState) -> &mut Self {
        if let Some(slot) = self.lex_states.get_mut(state.index()) {
            *slot = lex_state;
        }
        self
    }

    pub fn shift(&mut self, state: StateId, on: Symbol, target: StateId) -> &mut Self {
        self.set(state, on, ParseAction::Shift(target))
    }

    /// Registers a reduction. An empty `collapse` means no child collapses.
    pub fn reduce(
        &mut self,
        state: StateId,
        on: Symbol,
        symbol: Symbol,
        child_count: usize,
        collapse: &[bool],
    ) -> &mut Self {
        let collapse = if collapse.is_empty() {
            vec![false; child_count].into_boxed_slice()
        } else {
            collapse.into()
        };
        self.set(
            state,
            on,
            ParseAction::Reduce(Reduction {
                symbol,
                child_count,
                collapse,
            }),
        )
    }

    /// [`reduce`](Self::reduce) on each of `on`.
    pub fn reduce_on(
        &mut self,
        state: StateId,
        on: &[Symbol],
        symbol: Symbol,
        child_count: usize,
        collapse: &[bool],
    ) -> &mut Self {
        for &lookahead in on {
            self.reduce(state, lookahead, symbol, child_count, collapse);
        }
        self
    }

    pub fn accept(&mut self, state: StateId, on: Symbol) -> &mut Self {
        self.set(state, on, ParseAction::Accept)
    }

    fn set(&mut self, state: StateId, on: Symbol, action: ParseAction) -> &mut Self {
        let Some(row) = self.rows.get_mut(state.index()) else {
            self.errors.push(TableError::MissingState(state));
            return self;
        };
        if let Some(previous) = row.insert(on, action.clone()) {
            if previous != action {
                self.errors.push(TableError::Conflict { state, symbol: on });
            }
        }
        self
    }

    /// Validates and freezes the table.
    pub fn build(&self) -> Result<ParseTable, TableError> {
        if self.rows.is_empty() {
            return Err(TableError::Empty);
        }
        if let Some(error) = self.errors.first() {
            return Err(error.clone());
        }

        let symbol_count = self.names.len();
        let mut actions = vec![ParseAction::Error; self.rows.len() * symbol_count];
        let mut nonterminals = FxHashSet::default();
        for (index, row) in self.rows.iter().enumerate() {
            let state = StateId(index as u16);
            for (&symbol, action) in row {
                self.validate(state, symbol, action)?;
                if let ParseAction::Reduce(reduction) = action {
                    nonterminals.insert(reduction.symbol);
                }
                actions[index * symbol_count + symbol.index()] = action.clone();
            }
        }

        debug!(
            states = self.rows.len(),
            symbols = symbol_count,
            "built parse table"
        );
        Ok(ParseTable {
            symbol_count,
            actions,
            lex_states: self.lex_states.clone(),
            names: self.names.clone(),
            nonterminals,
        })
    }

    fn validate(&self, state: StateId, symbol: Symbol, action: &ParseAction) -> Result<(), TableError> {
        if symbol.index() >= self.names.len() {
            return Err(TableError::UnknownSymbol { state, symbol });
        }
        match action {
            ParseAction::Shift(target) if target.index() >= self.rows.len() => {
                Err(TableError::UnknownState { from: state, target: *target })
            }
            ParseAction::Reduce(reduction) => {
                if reduction.symbol.is_reserved() {
                    return Err(TableError::ReservedReduction {
                        state,
                        symbol: reduction.symbol,
                    });
                }
                if reduction.symbol.index() >= self.names.len() {
                    return Err(TableError::UnknownSymbol {
                        state,
                        symbol: reduction.symbol,
                    });
                }
                if reduction.collapse.len() != reduction.child_count {
                    return Err(TableError::CollapseArity {
                        symbol: reduction.symbol,
                        child_count: reduction.child_count,
                        flags: reduction.collapse.len(),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
