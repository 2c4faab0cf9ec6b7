//! Error types for table construction and parsing.
//!
//! Syntax errors are not represented here: they become error nodes inside
//! the tree (see [`crate::tree::ErrorInfo`]). These types cover the two ways
//! a caller can get things wrong outside the grammar itself.

use thiserror::Error;

use crate::base::{StateId, Symbol, TextRange};

/// Errors reported by [`ParseTableBuilder::build`](crate::parser::ParseTableBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table has no states at all.
    #[error("Parse table has no states")]
    Empty,

    /// An action was registered for a state that was never allocated.
    #[error("Action registered for unallocated state {0:?}")]
    MissingState(StateId),

    /// A shift targets a state that was never allocated.
    #[error("State {from:?} shifts to unknown state {target:?}")]
    UnknownState { from: StateId, target: StateId },

    /// An action refers to a symbol that was never allocated.
    #[error("State {state:?} refers to unknown symbol {symbol:?}")]
    UnknownSymbol { state: StateId, symbol: Symbol },

    /// Collapse flags must cover every immediate child of a reduction.
    #[error("Reduction to {symbol:?} has {child_count} children but {flags} collapse flags")]
    CollapseArity {
        symbol: Symbol,
        child_count: usize,
        flags: usize,
    },

    /// Reductions must produce a grammar symbol.
    #[error("State {state:?} reduces to reserved symbol {symbol:?}")]
    ReservedReduction { state: StateId, symbol: Symbol },

    /// Two different actions were registered for the same cell.
    #[error("Conflicting actions in state {state:?} on symbol {symbol:?}")]
    Conflict { state: StateId, symbol: Symbol },

    /// State or symbol ids ran out of room.
    #[error("Too many {kind} (limit {limit})")]
    Capacity { kind: &'static str, limit: usize },
}

/// Errors returned by the parse entry points.
///
/// A parse never fails because of the text it reads; only the input source
/// itself, or an edit that does not fit the text, can fail.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading or seeking the input failed.
    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),

    /// The edited range lies outside the text or splits a character.
    #[error("Invalid edit range {0:?}")]
    InvalidEdit(TextRange),
}
