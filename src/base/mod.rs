//! Foundation types for the sapling runtime.
//!
//! This module provides fundamental types used throughout the parser:
//! - [`Symbol`] - Terminal and nonterminal identifiers, with the reserved
//!   [`Symbol::ERROR`] and [`Symbol::END`]
//! - [`StateId`], [`LexState`] - Parse-table and lexer start states
//! - [`InputEdit`] - A single contiguous text mutation
//! - [`TextRange`], [`TextSize`] - Byte offsets
//!
//! This module has NO dependencies on other sapling modules.

mod edit;
mod symbol;

pub use edit::InputEdit;
pub use symbol::{LexState, StateId, Symbol};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
